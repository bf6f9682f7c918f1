pub mod context;
pub mod dialog;
pub mod form_state;
