pub mod action_style;
pub mod frame_json;
pub mod span;
pub mod style;
pub mod theme;
