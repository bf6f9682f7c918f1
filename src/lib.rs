pub mod config;
pub mod core;
pub mod presets;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::core::FieldId;
pub use crate::core::schema;
pub use crate::core::validation;
pub use crate::core::validators;
pub use crate::core::value;

pub use crate::state::context;
pub use crate::state::dialog;
pub use crate::state::form_state;

pub use crate::ui::action_style;
pub use crate::ui::frame_json;
pub use crate::ui::span;
pub use crate::ui::style;
pub use crate::ui::theme;
