pub mod choice;
pub mod select;
pub mod text;
