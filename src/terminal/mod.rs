pub mod printer;

pub use printer::{Printer, map_color};
