//! Input handling module

pub mod cleaner;
pub mod reader;

pub use cleaner::clean_line;
pub use reader::{load_from_reader, load_words};
