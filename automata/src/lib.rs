
pub mod lexer;
pub mod declarations;
pub mod line_counter;
mod error;

pub use error::{Error, Result};
