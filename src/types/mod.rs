//! Shared primitive types: the crate error and part-of-speech tags.

mod error;
mod pos;

pub use error::{LexError, Result};
pub use pos::Pos;
