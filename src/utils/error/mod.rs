//! Error handling module

mod error;

pub use error::{EngineError, Result};
