//! Utility modules for the pricing engine
//!
//! - **error**: Error handling and the crate `Result` alias
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{EngineError, Result};
