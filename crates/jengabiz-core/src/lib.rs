//! JengaBiz Core: error type, configuration, data directory management.

pub mod config;
pub mod error;

pub use config::{DataPaths, JengaBizConfig, ThinkingDelay};
pub use error::{Error, Result};
