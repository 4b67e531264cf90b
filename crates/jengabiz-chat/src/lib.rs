//! Chat layer around the advisor engine.
//!
//! Owns the message list, persists it as JSON, and paces replies with a
//! short simulated "thinking" delay.

pub mod history;
pub mod session;
pub mod types;

pub use history::ChatHistory;
pub use session::ChatSession;
pub use types::*;
