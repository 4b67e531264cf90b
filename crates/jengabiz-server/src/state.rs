//! Shared application state.

use std::sync::Arc;

use jengabiz_advisor::Advisor;
use jengabiz_chat::{ChatHistory, ChatSession};
use jengabiz_core::JengaBizConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: JengaBizConfig,
    pub session: ChatSession,
}

impl AppState {
    pub fn new(config: JengaBizConfig) -> Self {
        let history = Arc::new(ChatHistory::load(&config.data_paths.chat_history_file));
        let session = ChatSession::new(Advisor::new(), history, config.thinking_delay);

        Self { config, session }
    }
}
