//! Chat types matching the web client's message shape.

use serde::{Deserialize, Serialize};

use jengabiz_advisor::{Category, Classification, Language};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat message. `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: i64,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: format!("{}-{}", role, uuid::Uuid::new_v4()),
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// One completed user → assistant turn.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: Message,
    pub assistant: Message,
    pub classification: Classification,
}

/// Incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat response: both sides of the turn plus how the message was routed.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "userMessage")]
    pub user_message: Message,
    pub message: Message,
    pub language: Language,
    pub category: Category,
}

impl From<Exchange> for ChatResponse {
    fn from(exchange: Exchange) -> Self {
        Self {
            user_message: exchange.user,
            message: exchange.assistant,
            language: exchange.classification.language,
            category: exchange.classification.category,
        }
    }
}

/// Stored history response.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
}
