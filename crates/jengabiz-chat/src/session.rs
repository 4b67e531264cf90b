//! Chat session: one user turn at a time, replies paced by a thinking delay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use jengabiz_advisor::Advisor;
use jengabiz_core::{Error, Result, ThinkingDelay};

use crate::history::ChatHistory;
use crate::types::{Exchange, Message};

/// Single-conversation chat session.
///
/// If the future returned by [`ChatSession::send`] is dropped during the
/// thinking delay, or the history is cleared meanwhile, no reply is recorded
/// and the session becomes free again.
pub struct ChatSession {
    advisor: Advisor,
    history: Arc<ChatHistory>,
    thinking: ThinkingDelay,
    busy: AtomicBool,
}

/// Clears the busy flag when a send finishes or is abandoned.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ChatSession {
    pub fn new(advisor: Advisor, history: Arc<ChatHistory>, thinking: ThinkingDelay) -> Self {
        Self {
            advisor,
            history,
            thinking,
            busy: AtomicBool::new(false),
        }
    }

    pub fn advisor(&self) -> &Advisor {
        &self.advisor
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Whether a reply is currently being prepared.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Record the user's message, wait, then record and return the advisor's reply.
    pub async fn send(&self, input: &str) -> Result<Exchange> {
        let content = input.trim();
        if content.is_empty() {
            return Err(Error::InvalidInput("message is empty".into()));
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::Busy("a reply is already in progress".into()));
        }
        let _guard = BusyGuard(&self.busy);

        let user = Message::user(content);
        let generation = self.history.push(user.clone());

        if !self.thinking.is_disabled() {
            let delay = self.thinking.at(rand::random::<f64>());
            debug!("Thinking for {}ms", delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        let reply = self.advisor.respond(&user.content);
        let assistant = Message::assistant(reply.text);
        if !self.history.push_if_current(generation, assistant.clone()) {
            info!("History cleared during reply, dropping it");
            return Err(Error::Cancelled("history was cleared before the reply".into()));
        }

        info!(
            language = %reply.classification.language,
            category = ?reply.classification.category,
            "Chat turn completed"
        );

        Ok(Exchange {
            user,
            assistant,
            classification: reply.classification,
        })
    }

    pub fn clear(&self) {
        self.history.clear();
    }
}
