//! Persisted chat history: a JSON array of messages on disk.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use jengabiz_core::Result;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::types::Message;

/// In-memory message list mirrored to a JSON file.
///
/// Read once on construction; written on every change. Storage failures
/// are logged and never surface to the caller.
pub struct ChatHistory {
    path: PathBuf,
    messages: RwLock<Vec<Message>>,
    /// Bumped by every clear, under the messages write lock.
    generation: AtomicU64,
}

impl ChatHistory {
    /// Load history from `path`. Missing or unreadable files give an empty history.
    pub fn load(path: &Path) -> Self {
        let messages = load_messages(path);
        info!("ChatHistory: {} messages loaded", messages.len());

        Self {
            path: path.to_path_buf(),
            messages: RwLock::new(messages),
            generation: AtomicU64::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a message and persist. Returns the generation it was recorded in.
    pub fn push(&self, message: Message) -> u64 {
        let generation = {
            let mut messages = self.messages.write();
            messages.push(message);
            self.generation.load(Ordering::Acquire)
        };
        self.save();
        generation
    }

    /// Current clear generation. Changes whenever the history is cleared.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Append a message only if no clear happened since `generation` was read.
    ///
    /// Returns whether the message was recorded.
    pub fn push_if_current(&self, generation: u64, message: Message) -> bool {
        {
            let mut messages = self.messages.write();
            if self.generation.load(Ordering::Acquire) != generation {
                return false;
            }
            messages.push(message);
        }
        self.save();
        true
    }

    /// Drop all messages and remove the file.
    pub fn clear(&self) {
        {
            let mut messages = self.messages.write();
            messages.clear();
            self.generation.fetch_add(1, Ordering::AcqRel);
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!("Cleared chat history at {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove chat history {}: {}", self.path.display(), e),
        }
    }

    /// Write the current list, logging failures.
    fn save(&self) {
        if let Err(e) = self.write() {
            warn!("Failed to save chat history to {}: {}", self.path.display(), e);
        }
    }

    /// An empty list is not written.
    fn write(&self) -> Result<()> {
        let json = {
            let messages = self.messages.read();
            if messages.is_empty() {
                return Ok(());
            }
            serde_json::to_string(&*messages)?
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

fn load_messages(path: &Path) -> Vec<Message> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Failed to read chat history {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    serde_json::from_str(&data).unwrap_or_else(|e| {
        warn!("Failed to parse chat history {}: {}", path.display(), e);
        Vec::new()
    })
}
