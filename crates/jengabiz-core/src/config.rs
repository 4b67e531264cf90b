//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Storage key of the persisted chat history.
pub const CHAT_HISTORY_KEY: &str = "jengabiz-chat-history";

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_THINKING_MIN_MS: u64 = 1000;
pub const DEFAULT_THINKING_MAX_MS: u64 = 2000;

/// Paths to JengaBiz data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Persisted chat history (`data/jengabiz-chat-history.json`).
    pub chat_history_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the root if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            chat_history_file: root.join(format!("{CHAT_HISTORY_KEY}.json")),
            root,
        })
    }
}

/// Bounds of the simulated "thinking" pause before the advisor replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ThinkingDelay {
    /// No pause at all.
    pub const NONE: ThinkingDelay = ThinkingDelay { min_ms: 0, max_ms: 0 };

    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        if min_ms > max_ms {
            return Err(Error::Config(format!(
                "thinking delay min ({min_ms}ms) exceeds max ({max_ms}ms)"
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    pub fn is_disabled(&self) -> bool {
        self.max_ms == 0
    }

    /// Map a unit sample in `[0, 1)` onto the configured range.
    pub fn at(&self, unit: f64) -> Duration {
        let span = self.max_ms.saturating_sub(self.min_ms) as f64;
        Duration::from_millis(self.min_ms + (span * unit.clamp(0.0, 1.0)) as u64)
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_THINKING_MIN_MS,
            max_ms: DEFAULT_THINKING_MAX_MS,
        }
    }
}

/// Top-level JengaBiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JengaBizConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Simulated reply latency of the chat session.
    pub thinking_delay: ThinkingDelay,
}

impl JengaBizConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        let port = env_parse("PORT").unwrap_or(DEFAULT_PORT);

        let thinking_delay = ThinkingDelay::new(
            env_parse("JENGABIZ_THINKING_MIN_MS").unwrap_or(DEFAULT_THINKING_MIN_MS),
            env_parse("JENGABIZ_THINKING_MAX_MS").unwrap_or(DEFAULT_THINKING_MAX_MS),
        )?;

        let data_paths = DataPaths::new(data_dir)?;

        tracing::debug!(
            port,
            thinking_min_ms = thinking_delay.min_ms,
            thinking_max_ms = thinking_delay.max_ms,
            "Configuration loaded"
        );

        Ok(Self {
            port,
            data_paths,
            thinking_delay,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
