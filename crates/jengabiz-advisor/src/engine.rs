//! Response orchestration: language → greeting → topic → general fallback.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use jengabiz_core::{Error, Result};

use crate::greeting::is_greeting;
use crate::language::{detect_language, Language};
use crate::pools::{LanguagePool, GENERAL_RESPONSES, GREETINGS};
use crate::select::select;
use crate::topics::{match_topic_in, Topic, TopicTemplate, TOPIC_TEMPLATES};

/// Which pool a message was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "topic", rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Topic(Topic),
    General,
}

/// Pure classification of a message. Depends on the text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub language: Language,
    pub category: Category,
}

/// A chosen reply with the classification that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub classification: Classification,
    pub text: String,
}

/// The business-advice engine. Holds only immutable static tables.
#[derive(Debug, Clone, Copy)]
pub struct Advisor {
    templates: &'static [TopicTemplate],
    greetings: &'static LanguagePool,
    general: &'static LanguagePool,
}

impl Default for Advisor {
    fn default() -> Self {
        Self {
            templates: TOPIC_TEMPLATES,
            greetings: &GREETINGS,
            general: &GENERAL_RESPONSES,
        }
    }
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom template list with the built-in greeting and fallback pools.
    ///
    /// Every template must carry replies in both languages.
    pub fn with_templates(templates: &'static [TopicTemplate]) -> Result<Self> {
        if let Some(bad) = templates.iter().find(|t| !t.responses.is_complete()) {
            return Err(Error::Config(format!(
                "topic template '{}' is missing replies for a language",
                bad.topic
            )));
        }
        Ok(Self {
            templates,
            ..Self::default()
        })
    }

    pub fn templates(&self) -> &'static [TopicTemplate] {
        self.templates
    }

    /// Classify a message without choosing a reply.
    pub fn classify(&self, message: &str) -> Classification {
        let language = detect_language(message);

        let category = if is_greeting(message) {
            Category::Greeting
        } else if let Some(template) = match_topic_in(self.templates, message) {
            Category::Topic(template.topic)
        } else {
            Category::General
        };

        Classification { language, category }
    }

    /// Reply pool for a classification.
    pub fn pool(&self, classification: &Classification) -> &'static [&'static str] {
        let pool = match classification.category {
            Category::Greeting => self.greetings,
            Category::Topic(topic) => self
                .templates
                .iter()
                .find(|t| t.topic == topic)
                .map(|t| &t.responses)
                .unwrap_or(self.general),
            Category::General => self.general,
        };
        pool.for_language(classification.language)
    }

    /// Classify and pick a reply using the given random source.
    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Reply {
        let classification = self.classify(message);
        let text = select(self.pool(&classification), rng)
            .or_else(|| select(self.general.for_language(classification.language), rng))
            .unwrap_or(GENERAL_RESPONSES.en[0])
            .to_string();

        debug!(
            language = %classification.language,
            category = ?classification.category,
            "Advisor reply selected"
        );

        Reply {
            classification,
            text,
        }
    }

    /// Classify and pick a reply using the thread-local generator.
    pub fn respond(&self, message: &str) -> Reply {
        self.respond_with(message, &mut rand::thread_rng())
    }
}

/// Generate the advisor's reply to a user message. Never fails, never empty.
pub fn generate_ai_response(message: &str) -> String {
    Advisor::default().respond(message).text
}
