//! JengaBiz Advisor: keyword/regex business-advice engine.
//!
//! Classifies a user message by language (English or Swahili) and by
//! intent (greeting, one of the business topics, or general), then picks
//! a canned reply from the matching pool. Classification is pure; only
//! the final pick consumes randomness, and the random source can be
//! injected through [`Advisor::respond_with`].

pub mod engine;
pub mod greeting;
pub mod language;
pub mod pools;
pub mod select;
pub mod topics;

pub use engine::{generate_ai_response, Advisor, Category, Classification, Reply};
pub use greeting::is_greeting;
pub use language::{detect_language, Language};
pub use pools::LanguagePool;
pub use topics::{match_topic, Topic, TopicTemplate, TOPIC_TEMPLATES};
