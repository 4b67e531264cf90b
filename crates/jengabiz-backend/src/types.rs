//! Records exchanged with the backend actor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub url: String,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCategory {
    pub name: String,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub rate: f64,
    #[serde(rename = "currencyPair")]
    pub currency_pair: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UssdStatus {
    Available,
    Unavailable,
    Error,
}

/// Outcome of a relayed USSD request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UssdResponse {
    pub success: bool,
    pub message: String,
    pub status: UssdStatus,
    pub timestamp: i64,
}

/// Whether the USSD relay is usable right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UssdAvailability {
    pub available: bool,
    pub message: String,
}
