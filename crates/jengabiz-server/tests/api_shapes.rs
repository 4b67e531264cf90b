//! API shape tests: validates that response bodies keep the field names
//! the web client reads (`Message`, chat reply, history, video catalog).

use jengabiz_advisor::{Advisor, Category, Classification, Language, Topic};
use jengabiz_chat::{ChatResponse, Exchange, HistoryResponse, Message, Role};

fn sample_exchange() -> Exchange {
    let advisor = Advisor::new();
    let reply = advisor.respond("What should I charge for delivery?");
    Exchange {
        user: Message::user("What should I charge for delivery?"),
        assistant: Message::assistant(reply.text),
        classification: reply.classification,
    }
}

/// Message shape: { id, role, content, timestamp }
#[test]
fn test_message_shape() {
    let json = serde_json::to_value(Message::user("Habari")).unwrap();

    assert!(json["id"].is_string());
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "Habari");
    assert!(json["timestamp"].is_i64());
    assert_eq!(json.as_object().unwrap().len(), 4);
}

/// Chat reply shape: { userMessage, message, language, category }
#[test]
fn test_chat_response_shape() {
    let response = ChatResponse::from(sample_exchange());
    let json = serde_json::to_value(&response).unwrap();

    assert!(json["userMessage"].is_object());
    assert_eq!(json["message"]["role"], "assistant");
    assert_eq!(json["language"], "en");
    assert_eq!(json["category"]["kind"], "topic");
    assert_eq!(json["category"]["topic"], "pricing");
}

/// History shape: { messages: Message[] }, oldest first.
#[test]
fn test_history_shape() {
    let exchange = sample_exchange();
    let history = HistoryResponse {
        messages: vec![exchange.user, exchange.assistant],
    };
    let json = serde_json::to_value(&history).unwrap();

    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[1]["role"], "assistant");
}

/// Stored history written by older clients still loads.
#[test]
fn test_history_accepts_client_written_messages() {
    let stored = r#"[
        {"id": "user-1700000000000", "role": "user", "content": "hi", "timestamp": 1700000000000},
        {"id": "assistant-1700000001500", "role": "assistant", "content": "Jambo!", "timestamp": 1700000001500}
    ]"#;
    let messages: Vec<Message> = serde_json::from_str(stored).unwrap();
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].timestamp, 1_700_000_001_500);
}

/// Classification shape used by /api/advisor/classify.
#[test]
fn test_classification_shape() {
    let c = Classification {
        language: Language::Sw,
        category: Category::Topic(Topic::StartingBusiness),
    };
    let json = serde_json::to_value(c).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "language": "sw",
            "category": {"kind": "topic", "topic": "starting_business"},
        })
    );
}

/// Video catalog shape: [{ name, videos: [{ url, title, thumbnail, description, category }] }]
#[test]
fn test_curated_categories_shape() {
    let json = serde_json::to_value(jengabiz_backend::curated_categories()).unwrap();
    let first = &json[0];
    assert!(first["name"].is_string());
    let video = &first["videos"][0];
    for field in ["url", "title", "thumbnail", "description", "category"] {
        assert!(video[field].is_string(), "missing {field}");
    }
}
