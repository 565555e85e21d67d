use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::video::VideoResult;

/// Body of `POST /chat`. Every field is optional on the wire, and a field that
/// is null or of the wrong type reads as its default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    #[serde(deserialize_with = "lenient")]
    pub prompt: String,
    #[serde(deserialize_with = "lenient_list")]
    pub history: Vec<HistoryMessage>,
    #[serde(deserialize_with = "lenient")]
    pub profile: Profile,
}

impl ChatRequest {
    /// Anything that is not a JSON object reads as an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HistoryMessage {
    #[serde(deserialize_with = "lenient")]
    pub role: String,
    #[serde(deserialize_with = "lenient_list")]
    pub parts: Vec<Part>,
}

impl HistoryMessage {
    /// Only the first part carries text.
    pub fn text(&self) -> &str {
        self.parts.first().map(|p| p.text.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Part {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "aiPersona", deserialize_with = "lenient")]
    pub ai_persona: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// Bad entries are defaulted one by one so the rest of the list survives.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

impl Role {
    /// Anything that is not the user is the assistant.
    pub fn from_history(role: &str) -> Self {
        if role == "user" {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// What the front-end receives. `response_type` decides the shape of `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "response_type", content = "data", rename_all = "lowercase")]
pub enum ChatResponse {
    Text(String),
    Music {
        text: String,
        #[serde(rename = "videoId")]
        video_id: String,
    },
    Movie {
        text: String,
        #[serde(rename = "videoId")]
        video_id: String,
        title: String,
    },
}

impl ChatResponse {
    pub fn music(text: String, video: VideoResult) -> Self {
        ChatResponse::Music {
            text,
            video_id: video.video_id,
        }
    }

    pub fn movie(text: String, video: VideoResult) -> Self {
        ChatResponse::Movie {
            text,
            video_id: video.video_id,
            title: video.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default() {
        let req: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.prompt.is_empty());
        assert!(req.history.is_empty());
        assert!(req.profile.ai_persona.is_none());

        let req: ChatRequest = serde_json::from_value(json!({
            "prompt": "hi",
            "history": [{ "role": "model" }],
            "profile": { "aiPersona": null },
            "extra": true
        }))
        .unwrap();
        assert_eq!(req.prompt, "hi");
        assert_eq!(req.history[0].text(), "");
        assert!(req.profile.ai_persona.is_none());
    }

    #[test]
    fn null_and_mistyped_fields_default() {
        let req: ChatRequest = serde_json::from_value(json!({
            "prompt": "เปิดเพลง",
            "profile": null,
            "history": "not a list"
        }))
        .unwrap();
        assert_eq!(req.prompt, "เปิดเพลง");
        assert!(req.history.is_empty());
        assert!(req.profile.ai_persona.is_none());

        let req: ChatRequest = serde_json::from_value(json!({
            "prompt": null,
            "profile": { "aiPersona": 42 },
            "history": [
                "stray",
                { "role": 7, "parts": [{ "text": null }] },
                { "role": "user", "parts": [{ "text": "kept" }] }
            ]
        }))
        .unwrap();
        assert!(req.prompt.is_empty());
        assert!(req.profile.ai_persona.is_none());
        assert_eq!(req.history.len(), 3);
        assert_eq!(req.history[0].role, "");
        assert_eq!(req.history[1].text(), "");
        assert_eq!(req.history[2].text(), "kept");
    }

    #[test]
    fn unreadable_bodies_are_empty_requests() {
        for body in ["", "   ", "null", "{\"prompt\": ", "[1,2]", "\"play music\""] {
            let req = ChatRequest::from_body(body.as_bytes());
            assert!(req.prompt.is_empty(), "body {:?}", body);
            assert!(req.history.is_empty());
        }
        let req = ChatRequest::from_body(br#"{"prompt": "hi"}"#);
        assert_eq!(req.prompt, "hi");
    }

    #[test]
    fn first_part_is_used() {
        let msg: HistoryMessage = serde_json::from_value(json!({
            "role": "user",
            "parts": [{ "text": "first" }, { "text": "second" }]
        }))
        .unwrap();
        assert_eq!(msg.text(), "first");
    }

    #[test]
    fn envelopes_match_wire_shape() {
        assert_eq!(
            serde_json::to_value(ChatResponse::Text("hello".into())).unwrap(),
            json!({ "response_type": "text", "data": "hello" })
        );

        let video = VideoResult {
            video_id: "abc123".into(),
            title: "Lofi".into(),
        };
        assert_eq!(
            serde_json::to_value(ChatResponse::music("playing".into(), video.clone())).unwrap(),
            json!({ "response_type": "music", "data": { "text": "playing", "videoId": "abc123" } })
        );
        assert_eq!(
            serde_json::to_value(ChatResponse::movie("showing".into(), video)).unwrap(),
            json!({
                "response_type": "movie",
                "data": { "text": "showing", "videoId": "abc123", "title": "Lofi" }
            })
        );
    }
}
