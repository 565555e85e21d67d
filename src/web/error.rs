use actix_web::http::StatusCode;
use thiserror::Error;

use crate::locale::Locale;
use crate::model::CompletionError;
use crate::web::models::ChatResponse;

/// Everything that can stop `/chat` from producing a normal reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("{0}")]
    Completion(#[from] CompletionError),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::EmptyPrompt => StatusCode::BAD_REQUEST,
            ChatError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text envelope shown to the user in place of a reply.
    pub fn to_response(&self, locale: Locale) -> ChatResponse {
        match self {
            ChatError::EmptyPrompt => ChatResponse::Text(locale.no_prompt().to_string()),
            ChatError::Completion(e) => {
                ChatResponse::Text(format!("{}{}", locale.error_marker(), e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status_and_text() {
        assert_eq!(ChatError::EmptyPrompt.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ChatError::EmptyPrompt.to_response(Locale::Thai),
            ChatResponse::Text("❌ ไม่มีข้อความ prompt".into())
        );

        let err = ChatError::from(CompletionError::Api {
            status: 429,
            body: "rate limited".into(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_response(Locale::Thai),
            ChatResponse::Text("⛔️ เกิดข้อผิดพลาด: Error code: 429 - rate limited".into())
        );
    }
}
