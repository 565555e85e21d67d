use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::model::build_messages;
use crate::web::error::ChatError;
use crate::web::intent::{self, Intent};
use crate::web::models::{ChatRequest, ChatResponse};
use crate::web::AppState;

/// Renders the chat page in the configured language, with the two trigger
/// phrases offered as hints.
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let locale = data.locale;
    let mut context = Context::new();
    context.insert("lang", locale.code());
    context.insert("triggers", &[locale.music_trigger(), locale.movie_trigger()]);

    data.tera
        .render("index.html", &context)
        .map(|page| HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page))
        .unwrap_or_else(|e| {
            error!("Could not render index.html: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        })
}

pub async fn health_check() -> impl Responder {
    web::Json(json!({ "status": "ok" }))
}

// The body is read as JSON whatever its content type.
pub async fn chat(data: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let request_id = Uuid::new_v4();

    match handle_chat(&data, &body, request_id).await {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(e) => {
            match &e {
                ChatError::Completion(_) => error!("[{}] Completion error: {}", request_id, e),
                ChatError::EmptyPrompt => warn!("[{}] Rejected chat request: {}", request_id, e),
            }
            HttpResponse::build(e.status_code()).json(e.to_response(data.locale))
        }
    }
}

async fn handle_chat(
    state: &AppState,
    body: &[u8],
    request_id: Uuid,
) -> Result<ChatResponse, ChatError> {
    let req = ChatRequest::from_body(body);
    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err(ChatError::EmptyPrompt);
    }

    let locale = state.locale;
    match intent::detect(prompt, locale) {
        Intent::PlayMusic { query } => {
            info!("[{}] Music request: {}", request_id, query);
            let reply = match state.videos.search(&query).await {
                Some(video) => ChatResponse::music(locale.now_playing_music(&video.title), video),
                None => ChatResponse::Text(locale.music_not_found().to_string()),
            };
            Ok(reply)
        }
        Intent::WatchMovie { query } => {
            info!("[{}] Movie request: {}", request_id, query);
            let reply = match state.videos.search(&query).await {
                Some(video) => ChatResponse::movie(locale.now_playing_movie(&video.title), video),
                None => ChatResponse::Text(locale.movie_not_found().to_string()),
            };
            Ok(reply)
        }
        Intent::Chat => {
            info!(
                "[{}] Chat request with {} history messages",
                request_id,
                req.history.len()
            );
            let messages = build_messages(
                prompt,
                &req.history,
                req.profile.ai_persona.as_deref(),
                locale,
            );
            let text = state.completion.complete(&messages).await?;
            Ok(ChatResponse::Text(text))
        }
    }
}
