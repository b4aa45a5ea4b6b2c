//! Chatbot handler

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
struct ChatResponse {
    success: bool,
    reply: String,
}

/// POST /api/chatbot
///
/// Answer a visitor message. Falls back to canned replies when the AI
/// backend is unconfigured or down, so this only fails on bad input.
pub async fn chatbot(
    state: web::Data<AppState>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let reply = state.chat.reply(message).await;

    Ok(HttpResponse::Ok().json(ChatResponse {
        success: true,
        reply,
    }))
}

/// Configure chatbot routes
pub fn configure_chat_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/chatbot").route(web::post().to(chatbot)));
}
