//! Contact-form handlers

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::models::{ContactMessage, ContactReceipt, ContactRequest, ContactStatusUpdate};

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    message: String,
    receipt: ContactReceipt,
}

#[derive(Serialize)]
struct ListResponse {
    success: bool,
    messages: Vec<ContactMessage>,
}

#[derive(Serialize)]
struct UpdateResponse {
    success: bool,
    message: ContactMessage,
}

/// POST /api/contact
///
/// Store a submission and notify by email when SMTP is configured.
/// The receipt reports whether the email went out.
pub async fn submit_contact(
    state: web::Data<AppState>,
    body: web::Json<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.message.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Name, email and message are all required".to_string(),
        ));
    }

    let receipt = state
        .contact
        .submit(
            request.name.trim().to_string(),
            request.email.trim().to_string(),
            request.message.trim().to_string(),
        )
        .await;

    Ok(HttpResponse::Created().json(SubmitResponse {
        success: true,
        message: "Message received! I'll get back to you soon.".to_string(),
        receipt,
    }))
}

/// GET /api/contact
pub async fn list_contacts(state: web::Data<AppState>) -> HttpResponse {
    let messages = state.contact.list().await;

    HttpResponse::Ok().json(ListResponse {
        success: true,
        messages,
    })
}

/// PATCH /api/contact/{id}
pub async fn update_contact_status(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<ContactStatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let message = state
        .contact
        .update_status(id, body.into_inner().status)
        .await
        .ok_or_else(|| AppError::NotFound(format!("contact message {id}")))?;

    Ok(HttpResponse::Ok().json(UpdateResponse {
        success: true,
        message,
    }))
}

/// Configure contact routes
pub fn configure_contact_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .route("", web::post().to(submit_contact))
            .route("", web::get().to(list_contacts))
            .route("/{id}", web::patch().to(update_contact_status)),
    );
}
