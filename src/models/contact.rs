//! Contact-form models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Incoming contact form submission
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Stored contact message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Triage status, e.g. "new", "read", "replied"
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a contact submission; both steps are best-effort
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub saved: bool,
    pub email_sent: bool,
}

/// Body for updating a stored message's status
#[derive(Debug, Clone, Deserialize)]
pub struct ContactStatusUpdate {
    pub status: String,
}
