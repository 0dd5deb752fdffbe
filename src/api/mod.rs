//! The feedback endpoint: server-side handler, notifier seam, and the
//! client the form UI talks to.

pub mod client;
pub mod submit;

pub use client::FeedbackClient;
pub use submit::{handle_submit, ApiResponse, Notifier, SubmitRequest, TelegramNotifier};

/// Feedback submission failures, as seen by the handler and the client.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Message is required")]
    Validation,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Failed to send message: {0}")]
    Notify(String),
    #[error("Malformed submission: {0}")]
    BadBody(String),
}
