//! Feedback submission handler.
//!
//! Mirrors a conventional JSON POST endpoint: method and body validation map
//! to HTTP statuses, and delivery goes through the `Notifier` seam so the
//! handler is testable without network access. Without a configured notifier
//! the submission is logged and still acknowledged.

use serde::Deserialize;
use serde_json::json;

use super::SubmitError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// An HTTP-shaped result: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    fn error(status: u16, message: &str) -> Self {
        Self { status, body: json!({ "error": message }) }
    }
}

/// Delivers a formatted feedback text somewhere out of process.
pub trait Notifier {
    fn notify(&self, text: &str) -> Result<(), SubmitError>;
}

/// Handle one submission. `method` is the HTTP verb, `body` the raw JSON
/// payload.
pub fn handle_submit(method: &str, body: &str, notifier: Option<&dyn Notifier>) -> ApiResponse {
    if method != "POST" {
        return ApiResponse::error(405, &SubmitError::MethodNotAllowed.to_string());
    }

    let request: SubmitRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("feedback body rejected: {}", e);
            return ApiResponse::error(500, "Failed to send message");
        }
    };

    if request.message.trim().is_empty() {
        return ApiResponse::error(400, &SubmitError::Validation.to_string());
    }

    let text = format_notification(&request);
    match notifier {
        Some(notifier) => {
            if let Err(e) = notifier.notify(&text) {
                log::error!("feedback delivery failed: {}", e);
                return ApiResponse::error(500, "Failed to send message");
            }
        }
        None => log::info!("feedback received (no notifier configured):\n{}", text),
    }

    ApiResponse {
        status: 200,
        body: json!({ "success": true, "message": "Form submitted successfully" }),
    }
}

fn format_notification(request: &SubmitRequest) -> String {
    let not_provided = "Not provided".to_string();
    format!(
        "New feedback submission\nName: {}\nEmail: {}\nMessage: {}\nTime: {}",
        request.name.as_ref().filter(|s| !s.trim().is_empty()).unwrap_or(&not_provided),
        request.email.as_ref().filter(|s| !s.trim().is_empty()).unwrap_or(&not_provided),
        request.message.trim(),
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    )
}

/// Sends the notification text to a Telegram chat via the Bot API.
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    client: reqwest::blocking::Client,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String) -> Result<Self, SubmitError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("c-atlas/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| SubmitError::Notify(e.to_string()))?;
        Ok(Self { token, chat_id, client })
    }

    /// Reads `TG_BOT_TOKEN` and `TG_CHAT_ID`; both must be set.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("TG_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TG_CHAT_ID").ok()?;
        Self::new(token, chat_id).ok()
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, text: &str) -> Result<(), SubmitError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let response = self
            .client
            .post(url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .map_err(|e| SubmitError::Notify(e.to_string()))?;
        if !response.status().is_success() {
            return Err(SubmitError::Notify(format!(
                "telegram returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _text: &str) -> Result<(), SubmitError> {
            Err(SubmitError::Notify("boom".to_string()))
        }
    }

    struct RecordingNotifier {
        calls: Cell<usize>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, text: &str) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            assert!(text.contains("Message: hello"));
            assert!(text.contains("Name: Not provided"));
            Ok(())
        }
    }

    #[test]
    fn test_get_is_rejected() {
        let response = handle_submit("GET", "{}", None);
        assert_eq!(response.status, 405);
        assert_eq!(response.body["error"], "Method not allowed");
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let response = handle_submit("POST", r#"{"message":"   "}"#, None);
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "Message is required");
    }

    #[test]
    fn test_malformed_body_is_a_server_error() {
        let response = handle_submit("POST", "not json", None);
        assert_eq!(response.status, 500);
    }

    #[test]
    fn test_success_without_notifier() {
        let response = handle_submit("POST", r#"{"message":"works on my machine"}"#, None);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["message"], "Form submitted successfully");
    }

    #[test]
    fn test_notifier_receives_formatted_text() {
        let notifier = RecordingNotifier { calls: Cell::new(0) };
        let response = handle_submit("POST", r#"{"message":"hello"}"#, Some(&notifier));
        assert_eq!(response.status, 200);
        assert_eq!(notifier.calls.get(), 1);
    }

    #[test]
    fn test_notifier_failure_is_a_server_error() {
        let response =
            handle_submit("POST", r#"{"message":"hello"}"#, Some(&FailingNotifier));
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], "Failed to send message");
    }
}
