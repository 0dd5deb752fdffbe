//! The feedback form popup.
//!
//! Submission runs on a background thread through `FeedbackClient`; the
//! form polls the result channel from the frame loop. Validation errors
//! are shown inline and auto-dismissed after five seconds.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::egui;

use c_atlas::api::{FeedbackClient, SubmitError, SubmitRequest};

const ERROR_DISMISS: Duration = Duration::from_secs(5);

pub struct FeedbackForm {
    base_url: String,
    pub open: bool,
    pub name: String,
    pub email: String,
    pub message: String,
    error: Option<(String, Instant)>,
    sending: bool,
    rx: Option<mpsc::Receiver<Result<(), SubmitError>>>,
}

impl FeedbackForm {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            open: false,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            error: None,
            sending: false,
            rx: None,
        }
    }

    pub fn busy(&self) -> bool {
        self.sending || self.error.is_some()
    }

    /// Poll the background submission and expire stale errors.
    pub fn poll(&mut self) {
        if let Some(rx) = &self.rx {
            if let Ok(result) = rx.try_recv() {
                self.rx = None;
                self.sending = false;
                match result {
                    Ok(()) => {
                        log::info!("feedback submitted");
                        self.reset();
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
        }
        if let Some((_, at)) = &self.error {
            if at.elapsed() >= ERROR_DISMISS {
                self.error = None;
            }
        }
    }

    pub fn draw(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new("Send Feedback")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.label("Name (optional)");
                ui.text_edit_singleline(&mut self.name);
                ui.label("Email (optional)");
                ui.text_edit_singleline(&mut self.email);
                ui.label("Message");
                ui.add(
                    egui::TextEdit::multiline(&mut self.message)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                if let Some((message, _)) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.add_enabled(!self.sending, egui::Button::new("Submit")).clicked() {
                        self.submit(ctx.clone());
                    }
                    if self.sending {
                        ui.spinner();
                    }
                });
            });
        self.open = open;
        if !self.open {
            self.reset();
        }
    }

    fn submit(&mut self, ctx: egui::Context) {
        if self.message.trim().is_empty() {
            self.set_error("Message is required".to_string());
            return;
        }

        let request = SubmitRequest {
            name: non_empty(&self.name),
            email: non_empty(&self.email),
            message: self.message.trim().to_string(),
        };
        let base_url = self.base_url.clone();
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        self.sending = true;
        self.error = None;

        std::thread::spawn(move || {
            let result =
                FeedbackClient::new(&base_url).and_then(|client| client.submit(&request));
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    fn set_error(&mut self, message: String) {
        self.error = Some((message, Instant::now()));
    }

    fn reset(&mut self) {
        self.open = false;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.error = None;
        self.sending = false;
        self.rx = None;
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" a "), Some("a".to_string()));
    }

    #[test]
    fn test_empty_message_sets_inline_error() {
        let mut form = FeedbackForm::new("http://localhost:3000".to_string());
        form.message = "   ".to_string();
        assert!(form.message.trim().is_empty());
        form.set_error("Message is required".to_string());
        assert!(form.busy());
    }
}
