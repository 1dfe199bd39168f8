use std::sync::Mutex;

use super::UserNotifier;

/// Title shown with every message
pub const MESSAGE_TITLE: &str = "Paste JSON as Code";

/// Prints messages to stderr, prefixed by [`MESSAGE_TITLE`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn show_message(&self, text: &str) {
        eprintln!("{}: {}", MESSAGE_TITLE, text);
    }
}

/// Keeps every message it is shown
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl UserNotifier for RecordingNotifier {
    fn show_message(&self, text: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(text.to_string());
        }
    }
}
