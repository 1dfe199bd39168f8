//! Collaborators the workflow pulls its inputs from and pushes its results to.
//!
//! An editor integration implements these traits over its own services. The
//! CLI implementations below treat a file on disk as the active document.

mod clipboard;
mod document;
mod notifier;
mod temp;

use std::io;
use std::path::{Path, PathBuf};

use crate::models::ProcessOutput;

pub use clipboard::{FileClipboard, ReaderClipboard, StaticClipboard, SystemClipboard};
pub use document::{
    declared_language, FileDocument, PrintDocument, Selection, DEFAULT_LANGUAGE,
};
pub use notifier::{ConsoleNotifier, RecordingNotifier, MESSAGE_TITLE};
pub use temp::{SystemTempStore, TempJsonFile};

/// Source of the text to paste
pub trait ClipboardSource {
    /// Current clipboard text, possibly empty
    fn get_text(&self) -> io::Result<String>;
}

/// Name and declared language of the focused document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Language identifier as the host reports it, in its original case
    pub language: String,
    pub file_path: PathBuf,
}

/// The document the user is editing
pub trait ActiveDocumentProvider {
    /// `None` when no document is active
    fn active_document(&self) -> Option<DocumentInfo>;

    /// Replace the current selection with `text`, or insert at the caret.
    fn insert_at_selection(&self, text: &str) -> io::Result<()>;
}

/// Unique scratch files for the generator's input
pub trait TempFileStore {
    fn create_temp_file(&self) -> io::Result<TempJsonFile>;

    fn write_all_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Runs the external generator to completion
pub trait GeneratorProcess {
    fn run(&self, executable: &Path, args: &[String]) -> io::Result<ProcessOutput>;
}

/// Shows one blocking message to the user
pub trait UserNotifier {
    fn show_message(&self, text: &str);
}
