use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for a single paste invocation
pub type Result<T> = std::result::Result<T, PasteError>;

/// Every way an invocation can end without inserting code.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Cannot paste - the clipboard is empty")]
    EmptyInput,

    #[error("Cannot paste - there is no active document")]
    NoActiveDocument,

    /// Carries the language identifier as the host reported it, not lower-cased.
    #[error("Language \"{language}\" not supported")]
    UnsupportedLanguage { language: String },

    #[error("quicktype could not be found at \"{}\"", .program.display())]
    GeneratorNotFound { program: PathBuf },

    #[error("quicktype could not process your JSON:\n\n{stderr}")]
    GeneratorExecution { stderr: String },

    #[error("Cannot paste - failed to {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: io::Error,
    },
}

impl PasteError {
    pub fn io(action: &'static str, source: io::Error) -> Self {
        PasteError::Io { action, source }
    }
}
