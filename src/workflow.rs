//! The "paste JSON as code" command.

use std::io;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::{PasteError, Result};
use crate::generator::generator_args;
use crate::host::{
    ActiveDocumentProvider, ClipboardSource, GeneratorProcess, TempFileStore, UserNotifier,
};
use crate::models::{GenerationOutcome, GenerationRequest, SupportedLanguageSet};
use crate::utils::top_level_type_name;

/// The services one invocation reads from and writes to
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub clipboard: &'a dyn ClipboardSource,
    pub document: &'a dyn ActiveDocumentProvider,
    pub temp_files: &'a dyn TempFileStore,
    pub generator: &'a dyn GeneratorProcess,
    pub notifier: &'a dyn UserNotifier,
}

/// Pastes clipboard JSON into the active document as generated source code.
///
/// Construct once and call [`execute`](Self::execute) per user action. No
/// state is carried between invocations.
pub struct InvocationWorkflow<'a> {
    host: Collaborators<'a>,
    generator_path: PathBuf,
    languages: SupportedLanguageSet,
}

impl<'a> InvocationWorkflow<'a> {
    pub fn new(host: Collaborators<'a>, generator_path: PathBuf) -> Self {
        Self {
            host,
            generator_path,
            languages: SupportedLanguageSet::quicktype(),
        }
    }

    /// Run one invocation end to end.
    ///
    /// On success the generated code has been inserted and is returned. On
    /// failure the user has been shown exactly one message and the error is
    /// returned for the caller's exit status.
    pub fn execute(&self) -> Result<String> {
        match self.run() {
            Ok(code) => {
                info!(bytes = code.len(), "inserted generated code");
                Ok(code)
            }
            Err(err) => {
                warn!(error = %err, "paste failed");
                self.host.notifier.show_message(&err.to_string());
                Err(err)
            }
        }
    }

    fn run(&self) -> Result<String> {
        let json_text = self
            .host
            .clipboard
            .get_text()
            .map_err(|e| PasteError::io("read the clipboard", e))?
            .trim()
            .to_string();
        if json_text.is_empty() {
            return Err(PasteError::EmptyInput);
        }

        let document = self
            .host
            .document
            .active_document()
            .ok_or(PasteError::NoActiveDocument)?;

        let target_language = self.languages.resolve(&document.language).ok_or_else(|| {
            PasteError::UnsupportedLanguage {
                language: document.language.clone(),
            }
        })?;

        let request = GenerationRequest {
            json_text,
            target_language,
            top_level_name: top_level_type_name(&document.file_path),
        };
        debug!(
            language = %request.target_language,
            top_level = %request.top_level_name,
            document = %document.file_path.display(),
            "generating code"
        );

        // Deleted when dropped, after the generator has exited
        let input = self
            .host
            .temp_files
            .create_temp_file()
            .map_err(|e| PasteError::io("create a temporary file", e))?;
        self.host
            .temp_files
            .write_all_text(input.path(), &request.json_text)
            .map_err(|e| PasteError::io("write the temporary JSON file", e))?;

        let args = generator_args(&request, input.path())
            .map_err(|e| PasteError::io("pass the temporary JSON file to quicktype", e))?;
        let output = self
            .host
            .generator
            .run(&self.generator_path, &args)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => PasteError::GeneratorNotFound {
                    program: self.generator_path.clone(),
                },
                _ => PasteError::io("run quicktype", e),
            })?;
        debug!(exit_code = ?output.exit_code, "generator exited");

        match GenerationOutcome::from(output) {
            GenerationOutcome::Success(code) => {
                self.host
                    .document
                    .insert_at_selection(&code)
                    .map_err(|e| PasteError::io("insert the generated code", e))?;
                Ok(code)
            }
            GenerationOutcome::Failure(stderr) => Err(PasteError::GeneratorExecution { stderr }),
        }
    }
}
