//! # paste-json-as-code
//!
//! Turns JSON on the clipboard into typed source code and inserts it into the
//! document being edited. The code itself comes from
//! [quicktype](https://quicktype.io), run as an external process.
//!
//! One invocation:
//! - reads and trims the clipboard text, refusing to continue if it is empty;
//! - checks the active document's language against the languages quicktype supports;
//! - names the root type after the document's file name (`Person.cs` gives `Person`);
//! - writes the JSON to a temporary file and runs quicktype on it;
//! - inserts quicktype's output at the selection, or shows its error output.
//!
//! ## Usage
//!
//! Editor integrations implement the traits in [`host`] and drive the workflow:
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//! use paste_json_as_code::generator::{locate_generator, QuicktypeProcess};
//! use paste_json_as_code::host::{
//!     ConsoleNotifier, FileDocument, Selection, SystemClipboard, SystemTempStore,
//! };
//! use paste_json_as_code::workflow::{Collaborators, InvocationWorkflow};
//!
//! let document = FileDocument::new(
//!     PathBuf::from("src/Person.cs"),
//!     "CSharp".to_string(),
//!     Selection::End,
//! );
//! let host = Collaborators {
//!     clipboard: &SystemClipboard::new(),
//!     document: &document,
//!     temp_files: &SystemTempStore::default(),
//!     generator: &QuicktypeProcess,
//!     notifier: &ConsoleNotifier,
//! };
//! let workflow = InvocationWorkflow::new(host, locate_generator(Path::new("quicktype")));
//! let _ = workflow.execute();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod host;
pub mod logging;
pub mod models;
pub mod utils;
pub mod workflow;
