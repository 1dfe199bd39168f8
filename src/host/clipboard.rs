use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use tracing::debug;

use super::ClipboardSource;

/// Clipboard utilities tried in order, as program name and arguments.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbpaste", &[]),
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
    ("powershell", &["-NoProfile", "-Command", "Get-Clipboard -Raw"]),
];

/// Stderr fragments meaning the utility ran but the clipboard holds no text
const NO_TEXT_MARKERS: &[&str] = &[
    "No selection",
    "Nothing is copied",
    "target STRING not available",
    "target UTF8_STRING not available",
];

/// Reads the system clipboard through the platform utilities found on `PATH`.
///
/// Utilities are tried in order. One that fails (say `wl-paste` on an X11
/// session) hands over to the next; an empty clipboard is reported as empty
/// text, and if every utility fails the last failure is returned.
#[derive(Debug, Default, Clone)]
pub struct SystemClipboard {
    search_path: Option<OsString>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for clipboard utilities in `search_path` instead of `PATH`
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn find(&self, program: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = env::current_dir().ok()?;
                which::which_in(program, Some(paths), cwd).ok()
            }
            None => which::which(program).ok(),
        }
    }
}

impl ClipboardSource for SystemClipboard {
    fn get_text(&self) -> io::Result<String> {
        let mut last_error = None;

        for (program, args) in CLIPBOARD_COMMANDS {
            let Some(path) = self.find(program) else {
                continue;
            };
            debug!(program = %path.display(), "reading clipboard");

            let output = match Command::new(&path)
                .args(*args)
                .stdin(Stdio::null())
                .output()
            {
                Ok(output) => output,
                Err(err) => {
                    debug!(program, error = %err, "clipboard utility failed to start");
                    last_error = Some(err);
                    continue;
                }
            };

            if output.status.success() {
                return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
            }

            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if NO_TEXT_MARKERS.iter().any(|marker| stderr.contains(marker)) {
                return Ok(String::new());
            }

            debug!(program, %stderr, "clipboard utility failed");
            last_error = Some(io::Error::new(
                io::ErrorKind::Other,
                format!("{} failed: {}", program, stderr),
            ));
        }

        Err(last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "no clipboard utility found (tried pbpaste, wl-paste, xclip, xsel, powershell)",
            )
        }))
    }
}

/// Treats everything readable from a stream as the clipboard (e.g. stdin).
///
/// The stream is consumed on the first read.
pub struct ReaderClipboard<R> {
    reader: Mutex<R>,
}

impl<R: Read> ReaderClipboard<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

impl ReaderClipboard<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> ClipboardSource for ReaderClipboard<R> {
    fn get_text(&self) -> io::Result<String> {
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "clipboard reader poisoned"))?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Uses the contents of a file as the clipboard
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ClipboardSource for FileClipboard {
    fn get_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Fixed clipboard text
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard {
    text: String,
}

impl StaticClipboard {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ClipboardSource for StaticClipboard {
    fn get_text(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}
