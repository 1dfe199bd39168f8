use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use super::{ActiveDocumentProvider, DocumentInfo};

/// Language reported for files without an extension
pub const DEFAULT_LANGUAGE: &str = "Plain Text";

/// Extension to declared-language table, using the names editors display
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("c", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("cxx", "C++"),
    ("h", "C++"),
    ("hh", "C++"),
    ("hpp", "C++"),
    ("hxx", "C++"),
    ("cs", "CSharp"),
    ("elm", "Elm"),
    ("go", "Go"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("m", "Objective-C"),
    ("mm", "Objective-C"),
    ("py", "Python"),
    ("rs", "Rust"),
    ("swift", "Swift"),
    ("ts", "TypeScript"),
    ("tsx", "tsx"),
];

/// Work out the declared language of a file from its extension.
///
/// `overrides` (keyed by lower-case extension) wins over the built-in table.
/// Unknown extensions are reported as-is; no extension means [`DEFAULT_LANGUAGE`].
pub fn declared_language(path: &Path, overrides: &BTreeMap<String, String>) -> String {
    let Some(extension) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return DEFAULT_LANGUAGE.to_string();
    };

    if let Some(language) = overrides.get(&extension) {
        return language.clone();
    }

    EXTENSION_LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| language.to_string())
        .unwrap_or(extension)
}

/// Where inserted text goes, as byte offsets into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Caret after the last byte
    #[default]
    End,
    Caret(usize),
    /// Half-open byte range `start..end`, replaced by the inserted text
    Range(usize, usize),
}

impl Selection {
    /// Splice `text` into `content` over this selection.
    pub fn apply(&self, content: &mut String, text: &str) -> io::Result<()> {
        let (start, end) = match *self {
            Selection::End => (content.len(), content.len()),
            Selection::Caret(at) => (at, at),
            Selection::Range(start, end) => (start, end),
        };

        if start > end || end > content.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "selection {}..{} is outside the document ({} bytes)",
                    start,
                    end,
                    content.len()
                ),
            ));
        }
        if !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("selection {}..{} splits a character", start, end),
            ));
        }

        content.replace_range(start..end, text);
        Ok(())
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("end") {
            return Ok(Selection::End);
        }

        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid byte offset: {:?}", v))
        };

        match s.split_once("..") {
            Some((start, end)) => {
                let (start, end) = (parse(start)?, parse(end)?);
                if start > end {
                    return Err(format!("selection start {} is after end {}", start, end));
                }
                Ok(Selection::Range(start, end))
            }
            None => Ok(Selection::Caret(parse(s)?)),
        }
    }
}

/// A file on disk acting as the active document
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    language: String,
    selection: Selection,
}

impl FileDocument {
    pub fn new(path: PathBuf, language: String, selection: Selection) -> Self {
        Self {
            path,
            language,
            selection,
        }
    }
}

impl ActiveDocumentProvider for FileDocument {
    fn active_document(&self) -> Option<DocumentInfo> {
        self.path.is_file().then(|| DocumentInfo {
            language: self.language.clone(),
            file_path: self.path.clone(),
        })
    }

    fn insert_at_selection(&self, text: &str) -> io::Result<()> {
        let mut content = fs::read_to_string(&self.path)?;
        self.selection.apply(&mut content, text)?;
        fs::write(&self.path, content)
    }
}

/// A document that only lends its name and language; inserted text goes to a writer.
pub struct PrintDocument<W> {
    path: PathBuf,
    language: String,
    writer: Mutex<W>,
}

impl<W: Write> PrintDocument<W> {
    pub fn new(path: PathBuf, language: String, writer: W) -> Self {
        Self {
            path,
            language,
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PrintDocument<io::Stdout> {
    pub fn stdout(path: PathBuf, language: String) -> Self {
        Self::new(path, language, io::stdout())
    }
}

impl<W: Write> ActiveDocumentProvider for PrintDocument<W> {
    fn active_document(&self) -> Option<DocumentInfo> {
        Some(DocumentInfo {
            language: self.language.clone(),
            file_path: self.path.clone(),
        })
    }

    fn insert_at_selection(&self, text: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output writer poisoned"))?;
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}
