use std::collections::BTreeSet;

/// Language identifiers accepted by quicktype's `--lang` option, synonyms included.
pub const QUICKTYPE_LANGUAGES: &[&str] = &[
    "c++",
    "cpp",
    "cplusplus",
    "cs",
    "csharp",
    "elm",
    "go",
    "golang",
    "java",
    "objc",
    "objective-c",
    "objectivec",
    "swift",
    "typescript",
    "ts",
    "tsx",
];

/// Fixed set of lower-case language identifiers the generator accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguageSet {
    names: BTreeSet<&'static str>,
}

impl SupportedLanguageSet {
    /// The languages understood by quicktype
    pub fn quicktype() -> Self {
        Self {
            names: QUICKTYPE_LANGUAGES.iter().copied().collect(),
        }
    }

    /// Lower-case `language` and return it if it is supported; the match is case-insensitive.
    pub fn resolve(&self, language: &str) -> Option<String> {
        let lowered = language.to_lowercase();
        self.names.contains(lowered.as_str()).then_some(lowered)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }
}

impl Default for SupportedLanguageSet {
    fn default() -> Self {
        Self::quicktype()
    }
}
