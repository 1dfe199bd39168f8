/// Everything the generator needs for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Trimmed clipboard text, never empty
    pub json_text: String,
    /// Lower-cased member of the supported language set
    pub target_language: String,
    /// Naming hint for the root generated type
    pub top_level_name: String,
}
