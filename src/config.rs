use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::DEFAULT_GENERATOR;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "paste-json-as-code.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Generator configuration - which executable to run and what to leave behind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Executable name on PATH, or a path to it
    #[serde(default = "default_executable")]
    pub executable: PathBuf,
    /// Keep the temporary JSON input file after each run
    #[serde(default)]
    pub keep_temp_files: bool,
}

/// Document configuration - how file extensions map to declared languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Extension (without the dot) to language identifier, overriding the built-in table
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

fn default_executable() -> PathBuf {
    PathBuf::from(DEFAULT_GENERATOR)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            keep_temp_files: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        config.normalize();

        Ok(config)
    }

    /// Load `path` if given, otherwise the default file if it exists, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default_config())
                }
            }
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.generator.executable.as_os_str().is_empty() {
            anyhow::bail!("Generator executable must not be empty");
        }

        for (extension, language) in &self.document.languages {
            if extension.trim().trim_start_matches('.').is_empty() {
                anyhow::bail!("Language mapping has an empty extension");
            }
            if language.trim().is_empty() {
                anyhow::bail!("Language for extension \"{}\" must not be empty", extension);
            }
        }

        Ok(())
    }

    /// Lower-case extension keys and drop any leading dot
    fn normalize(&mut self) {
        self.document.languages = std::mem::take(&mut self.document.languages)
            .into_iter()
            .map(|(ext, lang)| (ext.trim().trim_start_matches('.').to_lowercase(), lang))
            .collect();
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config::default()
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
