//! Configuration types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Info-string tags that mark a fenced code block as line art.
pub const DEFAULT_FENCE_TAGS: &[&str] = &["ascii-art", "asciiart", "ascii"];

/// Settings for the fenced code block pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FenceConfig {
    /// First word of the info string, compared ASCII case-insensitively.
    pub tags: Vec<String>,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self {
            tags: DEFAULT_FENCE_TAGS.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }
}

impl FenceConfig {
    /// Configuration matching exactly the given tags.
    #[must_use]
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `info` (the text after the opening fence) selects this block.
    #[must_use]
    pub fn matches(&self, info: &str) -> Option<&str> {
        let word = info.split_whitespace().next()?;
        self.tags
            .iter()
            .find(|tag| tag.eq_ignore_ascii_case(word))
            .map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tags.is_empty() {
            return Err(ConfigError::EmptyTags);
        }
        for tag in &self.tags {
            if tag.is_empty() || tag.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidTag { tag: tag.clone() });
            }
        }
        Ok(())
    }
}

/// Top-level `linedraw.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineDrawConfig {
    pub fence: FenceConfig,
}

impl LineDrawConfig {
    /// File name looked up in the working directory when no path is given.
    pub const FILE_NAME: &'static str = "linedraw.toml";

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fence.validate()
    }
}
