#![forbid(unsafe_code)]

//! Core data model for the line-art rewriter: the ragged [`Grid`], the
//! [`Directions`] flag set, and configuration.

mod config;
mod direction;
mod grid;

pub use config::{DEFAULT_FENCE_TAGS, FenceConfig, LineDrawConfig};
pub use direction::{Direction, Directions};
pub use grid::Grid;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("fence tag list must not be empty")]
    EmptyTags,
    #[error("invalid fence tag {tag:?}: tags must be non-empty and contain no whitespace")]
    InvalidTag { tag: String },
}
