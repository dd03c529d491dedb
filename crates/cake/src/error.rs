//! Error types for scene construction and configuration.

use cake_ir::{GeometryError, NodeId};
use thiserror::Error;

/// Errors that can occur while building a cake scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A primitive received parameters that cannot produce a mesh.
    #[error("invalid {kind} geometry for `{node}`: {source}")]
    InvalidGeometry {
        /// Name of the node being created.
        node: String,
        /// Primitive kind.
        kind: &'static str,
        /// What was wrong with it.
        #[source]
        source: GeometryError,
    },

    /// A node handle does not exist in the scene.
    #[error("unknown scene node {0}")]
    UnknownNode(NodeId),

    /// The attributes ask for an empty stack.
    #[error("layer count must be at least 1, got {0}")]
    InvalidLayerCount(u32),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors loading a [`CakeConfig`](crate::CakeConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
