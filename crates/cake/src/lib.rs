//! cake: rule-based text-to-3D cake scenes
//!
//! Turns a free-form description ("chocolate wedding cake with roses") into
//! a scene graph of simple primitives: stacked tiers, frosting, piping and
//! decorations. The scene is a [`cake_ir::Document`] that a renderer can
//! consume directly or that can be serialized to JSON.
//!
//! # Example
//!
//! ```rust
//! use cake::{CakeConfig, Session};
//!
//! let mut session = Session::with_seed(CakeConfig::default(), 7);
//! let outcome = session.visualize("strawberry birthday cake");
//! assert!(!outcome.is_fallback());
//!
//! let doc = session.scene().to_document();
//! assert_eq!(doc.roots, vec![outcome.root()]);
//! ```

pub mod attributes;
pub mod builder;
pub mod color;
pub mod config;
mod decorations;
pub mod error;
pub mod fallback;
pub mod layout;
pub mod presets;
pub mod random;
pub mod scene;
pub mod session;

pub use attributes::{extract, DesignAttributes, Flavor};
pub use builder::build;
pub use color::contrast;
pub use config::CakeConfig;
pub use error::{BuildError, ConfigError, Result};
pub use fallback::build_fallback;
pub use layout::{Tier, TierLayout};
pub use presets::apply_chip;
pub use random::RandomSource;
pub use scene::{SceneBackend, SceneGraph};
pub use session::{BuildOutcome, Session};
