//! Builder and session configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock cake. Partial files override only what they name:
//!
//! ```toml
//! [geometry]
//! base_radius = 2.0
//!
//! [decorations]
//! sprinkles = 80
//!
//! [session]
//! seed = 7
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CakeConfig {
    /// Tier dimensions.
    pub geometry: GeometryConfig,
    /// Decoration counts and placement radii.
    pub decorations: DecorationConfig,
    /// Interactive session behavior.
    pub session: SessionConfig,
}

impl CakeConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Tier dimensions (scene units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Radius of the bottom tier.
    pub base_radius: f64,
    /// Height of every tier.
    pub layer_height: f64,
    /// Radius lost per tier on regular cakes.
    pub tier_step: f64,
    /// Radius lost per tier on wedding cakes.
    pub wedding_tier_step: f64,
    /// How far frosting and rim decorations stand off the sponge.
    pub frosting_overhang: f64,
    /// Circumference segments for tier cylinders.
    pub radial_segments: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            base_radius: 1.5,
            layer_height: 0.5,
            tier_step: 0.3,
            wedding_tier_step: 0.4,
            frosting_overhang: 0.05,
            radial_segments: 32,
        }
    }
}

/// Decoration counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    /// Frosting dots around each tier's top rim.
    pub piping_dots: u32,
    /// Motifs around each wedding tier's side.
    pub wedding_motifs: u32,
    /// Candles on the top tier.
    pub candles: u32,
    /// Preferred radius of the candle ring; clamped to the top tier.
    pub candle_ring_radius: f64,
    /// Sprinkles scattered over the top tier.
    pub sprinkles: u32,
    /// Flowers in the top ring of a regular cake.
    pub top_flowers: u32,
    /// Flowers in the top ring of a wedding cake.
    pub wedding_top_flowers: u32,
    /// Flowers in the wedding center cluster.
    pub cluster_flowers: u32,
    /// Flowers cascading down a wedding cake's side.
    pub cascade_flowers: u32,
    /// Curls scattered on a chocolate cake's top.
    pub chocolate_curls: u32,
    /// Drips hanging from the top rim of a chocolate cake.
    pub chocolate_drips: u32,
    /// Strawberries ringing a strawberry cake's top.
    pub strawberries: u32,
    /// Berries scattered on a blueberry cake's top.
    pub blueberries: u32,
    /// Slices around a lemon cake's top.
    pub lemon_slices: u32,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            piping_dots: 16,
            wedding_motifs: 12,
            candles: 5,
            candle_ring_radius: 0.6,
            sprinkles: 50,
            top_flowers: 6,
            wedding_top_flowers: 12,
            cluster_flowers: 5,
            cascade_flowers: 12,
            chocolate_curls: 10,
            chocolate_drips: 8,
            strawberries: 8,
            blueberries: 20,
            lemon_slices: 6,
        }
    }
}

/// Interactive session behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause shown as "designing your cake" before each build.
    pub loading_delay_ms: u64,
    /// Y rotation per frame while rotating, in radians.
    pub rotation_step: f64,
    /// Seed for decoration randomness; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 1000,
            rotation_step: 0.01,
            seed: None,
        }
    }
}
