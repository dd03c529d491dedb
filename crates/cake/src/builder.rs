//! Procedural cake assembly: [`DesignAttributes`] → scene subtree.
//!
//! The cake is a single `cake` group whose children are the tiers followed
//! by the decorations, in a fixed order:
//!
//! 1. tiers (sponge, top disc, side wall, piping, wedding motifs)
//! 2. candles
//! 3. sprinkles
//! 4. flowers (top ring; wedding center cluster and cascade)
//! 5. flavor ornaments
//! 6. wedding topper
//!
//! All top-of-stack placement goes through one [`TierLayout`].

use crate::attributes::{DesignAttributes, Flavor};
use crate::color::{contrast, BERRY_RED, BLUEBERRY, DARK_CHOCOLATE};
use crate::config::CakeConfig;
use crate::decorations;
use crate::error::{BuildError, Result};
use crate::layout::{Tier, TierLayout};
use crate::random::RandomSource;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef, NodeId, Transform};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Name of the cake's root group.
pub const CAKE_ROOT: &str = "cake";

const SPONGE_SHININESS: f64 = 30.0;
const FROSTING_SHININESS: f64 = 50.0;
const FROSTING_DISC_HEIGHT: f64 = 0.1;
const PIPING_RADIUS: f64 = 0.08;

/// Build the cake described by `attrs`, attach it to `scene` and return its root.
///
/// A cake already attached to `scene` is disposed once the new one is
/// complete. On failure nothing changes: the partially built subtree is
/// removed and any previous cake stays attached.
pub fn build<B, R>(
    attrs: &DesignAttributes,
    scene: &mut B,
    rng: &mut R,
    config: &CakeConfig,
) -> Result<NodeId>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    if attrs.layer_count == 0 {
        return Err(BuildError::InvalidLayerCount(attrs.layer_count));
    }

    let root = scene.create_group(CAKE_ROOT);
    let mut assembly = Assembly {
        layout: TierLayout::new(&config.geometry, attrs.layer_count, attrs.is_wedding),
        scene,
        rng,
        config,
        attrs,
        root,
    };

    let result = assembly
        .run()
        .and_then(|()| replace_cake(&mut *assembly.scene, root));
    match result {
        Ok(()) => {
            log::info!(
                "built {} cake with {} tiers as node {}",
                attrs.flavor,
                attrs.layer_count,
                root
            );
            Ok(root)
        }
        Err(err) => {
            log::debug!("discarding partial cake {root}: {err}");
            if let Err(cleanup) = assembly.scene.remove_node(root) {
                log::debug!("partial cake {root} already gone: {cleanup}");
            }
            Err(err)
        }
    }
}

/// Dispose every attached cake other than `root`, then attach `root`.
///
/// The scene holds at most one cake at a time.
pub(crate) fn replace_cake<B: SceneBackend + ?Sized>(scene: &mut B, root: NodeId) -> Result<()> {
    for old in scene.roots() {
        if old != root && scene.name(old) == Some(CAKE_ROOT) {
            log::debug!("disposing previous cake {old}");
            scene.remove_node(old)?;
        }
    }
    scene.attach_root(root)
}

/// Working state shared by the tier and decoration builders.
pub(crate) struct Assembly<'a, B: ?Sized, R: ?Sized> {
    pub scene: &'a mut B,
    pub rng: &'a mut R,
    pub config: &'a CakeConfig,
    pub attrs: &'a DesignAttributes,
    pub layout: TierLayout,
    pub root: NodeId,
}

impl<B, R> Assembly<'_, B, R>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    fn run(&mut self) -> Result<()> {
        let layout = self.layout;
        for tier in layout.tiers() {
            self.add_tier(tier)?;
        }
        if self.attrs.has_candles {
            log::debug!("adding candles");
            decorations::candles::add(self)?;
        }
        if self.attrs.has_sprinkles {
            log::debug!("adding sprinkles");
            decorations::sprinkles::add(self)?;
        }
        if self.attrs.has_flowers {
            log::debug!("adding flowers");
            decorations::flowers::add_top_ring(self)?;
            if self.attrs.is_wedding {
                decorations::flowers::add_center_cluster(self)?;
                decorations::flowers::add_cascade(self)?;
            }
        }
        decorations::flavor::add(self)?;
        if self.attrs.is_wedding {
            log::debug!("adding wedding topper");
            decorations::topper::add(self)?;
        }
        Ok(())
    }

    /// Create a mesh, place it and hang it under `parent`.
    pub fn mesh(
        &mut self,
        parent: NodeId,
        name: &str,
        geometry: Geometry,
        material: MaterialDef,
        transform: Transform,
    ) -> Result<NodeId> {
        let id = self.scene.create_mesh(name, geometry, material)?;
        self.scene.set_transform(id, transform)?;
        self.scene.add_child(parent, id)?;
        Ok(id)
    }

    /// Create a group, place it and hang it under `parent`.
    pub fn group(&mut self, parent: NodeId, name: &str, transform: Transform) -> Result<NodeId> {
        let id = self.scene.create_group(name);
        self.scene.set_transform(id, transform)?;
        self.scene.add_child(parent, id)?;
        Ok(id)
    }

    /// Sponge radius plus the frosting stand-off.
    pub fn frosted_radius(&self, tier: &Tier) -> f64 {
        tier.radius + self.config.geometry.frosting_overhang
    }

    fn add_tier(&mut self, tier: Tier) -> Result<()> {
        let attrs = self.attrs;
        let segments = self.config.geometry.radial_segments;
        let frosted = self.frosted_radius(&tier);
        let i = tier.index;
        let root = self.root;

        self.mesh(
            root,
            &format!("tier-{i}-body"),
            Geometry::cylinder(tier.radius, tier.height, segments),
            MaterialDef::new(attrs.cake_color, SPONGE_SHININESS),
            Transform::at(0.0, tier.center_y, 0.0),
        )?;

        let frosting = MaterialDef::new(attrs.frosting_color, FROSTING_SHININESS);
        self.mesh(
            root,
            &format!("tier-{i}-top-frosting"),
            Geometry::cylinder(frosted, FROSTING_DISC_HEIGHT, segments),
            frosting.clone(),
            Transform::at(0.0, tier.top_y(), 0.0),
        )?;
        self.mesh(
            root,
            &format!("tier-{i}-side-frosting"),
            Geometry::Cylinder {
                radius_top: frosted,
                radius_bottom: frosted,
                height: tier.height,
                radial_segments: segments,
                open_ended: true,
            },
            frosting,
            Transform::at(0.0, tier.center_y, 0.0),
        )?;

        let piping = MaterialDef::new(contrast(attrs.frosting_color), 70.0);
        let dots = self.config.decorations.piping_dots;
        for j in 0..dots {
            self.mesh(
                root,
                "piping",
                Geometry::sphere(PIPING_RADIUS, 8),
                piping.clone(),
                polar(ring_angle(j, dots), frosted, tier.top_y()),
            )?;
        }

        if attrs.is_wedding {
            self.add_wedding_motifs(&tier)?;
        }
        Ok(())
    }

    /// Ring of flavor-styled motifs around a tier's side.
    fn add_wedding_motifs(&mut self, tier: &Tier) -> Result<()> {
        let (geometry, material) = match self.attrs.flavor {
            Flavor::Chocolate => (half_torus(0.1), MaterialDef::new(DARK_CHOCOLATE, 60.0)),
            Flavor::Strawberry => (Geometry::sphere(0.08, 8), MaterialDef::new(BERRY_RED, 70.0)),
            Flavor::Blueberry => (Geometry::sphere(0.06, 8), MaterialDef::new(BLUEBERRY, 70.0)),
            _ => (
                half_torus(0.08),
                MaterialDef::new(contrast(self.attrs.frosting_color), 70.0),
            ),
        };
        let radius = self.frosted_radius(tier);
        let count = self.config.decorations.wedding_motifs;
        for j in 0..count {
            let angle = ring_angle(j, count);
            let transform = polar(angle, radius, tier.center_y).rotated(0.0, angle + FRAC_PI_2, 0.0);
            self.mesh(self.root, "wedding-motif", geometry.clone(), material.clone(), transform)?;
        }
        Ok(())
    }
}

fn half_torus(radius: f64) -> Geometry {
    Geometry::Torus {
        radius,
        tube: 0.02,
        radial_segments: 8,
        tubular_segments: 12,
        arc: PI,
    }
}

/// Angle of item `index` of `count` evenly spaced around a circle.
pub(crate) fn ring_angle(index: u32, count: u32) -> f64 {
    f64::from(index) / f64::from(count) * TAU
}

/// Translation to polar `(angle, radius)` in the XZ plane at height `y`.
pub(crate) fn polar(angle: f64, radius: f64, y: f64) -> Transform {
    Transform::at(angle.cos() * radius, y, angle.sin() * radius)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::attributes::extract;
    use crate::scene::SceneGraph;

    /// Build `prompt` into a fresh scene with a fixed seed.
    pub fn build_prompt(prompt: &str) -> (SceneGraph, NodeId, DesignAttributes) {
        build_prompt_with(prompt, &CakeConfig::default(), &mut fastrand::Rng::with_seed(1))
    }

    pub fn build_prompt_with(
        prompt: &str,
        config: &CakeConfig,
        rng: &mut impl RandomSource,
    ) -> (SceneGraph, NodeId, DesignAttributes) {
        let attrs = extract(prompt);
        let mut scene = SceneGraph::new();
        let root = build(&attrs, &mut scene, rng, config).expect("build");
        (scene, root, attrs)
    }

    pub fn count(scene: &SceneGraph, root: NodeId, name: &str) -> usize {
        scene.find_named(root, name).len()
    }
}
