//! Minimal cake shown when the full build fails.

use crate::attributes::Flavor;
use crate::builder::{replace_cake, CAKE_ROOT};
use crate::color::{CANDLE_RED, PURE_WHITE};
use crate::error::Result;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef, NodeId, Transform};

/// Build and attach a one-tier vanilla cake with a single red candle.
///
/// Any cake already attached to `scene` is disposed first.
///
/// # Panics
///
/// Only if the backend rejects constant, known-valid geometry, which is a
/// bug in the backend.
pub fn build_fallback<B: SceneBackend + ?Sized>(scene: &mut B) -> NodeId {
    try_build(scene).expect("fallback cake geometry is constant and valid")
}

fn try_build<B: SceneBackend + ?Sized>(scene: &mut B) -> Result<NodeId> {
    let root = scene.create_group(CAKE_ROOT);
    let parts = [
        (
            "tier-0-body",
            Geometry::cylinder(1.5, 0.5, 32),
            MaterialDef::plain(Flavor::Vanilla.cake_color()),
            0.25,
        ),
        (
            "tier-0-top-frosting",
            Geometry::cylinder(1.55, 0.1, 32),
            MaterialDef::plain(PURE_WHITE),
            0.5,
        ),
        (
            "candle-0",
            Geometry::cylinder(0.05, 0.3, 16),
            MaterialDef::plain(CANDLE_RED),
            0.7,
        ),
    ];
    for (name, geometry, material, y) in parts {
        let id = scene.create_mesh(name, geometry, material)?;
        scene.set_transform(id, Transform::at(0.0, y, 0.0))?;
        scene.add_child(root, id)?;
    }
    replace_cake(scene, root)?;
    log::info!("built fallback cake as node {root}");
    Ok(root)
}
