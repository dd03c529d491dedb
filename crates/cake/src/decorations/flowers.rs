//! Five-petal flowers: a ring on the top tier, and for wedding cakes a
//! center cluster plus a cascade spilling down the side.

use crate::attributes::Flavor;
use crate::builder::{polar, ring_angle, Assembly};
use crate::color::{GOLD, PURE_WHITE};
use crate::error::Result;
use crate::random::RandomSource;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef, NodeId, Rgb, Transform};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const PETALS: u32 = 5;
const PETAL_RADIUS: f64 = 0.08;
const PETAL_RING: f64 = 0.08;
const CENTER_RADIUS: f64 = 0.06;
const CLUSTER_RING: f64 = 0.15;
const LIFT: f64 = 0.05;

fn petal_color(flavor: Flavor) -> Rgb {
    match flavor {
        Flavor::Strawberry => Rgb::hex(0xff8fa3),
        Flavor::Blueberry => Rgb::hex(0xadd8e6),
        _ => PURE_WHITE,
    }
}

/// One flower group named `name`, hung under `parent` at `transform`.
fn add_flower<B, R>(
    a: &mut Assembly<'_, B, R>,
    parent: NodeId,
    name: &str,
    transform: Transform,
) -> Result<NodeId>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let flower = a.group(parent, name, transform)?;
    let petal = MaterialDef::new(petal_color(a.attrs.flavor), 70.0);
    for i in 0..PETALS {
        a.mesh(
            flower,
            "petal",
            Geometry::sphere(PETAL_RADIUS, 8),
            petal.clone(),
            polar(ring_angle(i, PETALS), PETAL_RING, 0.0).scaled(1.0, 0.5, 1.0),
        )?;
    }
    a.mesh(
        flower,
        "flower-center",
        Geometry::sphere(CENTER_RADIUS, 8),
        MaterialDef::new(GOLD, 80.0),
        Transform::at(0.0, 0.02, 0.0),
    )?;
    Ok(flower)
}

/// Evenly spaced ring on the top tier.
pub(crate) fn add_top_ring<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let decorations = &a.config.decorations;
    let count = if a.attrs.is_wedding {
        decorations.wedding_top_flowers
    } else {
        decorations.top_flowers
    };
    let radius = a.layout.top_radius() * 0.7;
    let y = a.layout.top_y() + LIFT;
    let root = a.root;

    for i in 0..count {
        let spin = a.rng.angle();
        let transform = polar(ring_angle(i, count), radius, y).rotated(0.0, spin, 0.0);
        add_flower(a, root, "flower", transform)?;
    }
    Ok(())
}

/// Tight bunch in the middle of the top tier.
pub(crate) fn add_center_cluster<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let y = a.layout.top_y() + LIFT;
    let cluster = a.group(a.root, "flower-cluster", Transform::at(0.0, y, 0.0))?;
    let count = a.config.decorations.cluster_flowers;
    for i in 0..count {
        let lift = a.rng.next_f64() * 0.1;
        let spin = a.rng.angle();
        let transform =
            polar(ring_angle(i, count), CLUSTER_RING, lift).rotated(0.0, spin, 0.0);
        add_flower(a, cluster, "flower", transform)?;
    }
    Ok(())
}

/// Diagonal stream of flowers from the top rim down the front-right side.
///
/// Each flower hugs the frosting of whichever tier spans its height.
pub(crate) fn add_cascade<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let count = a.config.decorations.cascade_flowers;
    let top_y = a.layout.top_y();
    let drop = f64::from(a.layout.layer_count()) * a.config.geometry.layer_height;
    let root = a.root;

    for i in 0..count {
        let y = top_y - f64::from(i) / f64::from(count) * drop;
        let angle = FRAC_PI_4 + (a.rng.next_f64() - 0.5) * 0.5;
        let tier = a.layout.tier_at_height(y);
        let radius = a.frosted_radius(&tier);
        let scale = a.rng.range(0.7, 1.3);
        let transform = polar(angle, radius, y)
            .rotated(FRAC_PI_2, angle + PI, 0.0)
            .scaled(scale, scale, scale);
        add_flower(a, root, "cascade-flower", transform)?;
    }
    Ok(())
}
