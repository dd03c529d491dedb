//! Flavor-specific ornaments on the top tier. At most one family per cake.

use crate::attributes::Flavor;
use crate::builder::{polar, ring_angle, Assembly};
use crate::color::{BERRY_RED, BLUEBERRY, DARK_CHOCOLATE, LEAF_GREEN, LEMON_YELLOW};
use crate::error::Result;
use crate::random::RandomSource;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef, Transform};
use std::f64::consts::{FRAC_PI_2, PI};

/// Ornaments matching the cake's flavor; vanilla and red velvet get none.
pub(crate) fn add<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    match a.attrs.flavor {
        Flavor::Chocolate => {
            add_curls(a)?;
            add_drips(a)
        }
        Flavor::Strawberry => add_strawberries(a),
        Flavor::Blueberry => add_blueberries(a),
        Flavor::Lemon => add_lemon_slices(a),
        Flavor::Vanilla | Flavor::RedVelvet => Ok(()),
    }
}

fn add_curls<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let spread = a.layout.top_radius() * 0.7;
    let y = a.layout.top_y() + 0.05;
    let material = MaterialDef::new(Flavor::Chocolate.cake_color(), 60.0);

    for _ in 0..a.config.decorations.chocolate_curls {
        let angle = a.rng.angle();
        let radius = a.rng.next_f64() * spread;
        let tilt = FRAC_PI_2 + (a.rng.next_f64() - 0.5) * 0.5;
        let spin = a.rng.angle();
        a.mesh(
            a.root,
            "chocolate-curl",
            Geometry::Torus {
                radius: 0.1,
                tube: 0.02,
                radial_segments: 8,
                tubular_segments: 20,
                arc: 1.5 * PI,
            },
            material.clone(),
            polar(angle, radius, y).rotated(tilt, spin, 0.0),
        )?;
    }
    Ok(())
}

/// Tapered drips hanging straight down over the top rim.
fn add_drips<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let top = a.layout.top();
    let radius = a.frosted_radius(&top);
    let lip = a.layout.top_y() + 0.05;
    let count = a.config.decorations.chocolate_drips;

    for i in 0..count {
        let length = a.rng.range(0.2, 0.4);
        a.mesh(
            a.root,
            "chocolate-drip",
            Geometry::Cylinder {
                radius_top: 0.03,
                radius_bottom: 0.01,
                height: length,
                radial_segments: 8,
                open_ended: false,
            },
            MaterialDef::new(DARK_CHOCOLATE, 60.0),
            polar(ring_angle(i, count), radius, lip - length / 2.0),
        )?;
    }
    Ok(())
}

fn add_strawberries<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let radius = a.layout.top_radius() * 0.6;
    let y = a.layout.top_y() + 0.1;
    let count = a.config.decorations.strawberries;
    let root = a.root;

    for i in 0..count {
        let berry = a.group(root, "strawberry", polar(ring_angle(i, count), radius, y))?;
        // Point down.
        a.mesh(
            berry,
            "strawberry-body",
            Geometry::Cone {
                radius: 0.1,
                height: 0.2,
                radial_segments: 16,
            },
            MaterialDef::new(BERRY_RED, 70.0),
            Transform::IDENTITY.rotated(PI, 0.0, 0.0),
        )?;
        a.mesh(
            berry,
            "strawberry-cap",
            Geometry::cylinder(0.08, 0.05, 16),
            MaterialDef::new(LEAF_GREEN, 60.0),
            Transform::at(0.0, 0.1, 0.0),
        )?;
    }
    Ok(())
}

fn add_blueberries<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let spread = a.layout.top_radius() * 0.7;
    let y = a.layout.top_y() + 0.07;

    for _ in 0..a.config.decorations.blueberries {
        let angle = a.rng.angle();
        let radius = a.rng.next_f64() * spread;
        a.mesh(
            a.root,
            "blueberry",
            Geometry::sphere(0.07, 12),
            MaterialDef::new(BLUEBERRY, 80.0),
            polar(angle, radius, y),
        )?;
    }
    Ok(())
}

/// Flat discs on the top face.
fn add_lemon_slices<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let radius = a.layout.top_radius() * 0.6;
    let y = a.layout.top_y() + 0.03;
    let count = a.config.decorations.lemon_slices;

    for i in 0..count {
        a.mesh(
            a.root,
            "lemon-slice",
            Geometry::cylinder(0.15, 0.03, 16),
            MaterialDef::new(LEMON_YELLOW, 60.0),
            polar(ring_angle(i, count), radius, y),
        )?;
    }
    Ok(())
}
