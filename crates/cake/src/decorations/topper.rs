use crate::builder::Assembly;
use crate::color::{DARK, LIGHT, PURE_WHITE, SKIN};
use crate::error::Result;
use crate::random::RandomSource;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef, NodeId, Rgb, Transform};

const FIGURE_Y: f64 = 0.15;

/// Couple figurine on a small base, centered on the top tier.
pub(crate) fn add<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let topper = a.group(a.root, "topper", Transform::at(0.0, a.layout.top_y() + 0.1, 0.0))?;
    a.mesh(
        topper,
        "topper-base",
        Geometry::cylinder(0.1, 0.05, 16),
        MaterialDef::new(PURE_WHITE, 70.0),
        Transform::IDENTITY,
    )?;
    add_figure(a, topper, -0.05, DARK)?;
    add_figure(a, topper, 0.05, LIGHT)?;
    Ok(())
}

fn add_figure<B, R>(a: &mut Assembly<'_, B, R>, topper: NodeId, x: f64, color: Rgb) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let figure = a.group(topper, "figure", Transform::at(x, FIGURE_Y, 0.0))?;
    a.mesh(
        figure,
        "figure-body",
        Geometry::Cylinder {
            radius_top: 0.03,
            radius_bottom: 0.05,
            height: 0.1,
            radial_segments: 8,
            open_ended: false,
        },
        MaterialDef::new(color, 70.0),
        Transform::IDENTITY,
    )?;
    a.mesh(
        figure,
        "figure-head",
        Geometry::sphere(0.03, 8),
        MaterialDef::new(SKIN, 70.0),
        Transform::at(0.0, 0.08, 0.0),
    )?;
    Ok(())
}
