use crate::builder::{polar, Assembly};
use crate::color::SPRINKLE_PALETTE;
use crate::error::Result;
use crate::random::RandomSource;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef};
use std::f64::consts::PI;

/// Lift above the top face so sprinkles sit on the frosting disc.
const LIFT: f64 = 0.06;

/// Scatter small colored boxes over the top tier.
pub(crate) fn add<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let spread = a.layout.top_radius() * 0.8;
    let y = a.layout.top_y() + LIFT;

    for _ in 0..a.config.decorations.sprinkles {
        let angle = a.rng.angle();
        let radius = a.rng.next_f64() * spread;
        let color = SPRINKLE_PALETTE[a.rng.index(SPRINKLE_PALETTE.len())];
        let transform = polar(angle, radius, y).rotated(
            a.rng.next_f64() * PI,
            a.rng.next_f64() * PI,
            a.rng.next_f64() * PI,
        );
        a.mesh(
            a.root,
            "sprinkle",
            Geometry::Box {
                width: 0.05,
                height: 0.02,
                depth: 0.02,
            },
            MaterialDef::new(color, 80.0),
            transform,
        )?;
    }
    Ok(())
}
