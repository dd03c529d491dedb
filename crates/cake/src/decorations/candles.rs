use crate::builder::{polar, ring_angle, Assembly};
use crate::color::{CANDLE_PALETTE, FLAME_GLOW, GOLD};
use crate::error::Result;
use crate::random::RandomSource;
use crate::scene::SceneBackend;
use cake_ir::{Geometry, MaterialDef, Transform};

pub(crate) const CANDLE_RADIUS: f64 = 0.05;
pub(crate) const CANDLE_HEIGHT: f64 = 0.4;
const FLAME_RADIUS: f64 = 0.07;

/// Ring of colored candles standing on the top tier, each with a glowing flame.
pub(crate) fn add<B, R>(a: &mut Assembly<'_, B, R>) -> Result<()>
where
    B: SceneBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let count = a.config.decorations.candles;
    let ring = a
        .config
        .decorations
        .candle_ring_radius
        .min(a.layout.top_radius() * 0.8);
    let base_y = a.layout.top_y() + CANDLE_HEIGHT / 2.0;

    for i in 0..count {
        let color = CANDLE_PALETTE[i as usize % CANDLE_PALETTE.len()];
        let candle = a.mesh(
            a.root,
            &format!("candle-{i}"),
            Geometry::cylinder(CANDLE_RADIUS, CANDLE_HEIGHT, 16),
            MaterialDef::plain(color),
            polar(ring_angle(i, count), ring, base_y),
        )?;
        a.mesh(
            candle,
            "flame",
            Geometry::sphere(FLAME_RADIUS, 8),
            MaterialDef::new(GOLD, 100.0).with_emissive(FLAME_GLOW),
            Transform::at(0.0, 0.25, 0.0).scaled(1.0, 1.5, 1.0),
        )?;
    }
    Ok(())
}
