//! Named colors and the contrasting-color rule.

use cake_ir::Rgb;

/// Light contrast color, used on dark surfaces.
pub const LIGHT: Rgb = Rgb::hex(0xffffff);
/// Dark contrast color, used on light surfaces.
pub const DARK: Rgb = Rgb::hex(0x333333);

/// Luminance below which a color counts as dark (0–255 scale).
pub const LUMINANCE_THRESHOLD: f64 = 128.0;

pub const WHITE_FROSTING: Rgb = Rgb::hex(0xf8f8f0);
pub const CHOCOLATE_FROSTING: Rgb = Rgb::hex(0x4a2c0f);
pub const DARK_CHOCOLATE: Rgb = Rgb::hex(0x2c1608);
pub const BERRY_RED: Rgb = Rgb::hex(0xff3366);
pub const BLUEBERRY: Rgb = Rgb::hex(0x4169e1);
pub const LEAF_GREEN: Rgb = Rgb::hex(0x00cc44);
pub const LEMON_YELLOW: Rgb = Rgb::hex(0xffff00);
pub const GOLD: Rgb = Rgb::hex(0xffcc00);
pub const FLAME_GLOW: Rgb = Rgb::hex(0xff6600);
pub const SKIN: Rgb = Rgb::hex(0xffdbac);
pub const PURE_WHITE: Rgb = Rgb::hex(0xffffff);
pub const CANDLE_RED: Rgb = Rgb::hex(0xff0000);

/// Candle colors, cycled by candle index.
pub const CANDLE_PALETTE: [Rgb; 5] = [
    Rgb::hex(0xff0000),
    Rgb::hex(0x00ff00),
    Rgb::hex(0x0000ff),
    Rgb::hex(0xffff00),
    Rgb::hex(0xff00ff),
];

/// Sprinkle colors, picked at random.
pub const SPRINKLE_PALETTE: [Rgb; 6] = [
    Rgb::hex(0xff0000),
    Rgb::hex(0x00ff00),
    Rgb::hex(0x0000ff),
    Rgb::hex(0xffff00),
    Rgb::hex(0xff00ff),
    Rgb::hex(0x00ffff),
];

/// Perceptual luminance on a 0–255 scale.
pub fn luminance(color: Rgb) -> f64 {
    0.299 * f64::from(color.r()) + 0.587 * f64::from(color.g()) + 0.114 * f64::from(color.b())
}

/// [`LIGHT`] for dark colors, [`DARK`] for light ones.
pub fn contrast(color: Rgb) -> Rgb {
    if luminance(color) < LUMINANCE_THRESHOLD {
        LIGHT
    } else {
        DARK
    }
}
