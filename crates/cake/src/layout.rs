//! Tier stacking: the one place tier radii and heights are computed.
//!
//! Decorations that sit on the top tier or hug a tier's side ask the
//! layout instead of recomputing the stack, so they stay coincident with
//! the actual geometry whatever the configuration.

use crate::config::GeometryConfig;

/// Dimensions of one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Zero-based index from the bottom.
    pub index: u32,
    /// Sponge radius.
    pub radius: f64,
    /// Tier height.
    pub height: f64,
    /// Y of the tier's center.
    pub center_y: f64,
}

impl Tier {
    /// Y of the tier's top face.
    pub fn top_y(&self) -> f64 {
        self.center_y + self.height / 2.0
    }

    /// Y of the tier's bottom face.
    pub fn bottom_y(&self) -> f64 {
        self.center_y - self.height / 2.0
    }
}

/// Stack of tiers for one cake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierLayout {
    base_radius: f64,
    step: f64,
    layer_height: f64,
    layer_count: u32,
}

impl TierLayout {
    /// Layout for `layer_count` tiers; wedding cakes shrink faster per tier.
    pub fn new(geometry: &GeometryConfig, layer_count: u32, is_wedding: bool) -> Self {
        Self {
            base_radius: geometry.base_radius,
            step: if is_wedding {
                geometry.wedding_tier_step
            } else {
                geometry.tier_step
            },
            layer_height: geometry.layer_height,
            layer_count,
        }
    }

    /// Number of tiers.
    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    /// Tier `index`, counted from the bottom.
    pub fn tier(&self, index: u32) -> Tier {
        let i = f64::from(index);
        Tier {
            index,
            radius: self.base_radius - i * self.step,
            height: self.layer_height,
            center_y: i * self.layer_height + self.layer_height / 2.0,
        }
    }

    /// All tiers, bottom to top.
    pub fn tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        (0..self.layer_count).map(|i| self.tier(i))
    }

    /// The topmost tier.
    pub fn top(&self) -> Tier {
        self.tier(self.layer_count.saturating_sub(1))
    }

    /// Y of the top face of the stack.
    pub fn top_y(&self) -> f64 {
        f64::from(self.layer_count) * self.layer_height
    }

    /// Radius of the topmost tier.
    pub fn top_radius(&self) -> f64 {
        self.top().radius
    }

    /// Tier whose vertical span contains `y`, clamped to the stack.
    ///
    /// A height exactly on a boundary belongs to the tier above, except at
    /// the very top, which belongs to the top tier.
    pub fn tier_at_height(&self, y: f64) -> Tier {
        let last = self.layer_count.saturating_sub(1);
        let index = if y <= 0.0 {
            0
        } else {
            ((y / self.layer_height).floor() as u32).min(last)
        };
        self.tier(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn layout(layers: u32, wedding: bool) -> TierLayout {
        TierLayout::new(&GeometryConfig::default(), layers, wedding)
    }

    #[test]
    fn regular_cake_steps_by_point_three() {
        let l = layout(2, false);
        assert_abs_diff_eq!(l.tier(0).radius, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(l.tier(1).radius, 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(l.top_radius(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(l.top_y(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn wedding_cake_steps_by_point_four() {
        let l = layout(3, true);
        assert_abs_diff_eq!(l.tier(2).radius, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(l.top_y(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn tiers_stack_without_gaps() {
        let l = layout(3, true);
        let tiers: Vec<Tier> = l.tiers().collect();
        assert_eq!(tiers.len(), 3);
        assert_abs_diff_eq!(tiers[0].bottom_y(), 0.0, epsilon = 1e-12);
        for pair in tiers.windows(2) {
            assert_abs_diff_eq!(pair[0].top_y(), pair[1].bottom_y(), epsilon = 1e-12);
        }
        assert_abs_diff_eq!(tiers[2].top_y(), l.top_y(), epsilon = 1e-12);
    }

    #[test]
    fn tier_at_height_clamps() {
        let l = layout(3, true);
        assert_eq!(l.tier_at_height(-1.0).index, 0);
        assert_eq!(l.tier_at_height(0.25).index, 0);
        assert_eq!(l.tier_at_height(0.5).index, 1);
        assert_eq!(l.tier_at_height(1.2).index, 2);
        assert_eq!(l.tier_at_height(1.5).index, 2);
        assert_eq!(l.tier_at_height(9.0).index, 2);
    }
}
