//! Per-action shaping applied to raw samples before they reach [`ActionState`].
//!
//! [`ActionState`]: crate::ActionState

use glam::Vec2;

/// Largest usable dead zone; keeps the rescale denominator away from zero.
const MAX_DEAD_ZONE: f32 = 0.99;

/// Sample modifiers: radial dead zone, per-axis scale, optional Y inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisModifiers {
    /// Per-axis multiplier.
    pub scale: Vec2,
    /// Negate the Y component after scaling.
    pub invert_y: bool,
    /// Samples shorter than this are dropped; longer ones are rescaled so
    /// the output still spans `0..=1` past the dead zone.
    pub dead_zone: f32,
}

impl Default for AxisModifiers {
    fn default() -> Self {
        Self {
            scale: Vec2::ONE,
            invert_y: false,
            dead_zone: 0.0,
        }
    }
}

impl AxisModifiers {
    /// Uniform scale with the given Y inversion and no dead zone.
    #[must_use]
    pub fn look(sensitivity: f32, invert_y: bool) -> Self {
        Self {
            scale: Vec2::splat(sensitivity),
            invert_y,
            dead_zone: 0.0,
        }
    }

    /// Unit scale with a radial dead zone.
    #[must_use]
    pub fn with_dead_zone(dead_zone: f32) -> Self {
        Self {
            dead_zone,
            ..Self::default()
        }
    }

    /// Shape a raw sample.
    #[must_use]
    pub fn apply(&self, raw: Vec2) -> Vec2 {
        let dz = self.dead_zone.clamp(0.0, MAX_DEAD_ZONE);
        let mut v = raw;
        if dz > 0.0 {
            let len = v.length();
            if len <= dz {
                return Vec2::ZERO;
            }
            v = v / len * ((len - dz) / (1.0 - dz));
        }
        v *= self.scale;
        if self.invert_y {
            v.y = -v.y;
        }
        v
    }
}
