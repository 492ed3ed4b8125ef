//! Dock orientation axes and the weighted blend primitive.
//!
//! Icons are laid out along the dock's *primary* axis and lifted toward the
//! screen interior along the *secondary* axis. All distance math is plain
//! [`glam::Vec2`]; this module only owns what glam does not: which axis is
//! which, which way "up" points for each dock edge, and the damped blend
//! used by both the neighbor pull and the frame integrator.

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which screen edge the dock is attached to.
///
/// Determines the layout axis, the lift direction, and the scale pivot.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Dock along the top edge; icons run horizontally, lift points down.
    Top,
    /// Dock along the bottom edge; icons run horizontally, lift points up.
    #[default]
    Bottom,
    /// Dock along the left edge; icons run vertically, lift points right.
    Left,
    /// Dock along the right edge; icons run vertically, lift points left.
    Right,
}

impl Orientation {
    /// Whether icons are laid out along the horizontal axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The component of `v` along the layout axis.
    #[inline]
    #[must_use]
    pub const fn primary(self, v: Vec2) -> f32 {
        if self.is_horizontal() {
            v.x
        } else {
            v.y
        }
    }

    /// The component of `v` along the lift axis.
    #[inline]
    #[must_use]
    pub const fn secondary(self, v: Vec2) -> f32 {
        if self.is_horizontal() {
            v.y
        } else {
            v.x
        }
    }

    /// Compose a vector from primary/secondary components.
    #[inline]
    #[must_use]
    pub const fn vec(self, primary: f32, secondary: f32) -> Vec2 {
        if self.is_horizontal() {
            Vec2::new(primary, secondary)
        } else {
            Vec2::new(secondary, primary)
        }
    }

    /// Replace the primary-axis component of `v`.
    #[inline]
    #[must_use]
    pub const fn with_primary(self, v: Vec2, primary: f32) -> Vec2 {
        self.vec(primary, self.secondary(v))
    }

    /// Sign of the secondary-axis direction that moves an icon away from
    /// the dock edge, toward the screen interior. Screen coordinates grow
    /// right and down, so a bottom dock lifts in `-y`.
    #[inline]
    #[must_use]
    pub const fn lift_sign(self) -> f32 {
        match self {
            Self::Top | Self::Left => 1.0,
            Self::Bottom | Self::Right => -1.0,
        }
    }

    /// Normalized anchor point for scale-about-point semantics, so a
    /// magnified icon grows out of the dock edge rather than around its
    /// own center.
    #[must_use]
    pub const fn pivot(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.5, 0.0),
            Self::Bottom => Vec2::new(0.5, 1.0),
            Self::Left => Vec2::new(0.0, 0.5),
            Self::Right => Vec2::new(1.0, 0.5),
        }
    }
}

/// Damped weighted average of `current` toward `target`.
///
/// `(current * coef + target) / (coef + 1)` — larger `coef` holds closer to
/// `current`. With `coef = 0` this is `target`; the result always lies
/// between the two inputs.
#[inline]
#[must_use]
pub fn blend(current: f32, target: f32, coef: f32) -> f32 {
    (current * coef + target) / (coef + 1.0)
}

/// Component-wise [`blend`] for positions.
#[inline]
#[must_use]
pub fn blend_vec2(current: Vec2, target: Vec2, coef: f32) -> Vec2 {
    (current * coef + target) / (coef + 1.0)
}
