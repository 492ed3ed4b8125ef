//! Icon value objects and the animated dock row.
//!
//! The caller owns icon identity and the un-animated layout; the core owns
//! only each icon's animated pose. [`DockRow::reconcile`] carries animated
//! poses across icon-set changes by id so add/remove/reorder never resets a
//! running animation.

use std::fmt;

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::geometry::Orientation;

/// Opaque stable icon identifier, assigned by the caller and mapped back to
/// a real on-screen icon by the rendering adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconId(pub u64);

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "icon#{}", self.0)
    }
}

/// One icon's slot in the caller's current layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSnapshot {
    /// Stable identity.
    pub id: IconId,
    /// Center of the icon's natural, un-animated slot.
    pub base_position: Vec2,
    /// Base icon edge length in pixels; scales all distance thresholds.
    pub size_hint: f32,
}

/// A position/scale pair — either an icon's animated state or a per-tick
/// target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPose {
    /// Icon center.
    pub position: Vec2,
    /// Uniform scale about the dock pivot.
    pub scale: f32,
}

impl IconPose {
    /// Pose at `position` with the given scale.
    #[must_use]
    pub const fn new(position: Vec2, scale: f32) -> Self {
        Self { position, scale }
    }

    /// Un-magnified pose at `position`.
    #[must_use]
    pub const fn resting(position: Vec2) -> Self {
        Self {
            position,
            scale: 1.0,
        }
    }

    /// Whether the pose may be written into animated state: finite
    /// position, finite positive scale.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.scale.is_finite()
            && self.scale > 0.0
    }
}

/// One dock entry: caller-owned layout plus the animated pose.
///
/// `current` is written only by the frame integrator; the rendering adapter
/// reads it through [`IconFrame`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    /// Stable identity.
    pub id: IconId,
    /// Center of the natural slot, refreshed from each snapshot.
    pub base_position: Vec2,
    /// Base icon edge length in pixels.
    pub size_hint: f32,
    /// Animated state.
    pub current: IconPose,
}

impl Icon {
    /// A new icon entering the row at its resting pose.
    #[must_use]
    pub const fn from_snapshot(snap: &IconSnapshot) -> Self {
        Self {
            id: snap.id,
            base_position: snap.base_position,
            size_hint: snap.size_hint,
            current: IconPose::resting(snap.base_position),
        }
    }

    /// The un-magnified pose at the natural slot.
    #[must_use]
    pub const fn base_pose(&self) -> IconPose {
        IconPose::resting(self.base_position)
    }

    /// The per-tick output frame for this icon.
    #[must_use]
    pub const fn frame(&self) -> IconFrame {
        IconFrame {
            id: self.id,
            position: self.current.position,
            scale: self.current.scale,
        }
    }
}

/// Per-icon output emitted to the rendering adapter once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFrame {
    /// Stable identity.
    pub id: IconId,
    /// Animated icon center.
    pub position: Vec2,
    /// Animated uniform scale.
    pub scale: f32,
}

/// The animated icon row, ordered by primary-axis base position.
#[derive(Debug, Clone, Default)]
pub struct DockRow {
    icons: Vec<Icon>,
}

impl DockRow {
    /// An empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { icons: Vec::new() }
    }

    /// Rebuild the row from the caller's current layout snapshot.
    ///
    /// Surviving icons keep their animated pose (matched by id) and pick up
    /// refreshed base positions and size hints; new icons enter at their
    /// resting pose; icons absent from the snapshot are dropped. The row is
    /// re-sorted (stably) by primary-axis base position, which defines the
    /// ordering every downstream pass relies on.
    pub fn reconcile(
        &mut self,
        snapshot: &[IconSnapshot],
        orientation: Orientation,
    ) {
        let mut poses: FxHashMap<IconId, IconPose> = FxHashMap::default();
        for icon in &self.icons {
            let _ = poses.insert(icon.id, icon.current);
        }

        let before = self.icons.len();
        self.icons.clear();
        for snap in snapshot {
            let mut icon = Icon::from_snapshot(snap);
            if let Some(pose) = poses.get(&snap.id) {
                icon.current = *pose;
            }
            self.icons.push(icon);
        }
        self.icons.sort_by(|a, b| {
            orientation
                .primary(a.base_position)
                .total_cmp(&orientation.primary(b.base_position))
        });

        if self.icons.len() != before {
            log::debug!(
                "dock row reconciled: {before} -> {} icons",
                self.icons.len()
            );
        }
    }

    /// The icons in row order.
    #[must_use]
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Mutable access for the integrator's write step.
    pub(crate) fn icons_mut(&mut self) -> &mut [Icon] {
        &mut self.icons
    }

    /// Number of icons in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the row has no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Snapshot the per-icon output frames for the rendering adapter.
    #[must_use]
    pub fn frames(&self) -> Vec<IconFrame> {
        self.icons.iter().map(Icon::frame).collect()
    }
}
