//! Neighbor-pull propagation effect.
//!
//! The focus icon bumps to peak scale and nudges toward the pointer; its
//! neighbors are dragged along by a pull-weighted average against their
//! already-displaced inner neighbor, pushed outward to clear the grown
//! icons, with scale falling off geometrically per step. The walk runs
//! both directions from the focus until each side is exhausted or leaves
//! the reach radius, then the row is re-normalized onto its base span.

use glam::Vec2;

use super::{base_targets, renormalize, Focus};
use crate::geometry::blend;
use crate::icon::{Icon, IconPose};
use crate::options::DockOptions;

/// Per-tick invariants of the outward walk.
struct WalkCtx<'a> {
    icons: &'a [Icon],
    pointer: Vec2,
    /// Effective size of the focus icon, scaling every threshold and push.
    size: f32,
    opts: &'a DockOptions,
}

impl WalkCtx<'_> {
    /// Displace one neighbor against its already-placed inner neighbor.
    ///
    /// Returns the neighbor's new primary-axis position, or `None` once
    /// the icon is out of reach, which closes that side of the walk.
    fn place(
        &self,
        targets: &mut [IconPose],
        idx: usize,
        sz: f32,
        pull: f32,
        prev: f32,
        dir: f32,
    ) -> Option<f32> {
        let icon = &self.icons[idx];
        if icon.base_position.distance(self.pointer)
            >= self.size * self.opts.reach
        {
            return None;
        }
        let o = self.opts.orientation;
        let push = self.size * (sz + self.opts.overlap_margin);
        let p = blend(prev, o.primary(icon.base_position), pull) + dir * push;
        targets[idx].position = o.with_primary(targets[idx].position, p);
        if sz > 1.0 {
            targets[idx].scale = sz;
        }
        Some(p)
    }
}

pub(super) fn compute(
    icons: &[Icon],
    pointer: Vec2,
    focus: Focus,
    opts: &DockOptions,
) -> Vec<IconPose> {
    let o = opts.orientation;
    let mut targets = base_targets(icons);
    let size = icons[focus.index].size_hint * opts.scale_factor;

    // Focus: peak scale, quarter-offset nudge along the row, lift toward
    // the screen interior (less when the pointer is off-center).
    let nudge = o.primary(focus.offset) / 4.0;
    let lift = o.lift_sign() * (size * opts.rise - nudge.abs() / 2.0);
    let fp = targets[focus.index].position;
    targets[focus.index] = IconPose::new(
        o.vec(o.primary(fp) + nudge, o.secondary(fp) + lift),
        opts.magnify,
    );

    let walk = WalkCtx {
        icons,
        pointer,
        size,
        opts,
    };
    let anchor = o.primary(targets[focus.index].position);
    let mut left_prev = anchor;
    let mut right_prev = anchor;
    let mut left_open = true;
    let mut right_open = true;

    let mut sz = opts.magnify;
    let mut pull = opts.pull;
    for step in 1..=opts.max_steps as usize {
        sz *= opts.spread;

        if left_open {
            let placed = focus.index.checked_sub(step).and_then(|i| {
                walk.place(&mut targets, i, sz, pull, left_prev, -1.0)
            });
            if let Some(p) = placed {
                left_prev = p;
            } else {
                left_open = false;
            }
        }
        if right_open {
            let idx = focus.index + step;
            let placed = if idx < icons.len() {
                walk.place(&mut targets, idx, sz, pull, right_prev, 1.0)
            } else {
                None
            };
            if let Some(p) = placed {
                right_prev = p;
            } else {
                right_open = false;
            }
        }

        if !left_open && !right_open {
            break;
        }
        pull *= opts.pull_decay;
    }

    renormalize(icons, &mut targets, o);
    targets
}
