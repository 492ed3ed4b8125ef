//! Mac-like radial magnification effect.
//!
//! Icons inside a circle centered on the pointer grow with a linear
//! falloff, adjacent icons are pushed apart until their grown diameters no
//! longer overlap, and the row is re-normalized back onto its base span.
//! Compared to the bump effect the falloff is wider and flatter, closer to
//! the macOS dock's parabolic look.

use glam::Vec2;

use super::{base_targets, renormalize};
use crate::icon::{Icon, IconPose};
use crate::options::DockOptions;

pub(super) fn compute(
    icons: &[Icon],
    pointer: Vec2,
    opts: &DockOptions,
) -> Vec<IconPose> {
    let o = opts.orientation;
    let mut targets = base_targets(icons);

    // Slot pitch from the first two icons; a degenerate pitch means the
    // caller's layout pass has not run yet, so hold the resting row.
    let pitch = o.primary(icons[1].base_position)
        - o.primary(icons[0].base_position);
    if !pitch.is_finite() || pitch <= 0.0 {
        return targets;
    }

    let radius = pitch * (4.0 + 2.0 * opts.spread) / 2.0;
    let px = o.primary(pointer);

    // Grown diameter per icon, linear falloff inside the circle
    let mut diameters = vec![pitch; icons.len()];
    for (i, icon) in icons.iter().enumerate() {
        let dx = o.primary(icon.base_position) - px;
        if dx * dx < radius * radius {
            let dd = 1.0 - dx.abs() / radius;
            diameters[i] = pitch
                * (1.0 + (opts.magnify - 1.0) * opts.scale_factor * dd);
        }
        targets[i].scale = diameters[i] / pitch;
        let lift = o.lift_sign() * (diameters[i] - pitch) * opts.rise;
        targets[i].position = o.vec(
            o.primary(targets[i].position),
            o.secondary(targets[i].position) + lift,
        );
    }

    // Push overlapping neighbors apart, left to right
    for i in 0..icons.len() - 1 {
        let min_gap = (diameters[i] + diameters[i + 1]) / 2.0;
        let a = o.primary(targets[i].position);
        let b = o.primary(targets[i + 1].position);
        if b - a < min_gap {
            targets[i + 1].position =
                o.with_primary(targets[i + 1].position, a + min_gap);
        }
    }

    renormalize(icons, &mut targets, o);
    targets
}

/// Growth factor for the dock container itself, so the shell can widen the
/// container while the effect is engaged instead of clipping lifted icons.
///
/// Returns 1.0 for a degenerate row width.
#[must_use]
pub fn container_scale(
    row_width: f32,
    icon_size: f32,
    options: &DockOptions,
) -> f32 {
    if !row_width.is_finite() || row_width <= 0.0 {
        return 1.0;
    }
    let opts = options.sanitized();
    let pad =
        icon_size * 4.0 * opts.scale_factor * (opts.spread / 2.0);
    (row_width + pad) / row_width
}
