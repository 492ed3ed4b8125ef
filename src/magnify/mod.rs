//! Magnification model: pure per-tick target computation.
//!
//! Given the ordered icon row, the pointer, and the dock options, produce
//! each icon's target pose for this tick. Two interchangeable effects are
//! provided; both share the same focus-selection front end and both
//! re-normalize the row so the first and last icons stay anchored on their
//! base positions, whatever the pointer does.

mod bump;
mod maclike;

pub use maclike::container_scale;

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::Orientation;
use crate::icon::{Icon, IconPose};
use crate::options::DockOptions;

/// Which magnification strategy to run each tick.
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
pub enum MagnifyEffect {
    /// Neighbor-pull propagation: the focus icon bumps up and drags its
    /// neighbors outward with a geometrically decaying falloff.
    #[default]
    Bump,
    /// Radial falloff around the pointer with pairwise collision
    /// resolution, in the manner of the macOS dock.
    Maclike,
}

/// The icon nearest the pointer, selected inside the dead zone.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Focus {
    /// Index of the focus icon in row order.
    pub index: usize,
    /// Euclidean pointer distance to the icon's base center.
    pub distance: f32,
    /// Base center minus pointer.
    pub offset: Vec2,
}

/// Compute each icon's target pose for this tick.
///
/// Output is index-aligned with `icons`, whose order (primary-axis base
/// position) is never changed. Fewer than two icons, a non-finite pointer,
/// or no icon inside the dead zone all yield resting targets: base
/// position, scale 1.
#[must_use]
pub fn compute_targets(
    icons: &[Icon],
    pointer: Vec2,
    options: &DockOptions,
) -> Vec<IconPose> {
    let opts = options.sanitized();
    if icons.len() < 2 || !pointer.is_finite() {
        return base_targets(icons);
    }
    let Some(focus) = find_focus(icons, pointer, &opts) else {
        return base_targets(icons);
    };
    // Engagement radius, independent of the dead zone. With default
    // options the dead zone is the tighter of the two; a caller may widen
    // it past `reach`.
    let size = icons[focus.index].size_hint * opts.scale_factor;
    if focus.distance >= size * opts.reach {
        return base_targets(icons);
    }

    match opts.effect {
        MagnifyEffect::Bump => bump::compute(icons, pointer, focus, &opts),
        MagnifyEffect::Maclike => maclike::compute(icons, pointer, &opts),
    }
}

/// Resting targets: base position, scale 1, for every icon.
pub(crate) fn base_targets(icons: &[Icon]) -> Vec<IconPose> {
    icons.iter().map(Icon::base_pose).collect()
}

/// Nearest icon to the pointer inside the dead zone.
///
/// Candidates need a positive finite size and a finite base position; an
/// icon with degraded geometry simply cannot take focus. Ties go to the
/// first icon in row order.
pub(crate) fn find_focus(
    icons: &[Icon],
    pointer: Vec2,
    opts: &DockOptions,
) -> Option<Focus> {
    let mut best: Option<Focus> = None;
    for (index, icon) in icons.iter().enumerate() {
        let size = icon.size_hint * opts.scale_factor;
        if size <= 0.0 || !size.is_finite() || !icon.base_position.is_finite()
        {
            continue;
        }
        let offset = icon.base_position - pointer;
        let distance = offset.length();
        if distance < size * opts.dead_zone
            && best.is_none_or(|b| distance < b.distance)
        {
            best = Some(Focus {
                index,
                distance,
                offset,
            });
        }
    }
    best
}

/// Affinely remap primary-axis targets so the computed first/last
/// positions land exactly on the base first/last positions.
///
/// This keeps the total row span constant — the outward neighbor push can
/// never overflow the dock container. A degenerate computed span leaves
/// the targets untouched.
pub(crate) fn renormalize(
    icons: &[Icon],
    targets: &mut [IconPose],
    orientation: Orientation,
) {
    let (Some(first), Some(last)) = (icons.first(), icons.last()) else {
        return;
    };
    let base_first = orientation.primary(first.base_position);
    let base_last = orientation.primary(last.base_position);
    let got_first = orientation.primary(targets[0].position);
    let got_last = orientation.primary(targets[targets.len() - 1].position);
    let span = got_last - got_first;
    if !span.is_finite() || span.abs() < f32::EPSILON {
        return;
    }
    let k = (base_last - base_first) / span;
    for t in targets.iter_mut() {
        let p = base_first + (orientation.primary(t.position) - got_first) * k;
        t.position = orientation.with_primary(t.position, p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{IconId, IconSnapshot};

    pub(super) fn row(xs: &[f32], size: f32) -> Vec<Icon> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| {
                Icon::from_snapshot(&IconSnapshot {
                    id: IconId(i as u64),
                    base_position: Vec2::new(x, 500.0),
                    size_hint: size,
                })
            })
            .collect()
    }

    fn five_icons() -> Vec<Icon> {
        row(&[0.0, 100.0, 200.0, 300.0, 400.0], 100.0)
    }

    #[test]
    fn pointer_far_outside_yields_resting_targets() {
        let icons = five_icons();
        let targets = compute_targets(
            &icons,
            Vec2::new(-1000.0, 500.0),
            &DockOptions::default(),
        );
        for (icon, t) in icons.iter().zip(&targets) {
            assert_eq!(t.position, icon.base_position);
            assert_eq!(t.scale, 1.0);
        }
    }

    #[test]
    fn non_finite_pointer_yields_resting_targets() {
        let icons = five_icons();
        let targets = compute_targets(
            &icons,
            Vec2::new(f32::NAN, 500.0),
            &DockOptions::default(),
        );
        for (icon, t) in icons.iter().zip(&targets) {
            assert_eq!(t.position, icon.base_position);
            assert_eq!(t.scale, 1.0);
        }
    }

    #[test]
    fn single_icon_never_magnifies() {
        let icons = row(&[100.0], 100.0);
        let targets = compute_targets(
            &icons,
            Vec2::new(100.0, 500.0),
            &DockOptions::default(),
        );
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0], icons[0].base_pose());
    }

    #[test]
    fn empty_row_yields_no_targets() {
        let targets = compute_targets(
            &[],
            Vec2::new(0.0, 0.0),
            &DockOptions::default(),
        );
        assert!(targets.is_empty());
    }

    #[test]
    fn focus_selects_nearest_icon() {
        let icons = five_icons();
        let opts = DockOptions::default();
        let focus =
            find_focus(&icons, Vec2::new(215.0, 500.0), &opts).unwrap();
        assert_eq!(focus.index, 2);
        assert!((focus.distance - 15.0).abs() < 1e-4);
        assert!((focus.offset.x - -15.0).abs() < 1e-4);
    }

    #[test]
    fn focus_tie_breaks_to_first_in_row_order() {
        let icons = five_icons();
        let opts = DockOptions::default();
        // Exactly midway between icons 1 and 2
        let focus =
            find_focus(&icons, Vec2::new(150.0, 500.0), &opts).unwrap();
        assert_eq!(focus.index, 1);
    }

    #[test]
    fn focus_ignores_pointer_outside_dead_zone() {
        let icons = five_icons();
        let opts = DockOptions::default();
        // 80 = 0.8 * 100 away from the nearest center: outside
        assert!(find_focus(&icons, Vec2::new(200.0, 580.0), &opts).is_none());
        // Just inside
        assert!(find_focus(&icons, Vec2::new(200.0, 579.0), &opts).is_some());
    }

    #[test]
    fn zero_size_icons_cannot_take_focus() {
        let mut icons = five_icons();
        icons[2].size_hint = 0.0;
        let opts = DockOptions::default();
        // Pointer sits on icon 2, but its degraded size excludes it; the
        // next-nearest icons are 100 away, outside their own dead zones,
        // so nothing focuses and the tick degrades to resting targets.
        assert!(find_focus(&icons, Vec2::new(200.0, 500.0), &opts).is_none());
        let targets =
            compute_targets(&icons, Vec2::new(200.0, 500.0), &opts);
        assert!(targets.iter().all(|t| t.scale == 1.0));
    }

    #[test]
    fn renormalize_pins_row_ends() {
        let icons = five_icons();
        let mut targets = base_targets(&icons);
        // Simulate an outward push
        targets[0].position.x = -60.0;
        targets[1].position.x = 70.0;
        targets[3].position.x = 330.0;
        targets[4].position.x = 460.0;
        renormalize(&icons, &mut targets, Orientation::Bottom);
        assert!((targets[0].position.x - 0.0).abs() < 1e-3);
        assert!((targets[4].position.x - 400.0).abs() < 1e-3);
        // Interior stays inside the span and keeps its order
        for pair in targets.windows(2) {
            assert!(pair[0].position.x < pair[1].position.x);
        }
    }

    #[test]
    fn renormalize_skips_degenerate_span() {
        let icons = row(&[100.0, 100.0], 100.0);
        let mut targets = base_targets(&icons);
        let before = targets.clone();
        renormalize(&icons, &mut targets, Orientation::Bottom);
        assert_eq!(targets, before);
    }
}
