//! Frame integrator: damped blending of current poses toward targets.
//!
//! Pure functions with no hidden state. Position blending only runs while
//! the remaining distance sits inside an active band: below it the icon
//! has arrived and is held exactly (no asymptotic creep), above it the
//! target jumped discontinuously (icon-set change) and smoothing it would
//! leave a stale animation sliding across the dock, so the icon snaps.

use crate::geometry::{blend, blend_vec2};
use crate::icon::{Icon, IconPose};

/// Position smoothing coefficient: each frame closes a third of the gap.
pub const POS_COEF: f32 = 2.0;
/// Scale smoothing coefficient, slightly heavier than position.
pub const SCALE_COEF: f32 = 2.5;
/// Fraction of the icon size below which a position has arrived.
pub const ARRIVE_FRAC: f32 = 0.01;
/// Fraction of the icon size above which a position change is treated as
/// a discontinuous jump and snapped.
pub const JUMP_FRAC: f32 = 3.0;

/// Blend one icon's pose toward its target.
///
/// Returns the next pose and whether the icon saw significant motion
/// (i.e. its remaining distance was inside the active band). A non-finite
/// blended result — degenerate geometry, a poisoned target — discards the
/// update and returns `current` unchanged.
#[must_use]
pub fn integrate(
    current: IconPose,
    target: IconPose,
    icon_size: f32,
) -> (IconPose, bool) {
    if !icon_size.is_finite() || icon_size <= 0.0 {
        return (current, false);
    }

    let scale = blend(current.scale, target.scale, SCALE_COEF);

    let dist = current.position.distance(target.position);
    let (position, moved) = if dist <= icon_size * ARRIVE_FRAC {
        (current.position, false)
    } else if dist >= icon_size * JUMP_FRAC {
        (target.position, false)
    } else {
        (blend_vec2(current.position, target.position, POS_COEF), true)
    };

    let next = IconPose::new(position, scale);
    if next.is_valid() {
        (next, moved)
    } else {
        (current, false)
    }
}

/// Blend a whole row toward its targets.
///
/// Targets are index-aligned with `icons` (the magnification model's
/// output order). Returns true iff at least one icon saw significant
/// motion this tick — the driver's idle-detection signal.
pub fn integrate_row(
    icons: &mut [Icon],
    targets: &[IconPose],
    scale_factor: f32,
) -> bool {
    debug_assert_eq!(icons.len(), targets.len());
    let mut changed = false;
    for (icon, target) in icons.iter_mut().zip(targets) {
        let size = icon.size_hint * scale_factor;
        let (next, moved) = integrate(icon.current, *target, size);
        icon.current = next;
        changed |= moved;
    }
    changed
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::icon::{IconId, IconSnapshot};

    fn pose(x: f32, y: f32, scale: f32) -> IconPose {
        IconPose::new(Vec2::new(x, y), scale)
    }

    #[test]
    fn idempotent_at_rest() {
        let current = pose(120.0, 500.0, 1.0);
        let (next, moved) = integrate(current, current, 100.0);
        assert_eq!(next, current);
        assert!(!moved);
    }

    #[test]
    fn sub_threshold_distance_holds_current() {
        let current = pose(0.0, 0.0, 1.0);
        let target = pose(0.001, 0.0, 1.0);
        let (next, moved) = integrate(current, target, 100.0);
        assert_eq!(next.position, current.position);
        assert!(!moved);
    }

    #[test]
    fn active_band_blends_a_third_of_the_gap() {
        let current = pose(0.0, 0.0, 1.0);
        let target = pose(90.0, 0.0, 1.0);
        let (next, moved) = integrate(current, target, 100.0);
        assert!((next.position.x - 30.0).abs() < 1e-4);
        assert!(moved);
    }

    #[test]
    fn large_jump_snaps_without_motion_flag() {
        let current = pose(0.0, 0.0, 1.0);
        let target = pose(1000.0, 0.0, 1.0);
        let (next, moved) = integrate(current, target, 100.0);
        assert_eq!(next.position, target.position);
        assert!(!moved);
    }

    #[test]
    fn scale_blends_every_tick() {
        let current = pose(0.0, 0.0, 1.0);
        let target = pose(0.0, 0.0, 2.0);
        let (next, moved) = integrate(current, target, 100.0);
        // (1.0 * 2.5 + 2.0) / 3.5
        assert!((next.scale - 4.5 / 3.5).abs() < 1e-4);
        // Scale-only convergence is not significant motion
        assert!(!moved);
    }

    #[test]
    fn repeated_integration_converges_to_target() {
        let mut current = pose(0.0, 500.0, 1.0);
        let target = pose(80.0, 480.0, 2.0);
        for _ in 0..200 {
            current = integrate(current, target, 100.0).0;
        }
        assert!(current.position.distance(target.position) <= 1.0);
        assert!((current.scale - 2.0).abs() < 1e-3);
    }

    #[test]
    fn non_finite_target_holds_current() {
        let current = pose(10.0, 20.0, 1.5);
        for target in [
            pose(f32::NAN, 20.0, 1.0),
            pose(10.0, f32::INFINITY, 1.0),
            pose(11.0, 20.0, f32::NAN),
        ] {
            let (next, moved) = integrate(current, target, 100.0);
            assert_eq!(next, current);
            assert!(!moved);
        }
    }

    #[test]
    fn degenerate_icon_size_holds_current() {
        let current = pose(0.0, 0.0, 1.0);
        let target = pose(50.0, 0.0, 2.0);
        for size in [0.0, -10.0, f32::NAN] {
            let (next, moved) = integrate(current, target, size);
            assert_eq!(next, current);
            assert!(!moved);
        }
    }

    #[test]
    fn scale_never_crosses_zero() {
        // A hostile target scale cannot push the blended scale negative
        let current = pose(0.0, 0.0, 0.1);
        let target = pose(0.0, 0.0, -5.0);
        let (next, _) = integrate(current, target, 100.0);
        assert!(next.scale > 0.0);
        assert_eq!(next, current);
    }

    #[test]
    fn row_reports_changed_when_any_icon_moves() {
        let mut icons: Vec<Icon> = (0..3)
            .map(|i| {
                Icon::from_snapshot(&IconSnapshot {
                    id: IconId(i),
                    base_position: Vec2::new(i as f32 * 100.0, 500.0),
                    size_hint: 100.0,
                })
            })
            .collect();
        let mut targets: Vec<IconPose> =
            icons.iter().map(Icon::base_pose).collect();

        assert!(!integrate_row(&mut icons, &targets, 1.0));

        targets[1] = pose(130.0, 480.0, 1.6);
        assert!(integrate_row(&mut icons, &targets, 1.0));
        assert!(icons[1].current.position.x > 100.0);
        // Untouched icons stay put
        assert_eq!(icons[0].current.position, Vec2::new(0.0, 500.0));
    }
}
