//! Animation driver: the tick/quiet-period state machine.
//!
//! The driver owns no timer and spawns no thread. The host calls [`poll`]
//! from whatever frame or timeout source it has — a compositor frame
//! clock, a GLib timeout, a `requestAnimationFrame` loop — passing the
//! current instant, and the driver enforces its own tick cadence and
//! idles itself once nothing has visibly moved for a quiet period. All
//! methods take `now` explicitly, so tests drive the full lifecycle with
//! fabricated instants and no sleeping.
//!
//! [`poll`]: AnimationDriver::poll

use glam::Vec2;
use web_time::Instant;

use crate::icon::{DockRow, IconFrame, IconSnapshot};
use crate::integrate::integrate_row;
use crate::magnify::compute_targets;
use crate::options::{DockOptions, DriverOptions};

/// What the core needs from the shell-integration layer, read once per
/// tick each. Implementations may return different values between ticks —
/// live preference updates and icon-set changes are picked up naturally.
pub trait DockShell {
    /// Current icon layout, ordered along the primary axis.
    fn icon_snapshot(&self) -> Vec<IconSnapshot>;
    /// Current pointer position, in the same coordinate space as the
    /// snapshot.
    fn pointer_position(&self) -> Vec2;
    /// Current magnification options.
    fn options(&self) -> DockOptions;
}

/// Receiver for the per-tick output, applied to on-screen widgets by the
/// rendering adapter.
pub trait FrameSink {
    /// Called once per tick, after integration, with every icon's frame.
    fn on_frame(&mut self, frames: &[IconFrame]);
}

/// Driver lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Not ticking. `tick`/`poll` are no-ops.
    Idle,
    /// Ticking at the configured cadence until the quiet period expires.
    Running,
}

/// Runs the magnification model and the frame integrator at a fixed tick
/// cadence while active, and stops itself after a quiet period with no
/// visually significant change.
///
/// The driver is restartable indefinitely; there is no terminal state.
/// Misuse — ticking while idle, double start, double stop — is always a
/// defined no-op.
#[derive(Debug)]
pub struct AnimationDriver {
    timing: DriverOptions,
    state: DriverState,
    row: DockRow,
    enabled: bool,
    /// Re-entrancy guard: a pointer event arriving mid-tick must not start
    /// a second tick.
    ticking: bool,
    last_tick: Option<Instant>,
    quiet_deadline: Option<Instant>,
}

impl AnimationDriver {
    /// Driver with the given timing, starting idle and enabled.
    #[must_use]
    pub const fn new(timing: DriverOptions) -> Self {
        Self {
            timing,
            state: DriverState::Idle,
            row: DockRow::new(),
            enabled: true,
            ticking: false,
            last_tick: None,
            quiet_deadline: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Whether the driver is currently ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running)
    }

    /// The animated row, for adapters that want to read poses outside the
    /// frame callback.
    #[must_use]
    pub const fn row(&self) -> &DockRow {
        &self.row
    }

    /// Suspend or resume the driver, e.g. around an icon drag.
    ///
    /// Disabling stops any running animation and clears the row;
    /// re-enabling permits a fresh `start`.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            log::debug!("animation driver enabled");
        } else {
            self.stop();
            self.row = DockRow::new();
            log::debug!("animation driver disabled");
        }
    }

    /// Begin ticking. Re-entrant `start` while already running only
    /// re-arms the quiet-period deadline.
    pub fn start(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            self.last_tick = None;
            log::debug!("animation driver started");
        }
        self.quiet_deadline = Some(now + self.timing.quiet_period());
    }

    /// Force the driver idle and clear both deadlines. Idempotent, safe
    /// from any state.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            log::debug!("animation driver stopped");
        }
        self.state = DriverState::Idle;
        self.last_tick = None;
        self.quiet_deadline = None;
    }

    /// Re-arm the quiet-period deadline while running.
    pub fn notify_activity(&mut self, now: Instant) {
        if self.state == DriverState::Running {
            self.quiet_deadline = Some(now + self.timing.quiet_period());
        }
    }

    /// The pointer entered the dock area: start animating.
    pub fn pointer_entered(&mut self, now: Instant) {
        self.start(now);
    }

    /// The pointer moved inside the dock area: keep animating.
    pub fn pointer_moved(&mut self, now: Instant) {
        self.start(now);
    }

    /// The pointer left the dock area: keep ticking so the row settles,
    /// and let the quiet period expire on its own.
    pub fn pointer_left(&mut self, now: Instant) {
        self.notify_activity(now);
    }

    /// Host integration surface: run a tick if one is due, and idle the
    /// driver once the quiet period has expired. Returns whether the
    /// driver is still running.
    ///
    /// Call at least as often as the tick interval; the driver tolerates
    /// any faster or slower cadence.
    pub fn poll(
        &mut self,
        now: Instant,
        shell: &impl DockShell,
        sink: &mut impl FrameSink,
    ) -> bool {
        if self.state != DriverState::Running {
            return false;
        }
        if self.quiet_expired(now) {
            self.settle();
            return false;
        }
        let due = self.last_tick.is_none_or(|t| {
            now.saturating_duration_since(t) >= self.timing.tick_interval()
        });
        if due {
            self.tick(now, shell, sink);
        }
        self.is_running()
    }

    /// Run one animation tick: reconcile the row against the shell's
    /// snapshot, compute targets, integrate, and emit the frame batch.
    ///
    /// No-op while idle or when re-entered from a sink callback.
    pub fn tick(
        &mut self,
        now: Instant,
        shell: &impl DockShell,
        sink: &mut impl FrameSink,
    ) {
        if self.state != DriverState::Running || self.ticking {
            return;
        }
        self.ticking = true;

        let opts = shell.options().sanitized();
        let snapshot = shell.icon_snapshot();
        self.row.reconcile(&snapshot, opts.orientation);

        let pointer = shell.pointer_position();
        let targets = compute_targets(self.row.icons(), pointer, &opts);
        let changed =
            integrate_row(self.row.icons_mut(), &targets, opts.scale_factor);

        sink.on_frame(&self.row.frames());
        self.last_tick = Some(now);

        if changed {
            self.quiet_deadline = Some(now + self.timing.quiet_period());
        } else if self.quiet_expired(now) {
            self.settle();
        }

        self.ticking = false;
    }

    fn quiet_expired(&self, now: Instant) -> bool {
        self.quiet_deadline.is_none_or(|deadline| now >= deadline)
    }

    fn settle(&mut self) {
        log::debug!("animation settled, driver idle");
        self.state = DriverState::Idle;
        self.last_tick = None;
        self.quiet_deadline = None;
    }
}
