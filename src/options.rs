//! Centralized animation options with TOML preset support.
//!
//! All tweakable settings (effect choice, magnification coefficients,
//! driver timing) are consolidated here. Options serialize to/from TOML for
//! presets, and expose a JSON Schema so a settings UI can render sliders
//! with the documented ranges. Out-of-range values are clamped by
//! [`DockOptions::sanitized`] rather than rejected: a cosmetic subsystem
//! degrades, it does not fail.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DockwaveError;
use crate::geometry::Orientation;
use crate::magnify::MagnifyEffect;

/// Clamp a coefficient to its documented range, falling back to a default
/// when the stored value is not finite.
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Dock", inline)]
#[serde(default)]
/// Magnification model parameters.
pub struct DockOptions {
    /// Which screen edge the dock is attached to.
    #[schemars(title = "Dock Location")]
    pub orientation: Orientation,
    /// Magnification effect to run.
    #[schemars(title = "Effect")]
    pub effect: MagnifyEffect,
    /// Peak scale of the focus icon.
    #[schemars(title = "Magnify", range(min = 1.0, max = 4.0), extend("step" = 0.1))]
    pub magnify: f32,
    /// Falloff width. Per-step scale falloff for the bump effect; widens
    /// the magnification circle for the mac-like effect.
    #[schemars(title = "Spread", range(min = 0.0, max = 0.95), extend("step" = 0.05))]
    pub spread: f32,
    /// Secondary-axis lift fraction of the icon size.
    #[schemars(title = "Rise", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub rise: f32,
    /// Initial neighbor pull coefficient (bump effect).
    #[schemars(skip)]
    pub pull: f32,
    /// Per-step decay of the pull coefficient (bump effect).
    #[schemars(skip)]
    pub pull_decay: f32,
    /// Extra outward push per neighbor, as a fraction of the icon size.
    #[schemars(skip)]
    pub overlap_margin: f32,
    /// Focus selection radius, in icon sizes. The pointer must be this
    /// close to an icon center before any icon is focused.
    #[schemars(skip)]
    pub dead_zone: f32,
    /// Engagement/propagation radius, in icon sizes. Icons farther than
    /// this from the pointer keep their base targets.
    #[schemars(skip)]
    pub reach: f32,
    /// Bound on the neighbor propagation walk. The walk normally ends when
    /// both sides are exhausted or out of reach; this is a backstop.
    #[schemars(skip)]
    pub max_steps: u32,
    /// Display scale multiplier applied uniformly to icon sizes.
    #[schemars(skip)]
    pub scale_factor: f32,
}

impl Default for DockOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Bottom,
            effect: MagnifyEffect::Bump,
            magnify: 2.0,
            spread: 0.8,
            rise: 0.15,
            pull: 1.5,
            pull_decay: 0.9,
            overlap_margin: 0.2,
            dead_zone: 0.8,
            reach: 2.0,
            max_steps: 80,
            scale_factor: 1.0,
        }
    }
}

impl DockOptions {
    /// A copy with every coefficient clamped to its documented range.
    ///
    /// Non-finite stored values fall back to the defaults. Called by the
    /// model and the driver at the top of every tick so live preference
    /// updates can never push the math out of range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        Self {
            orientation: self.orientation,
            effect: self.effect,
            magnify: clamp_or(self.magnify, 1.0, 4.0, d.magnify),
            spread: clamp_or(self.spread, 0.0, 0.95, d.spread),
            rise: clamp_or(self.rise, 0.0, 1.0, d.rise),
            pull: clamp_or(self.pull, 1.0, 3.0, d.pull),
            pull_decay: clamp_or(self.pull_decay, 0.5, 1.0, d.pull_decay),
            overlap_margin: clamp_or(
                self.overlap_margin,
                0.0,
                1.0,
                d.overlap_margin,
            ),
            dead_zone: clamp_or(self.dead_zone, 0.1, 2.0, d.dead_zone),
            reach: clamp_or(self.reach, 0.5, 8.0, d.reach),
            max_steps: self.max_steps.clamp(1, 512),
            scale_factor: clamp_or(self.scale_factor, 0.5, 4.0, d.scale_factor),
        }
    }

    /// Normalized scale-about anchor for the configured orientation, for
    /// adapters applying scale-about-point semantics.
    #[must_use]
    pub const fn pivot(&self) -> Vec2 {
        self.orientation.pivot()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Driver", inline)]
#[serde(default)]
/// Animation driver timing parameters.
pub struct DriverOptions {
    /// Milliseconds between animation ticks.
    #[schemars(title = "Tick Interval", range(min = 4, max = 1000))]
    pub tick_interval_ms: u64,
    /// Milliseconds of quiet (no significant motion) before the driver
    /// stops ticking.
    #[schemars(title = "Quiet Period", range(min = 100, max = 60000))]
    pub quiet_period_ms: u64,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: 25,
            quiet_period_ms: 1500,
        }
    }
}

impl DriverOptions {
    /// Interval between animation ticks.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Quiet period after which the driver idles.
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[dock]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Magnification model parameters.
    pub dock: DockOptions,
    /// Driver timing parameters.
    pub driver: DriverOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DockwaveError> {
        let content =
            std::fs::read_to_string(path).map_err(DockwaveError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DockwaveError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DockwaveError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DockwaveError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DockwaveError::Io)?;
        }
        std::fs::write(path, content).map_err(DockwaveError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[dock]
magnify = 2.5
effect = "maclike"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.dock.magnify, 2.5);
        assert_eq!(opts.dock.effect, MagnifyEffect::Maclike);
        // Everything else should be default
        assert_eq!(opts.dock.spread, 0.8);
        assert_eq!(opts.dock.orientation, Orientation::Bottom);
        assert_eq!(opts.driver.tick_interval_ms, 25);
    }

    #[test]
    fn orientation_parses_as_snake_case() {
        let toml_str = r#"
[dock]
orientation = "left"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.dock.orientation, Orientation::Left);
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let opts = DockOptions {
            magnify: -3.0,
            spread: 2.0,
            rise: 9.0,
            pull: 0.0,
            max_steps: 0,
            ..Default::default()
        };
        let s = opts.sanitized();
        assert_eq!(s.magnify, 1.0);
        assert_eq!(s.spread, 0.95);
        assert_eq!(s.rise, 1.0);
        assert_eq!(s.pull, 1.0);
        assert_eq!(s.max_steps, 1);
    }

    #[test]
    fn sanitized_replaces_non_finite_values() {
        let opts = DockOptions {
            magnify: f32::NAN,
            spread: f32::INFINITY,
            ..Default::default()
        };
        let s = opts.sanitized();
        assert_eq!(s.magnify, 2.0);
        assert_eq!(s.spread, 0.8);
    }

    #[test]
    fn sanitized_is_identity_on_defaults() {
        let opts = DockOptions::default();
        assert_eq!(opts.sanitized(), opts);
    }

    #[test]
    fn pivot_follows_orientation() {
        let opts = DockOptions {
            orientation: Orientation::Right,
            ..Default::default()
        };
        assert_eq!(opts.pivot(), Vec2::new(1.0, 0.5));
        assert_eq!(DockOptions::default().pivot(), Vec2::new(0.5, 1.0));
    }

    #[test]
    fn driver_durations() {
        let opts = DriverOptions::default();
        assert_eq!(opts.tick_interval(), Duration::from_millis(25));
        assert_eq!(opts.quiet_period(), Duration::from_millis(1500));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("dock"));
        assert!(props.contains_key("driver"));

        // Slider-exposed fields present, internals skipped
        let dock = &props["dock"]["properties"];
        assert!(dock.get("magnify").is_some());
        assert!(dock.get("spread").is_some());
        assert!(dock.get("rise").is_some());
        assert!(dock.get("pull").is_none());
        assert!(dock.get("max_steps").is_none());
    }
}
