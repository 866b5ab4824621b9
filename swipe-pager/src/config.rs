//! Pager configuration.
//!
//! A single [`PagerConfig`] covers every behaviour the pager has ever shipped
//! with. The three feature switches can be combined freely; [`PagerPreset`]
//! names the combinations that correspond to earlier releases of the widget.
//!
//! ```
//! use std::time::Duration;
//! use swipe_pager::config::{PagerConfig, PagerPreset};
//!
//! let config = PagerConfig::default()
//!     .touch_slop(24.0)
//!     .settle_duration(Duration::from_millis(250));
//! assert!(config.interception_enabled);
//!
//! let legacy = PagerConfig::preset(PagerPreset::ClampedDrag);
//! assert!(legacy.clamp_enabled && !legacy.snap_enabled);
//! ```

use std::time::Duration;

use derive_setters::Setters;

use crate::{easing::Easing, error::PagerError};

/// Default touch slop in pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Default length of the settle animation after release.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(200);

/// Configuration for a [`PagerController`](crate::PagerController).
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Minimum pointer travel, in pixels, before movement counts as a drag.
    pub touch_slop: f32,
    /// Length of the snap animation that runs after release.
    pub settle_duration: Duration,
    /// Curve used by the snap animation.
    pub easing: Easing,
    /// Keep the first panel's leading edge and the last panel's trailing edge
    /// out of the viewport.
    pub clamp_enabled: bool,
    /// Animate to a page-aligned offset when the pointer is released.
    pub snap_enabled: bool,
    /// Arbitrate gesture ownership with a nested vertical scroller.
    pub interception_enabled: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::preset(PagerPreset::NestedScrolling)
    }
}

impl PagerConfig {
    /// Returns the configuration for a named preset with default slop,
    /// duration and easing.
    pub fn preset(preset: PagerPreset) -> Self {
        let (clamp_enabled, snap_enabled, interception_enabled) = match preset {
            PagerPreset::FreeDrag => (false, false, false),
            PagerPreset::ClampedDrag => (true, false, false),
            PagerPreset::Snapping => (true, true, false),
            PagerPreset::NestedScrolling => (true, true, true),
        };
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            settle_duration: DEFAULT_SETTLE_DURATION,
            easing: Easing::default(),
            clamp_enabled,
            snap_enabled,
            interception_enabled,
        }
    }

    /// Checks that the configuration can drive a pager.
    pub fn validate(&self) -> Result<(), PagerError> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(PagerError::InvalidTouchSlop(self.touch_slop));
        }
        Ok(())
    }
}

/// Named feature combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagerPreset {
    /// Content follows the finger with no edge clamping and no snapping.
    FreeDrag,
    /// Content follows the finger but never scrolls past the outer panels.
    ClampedDrag,
    /// Clamped drag plus a snap animation to the nearest sensible page.
    Snapping,
    /// Everything above plus nested-scroll arbitration.
    NestedScrolling,
}

impl PagerPreset {
    /// All presets, oldest behaviour first.
    pub const ALL: [PagerPreset; 4] = [
        PagerPreset::FreeDrag,
        PagerPreset::ClampedDrag,
        PagerPreset::Snapping,
        PagerPreset::NestedScrolling,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = PagerConfig::default();
        assert!(config.clamp_enabled);
        assert!(config.snap_enabled);
        assert!(config.interception_enabled);
        assert_eq!(config.settle_duration, Duration::from_millis(200));
        assert_eq!(config.touch_slop, DEFAULT_TOUCH_SLOP);
    }

    #[test]
    fn presets_add_features_in_order() {
        let flags: Vec<_> = PagerPreset::ALL
            .iter()
            .map(|&preset| {
                let config = PagerConfig::preset(preset);
                (
                    config.clamp_enabled,
                    config.snap_enabled,
                    config.interception_enabled,
                )
            })
            .collect();
        assert_eq!(
            flags,
            vec![
                (false, false, false),
                (true, false, false),
                (true, true, false),
                (true, true, true),
            ]
        );
    }

    #[test]
    fn rejects_bad_slop() {
        assert!(PagerConfig::default().touch_slop(0.0).validate().is_ok());
        assert_eq!(
            PagerConfig::default().touch_slop(-1.0).validate(),
            Err(PagerError::InvalidTouchSlop(-1.0))
        );
        assert!(
            PagerConfig::default()
                .touch_slop(f32::NAN)
                .validate()
                .is_err()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PagerConfig =
            serde_json::from_str(r#"{"touch_slop": 16.0, "snap_enabled": false}"#)
                .expect("valid config json");
        assert_eq!(config.touch_slop, 16.0);
        assert!(!config.snap_enabled);
        assert!(config.clamp_enabled);
    }
}
