// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What happens when a still-active pinch pulls the scale back under the floor.
///
/// Pinching back down below the floor ends the zoom episode exactly like
/// lifting the fingers does: the copy returns to rest and ancestor scrolling
/// is restored. This policy decides what the rest of that same pinch does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloorExitPolicy {
    /// Ignore gesture input until a gesture reports `Ended` or `Cancelled`.
    ///
    /// Each lift of the fingers produces at most one zoom episode.
    #[default]
    SuppressUntilEnded,
    /// Once the return to rest completes, the same pinch may zoom again.
    Rearm,
}

/// Tuning for [`ZoomController`](crate::ZoomController).
///
/// Out-of-range values are normalized rather than rejected:
/// - A non-finite or non-positive `min_scale` falls back to `1.0`; finite
///   values below `1.0` are raised to `1.0`, since the rest scale must sit at
///   or below the floor.
/// - A non-finite or negative `reset_duration` becomes `0.0`, which returns
///   the copy to rest without animating.
///
/// ```
/// use understory_pinch_zoom::{FloorExitPolicy, ZoomConfig};
///
/// let config = ZoomConfig::default()
///     .with_min_scale(1.2)
///     .with_reset_duration(0.25)
///     .with_floor_exit(FloorExitPolicy::Rearm);
/// assert_eq!(config.min_scale(), 1.2);
///
/// let config = ZoomConfig::default().with_min_scale(f64::NAN);
/// assert_eq!(config.min_scale(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    min_scale: f64,
    animate_reset: bool,
    reset_duration: f64,
    floor_exit: FloorExitPolicy,
}

impl ZoomConfig {
    /// Default scale floor.
    pub const DEFAULT_MIN_SCALE: f64 = 1.0;
    /// Default return-to-rest duration, in seconds.
    pub const DEFAULT_RESET_DURATION: f64 = 0.3;

    /// Sets the scale floor (the "minimum pinch scale").
    ///
    /// Pinch updates can never take the scale to or below this value, and pan
    /// and rotation are inert at or below it.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = if min_scale.is_finite() && min_scale > 0.0 {
            min_scale.max(1.0)
        } else {
            Self::DEFAULT_MIN_SCALE
        };
        self
    }

    /// Sets whether the return to rest is animated.
    #[must_use]
    pub fn with_animate_reset(mut self, animate: bool) -> Self {
        self.animate_reset = animate;
        self
    }

    /// Sets the return-to-rest duration in seconds.
    #[must_use]
    pub fn with_reset_duration(mut self, seconds: f64) -> Self {
        self.reset_duration = if seconds.is_finite() && seconds > 0.0 {
            seconds
        } else {
            0.0
        };
        self
    }

    /// Sets the floor exit policy.
    #[must_use]
    pub fn with_floor_exit(mut self, policy: FloorExitPolicy) -> Self {
        self.floor_exit = policy;
        self
    }

    /// The scale floor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Whether the return to rest is animated.
    #[must_use]
    pub fn animate_reset(&self) -> bool {
        self.animate_reset
    }

    /// Return-to-rest duration in seconds.
    #[must_use]
    pub fn reset_duration(&self) -> f64 {
        self.reset_duration
    }

    /// The floor exit policy.
    #[must_use]
    pub fn floor_exit(&self) -> FloorExitPolicy {
        self.floor_exit
    }

    /// Returns `true` if resets go through the host animator.
    #[must_use]
    pub fn animates(&self) -> bool {
        self.animate_reset && self.reset_duration > 0.0
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            animate_reset: true,
            reset_duration: Self::DEFAULT_RESET_DURATION,
            floor_exit: FloorExitPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ZoomConfig::default();
        assert_eq!(config.min_scale(), 1.0);
        assert!(config.animate_reset());
        assert_eq!(config.reset_duration(), 0.3);
        assert_eq!(config.floor_exit(), FloorExitPolicy::SuppressUntilEnded);
        assert!(config.animates());
    }

    #[test]
    fn invalid_min_scale_falls_back() {
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert_eq!(ZoomConfig::default().with_min_scale(bad).min_scale(), 1.0);
        }
    }

    #[test]
    fn floor_below_rest_scale_is_raised() {
        assert_eq!(ZoomConfig::default().with_min_scale(0.5).min_scale(), 1.0);
        assert_eq!(ZoomConfig::default().with_min_scale(1.5).min_scale(), 1.5);
    }

    #[test]
    fn invalid_duration_disables_animation() {
        for bad in [-0.5, f64::NAN, f64::INFINITY, 0.0] {
            let config = ZoomConfig::default().with_reset_duration(bad);
            assert_eq!(config.reset_duration(), 0.0);
            assert!(!config.animates());
        }
    }

    #[test]
    fn animate_flag_off_disables_animation() {
        let config = ZoomConfig::default().with_animate_reset(false);
        assert!(!config.animates());
    }
}
