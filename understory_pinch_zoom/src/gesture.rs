// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture input consumed by [`ZoomController`](crate::ZoomController).
//!
//! Every delta carried by a [`GestureEvent`] is *incremental*: it is the change
//! since the last delta the controller consumed, never a running total from the
//! start of the gesture. Hosts whose recognizers report cumulative values can
//! use the helpers in [`crate::baseline`] to produce incremental deltas.

use kurbo::Vec2;

/// Lifecycle phase of a continuous gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The recognizer started tracking the gesture.
    Began,
    /// The gesture moved.
    Changed,
    /// The user lifted their fingers.
    Ended,
    /// The system or host cancelled the gesture.
    ///
    /// Treated exactly like [`GesturePhase::Ended`].
    Cancelled,
}

impl GesturePhase {
    /// Returns `true` for phases that carry a delta to apply.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }

    /// Returns `true` for phases that finish the gesture.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// The three gesture streams the controller understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Two-finger pinch.
    Pinch,
    /// Single or multi-finger pan.
    Pan,
    /// Two-finger rotation.
    Rotate,
}

/// One update from a gesture stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pinch update with a multiplicative scale factor.
    Pinch {
        /// Gesture phase.
        phase: GesturePhase,
        /// Scale factor since the last consumed pinch delta (`1.0` means no change).
        scale: f64,
    },
    /// Pan update with a translation in overlay space.
    Pan {
        /// Gesture phase.
        phase: GesturePhase,
        /// Translation since the last consumed pan delta.
        translation: Vec2,
    },
    /// Rotation update in radians.
    Rotate {
        /// Gesture phase.
        phase: GesturePhase,
        /// Rotation since the last consumed rotation delta.
        radians: f64,
    },
}

impl GestureEvent {
    /// Pinch event.
    #[must_use]
    pub const fn pinch(phase: GesturePhase, scale: f64) -> Self {
        Self::Pinch { phase, scale }
    }

    /// Pan event.
    #[must_use]
    pub const fn pan(phase: GesturePhase, translation: Vec2) -> Self {
        Self::Pan { phase, translation }
    }

    /// Rotation event.
    #[must_use]
    pub const fn rotate(phase: GesturePhase, radians: f64) -> Self {
        Self::Rotate { phase, radians }
    }

    /// The phase of this event.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        match *self {
            Self::Pinch { phase, .. } | Self::Pan { phase, .. } | Self::Rotate { phase, .. } => {
                phase
            }
        }
    }

    /// The stream this event belongs to.
    #[must_use]
    pub const fn kind(&self) -> GestureKind {
        match self {
            Self::Pinch { .. } => GestureKind::Pinch,
            Self::Pan { .. } => GestureKind::Pan,
            Self::Rotate { .. } => GestureKind::Rotate,
        }
    }
}

/// What the controller did with a [`GestureEvent`].
///
/// Hosts reset their recognizer's incremental baseline only for
/// [`Handled::Consumed`]. A rejected delta keeps the baseline so that further
/// motion accumulates on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handled {
    /// The delta was applied to the transform.
    Consumed,
    /// The delta was refused by the scale floor policy.
    Rejected,
    /// The event had no effect: the controller is disabled, resetting, or the
    /// gesture does not apply in the current state.
    Ignored,
}

impl Handled {
    /// Returns `true` if the host should reset its recognizer baseline.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_classification() {
        assert!(GesturePhase::Began.is_active());
        assert!(GesturePhase::Changed.is_active());
        assert!(!GesturePhase::Ended.is_active());
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
    }

    #[test]
    fn event_accessors() {
        let ev = GestureEvent::pan(GesturePhase::Changed, Vec2::new(1.0, 2.0));
        assert_eq!(ev.kind(), GestureKind::Pan);
        assert_eq!(ev.phase(), GesturePhase::Changed);

        let ev = GestureEvent::rotate(GesturePhase::Ended, 0.5);
        assert_eq!(ev.kind(), GestureKind::Rotate);
        assert_eq!(ev.phase(), GesturePhase::Ended);
    }
}
