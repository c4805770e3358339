// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer baselines: turn cumulative recognizer readings into incremental deltas.
//!
//! Many gesture recognizers report values relative to the start of the gesture
//! (a total scale, a total translation, a total rotation) and let the consumer
//! "reset" that reference point. The controller expects incremental deltas and
//! tells the host via [`Handled`](crate::Handled) whether a delta was consumed.
//! These helpers track the reference point on the host side.
//!
//! ## Usage
//!
//! 1) Call `start` when the recognizer begins, with its initial reading.
//! 2) On each change, call `delta` to get the change since the baseline.
//! 3) If the controller consumed the delta, call `consume` with the same reading.
//!    Rejected deltas leave the baseline in place, so motion keeps accumulating.
//! 4) Call `end` when the recognizer finishes.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pinch_zoom::baseline::PinchBaseline;
//!
//! let mut pinch = PinchBaseline::default();
//! pinch.start(1.0);
//!
//! // Rejected by the controller: do not consume.
//! assert_eq!(pinch.delta(1.1), Some(1.1));
//!
//! // Further pinching is measured from the same baseline.
//! assert_eq!(pinch.delta(1.5), Some(1.5));
//! pinch.consume(1.5);
//!
//! // Next delta is relative to the consumed reading.
//! assert_eq!(pinch.delta(3.0), Some(2.0));
//! ```

use kurbo::Vec2;

/// Tracks the baseline of a cumulative pinch scale reading.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchBaseline {
    /// Reading the last consumed delta was measured against.
    pub baseline: Option<f64>,
}

impl PinchBaseline {
    /// Start tracking from the recognizer's initial reading (usually `1.0`).
    pub fn start(&mut self, reading: f64) {
        self.baseline = Some(reading);
    }

    /// Multiplicative change from the baseline to `reading`.
    ///
    /// Returns `None` when not tracking or when the baseline cannot divide.
    pub fn delta(&self, reading: f64) -> Option<f64> {
        let base = self.baseline?;
        if base > 0.0 && base.is_finite() {
            Some(reading / base)
        } else {
            None
        }
    }

    /// Mark `reading` as consumed; later deltas are measured from it.
    pub fn consume(&mut self, reading: f64) {
        if self.baseline.is_some() {
            self.baseline = Some(reading);
        }
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a pinch is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.baseline.is_some()
    }
}

/// Tracks the baseline of a cumulative pan translation reading.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanBaseline {
    /// Reading the last consumed delta was measured against.
    pub baseline: Option<Vec2>,
}

impl PanBaseline {
    /// Start tracking from the recognizer's initial reading (usually zero).
    pub fn start(&mut self, reading: Vec2) {
        self.baseline = Some(reading);
    }

    /// Translation from the baseline to `reading`.
    pub fn delta(&self, reading: Vec2) -> Option<Vec2> {
        self.baseline.map(|base| reading - base)
    }

    /// Mark `reading` as consumed.
    pub fn consume(&mut self, reading: Vec2) {
        if self.baseline.is_some() {
            self.baseline = Some(reading);
        }
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a pan is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.baseline.is_some()
    }
}

/// Tracks the baseline of a cumulative rotation reading, in radians.
#[derive(Debug, Clone, Default, Copy)]
pub struct RotationBaseline {
    /// Reading the last consumed delta was measured against.
    pub baseline: Option<f64>,
}

impl RotationBaseline {
    /// Start tracking from the recognizer's initial reading (usually `0.0`).
    pub fn start(&mut self, reading: f64) {
        self.baseline = Some(reading);
    }

    /// Rotation from the baseline to `reading`.
    pub fn delta(&self, reading: f64) -> Option<f64> {
        self.baseline.map(|base| reading - base)
    }

    /// Mark `reading` as consumed.
    pub fn consume(&mut self, reading: f64) {
        if self.baseline.is_some() {
            self.baseline = Some(reading);
        }
    }

    /// Stop tracking.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a rotation is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.baseline.is_some()
    }
}
