// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Scale, translation and rotation of the zoomed copy relative to its rest placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Uniform scale factor. Always positive.
    pub scale: f64,
    /// Translation of the copy's center, in overlay space.
    pub translation: Vec2,
    /// Rotation about the copy's center, in radians.
    pub rotation: f64,
}

impl ZoomTransform {
    /// The rest transform: unit scale, no translation, no rotation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
        rotation: 0.0,
    };

    /// Returns `true` if this is exactly [`ZoomTransform::IDENTITY`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Build the overlay-space affine for a copy whose rest center is `center`.
    ///
    /// Scale and rotation act about the center; the translation is applied
    /// afterwards, so pans always move the copy in screen space regardless of
    /// how it has been rotated.
    #[must_use]
    pub fn to_affine(&self, center: Point) -> Affine {
        let c = center.to_vec2();
        Affine::translate(-c)
            .then_scale(self.scale)
            .then_rotate(self.rotation)
            .then_translate(c + self.translation)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Accumulates incremental gesture deltas into a [`ZoomTransform`].
///
/// The accumulated scale never drops to or below the configured floor through
/// [`apply_pinch`](Self::apply_pinch): such updates are rejected and the
/// transform is left unchanged. Pans and rotations only take effect while the
/// scale is above the floor.
///
/// ```
/// use kurbo::Vec2;
/// use understory_pinch_zoom::TransformAccumulator;
///
/// let mut acc = TransformAccumulator::new(1.2);
///
/// // 1.0 * 1.1 stays under the floor: rejected.
/// acc.apply_pinch(1.1);
/// assert_eq!(acc.scale(), 1.0);
///
/// // Panning at rest does nothing.
/// acc.apply_pan(Vec2::new(10.0, 0.0));
/// assert_eq!(acc.transform().translation, Vec2::ZERO);
///
/// acc.apply_pinch(1.5);
/// assert_eq!(acc.scale(), 1.5);
/// acc.apply_pan(Vec2::new(10.0, 0.0));
/// assert_eq!(acc.transform().translation, Vec2::new(10.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct TransformAccumulator {
    min_scale: f64,
    scale: f64,
    transform: ZoomTransform,
}

impl TransformAccumulator {
    /// Creates an accumulator at rest with the given scale floor.
    #[must_use]
    pub fn new(min_scale: f64) -> Self {
        Self {
            min_scale,
            scale: 1.0,
            transform: ZoomTransform::IDENTITY,
        }
    }

    /// The scale floor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Replaces the scale floor. The current transform is not touched.
    pub fn set_min_scale(&mut self, min_scale: f64) {
        self.min_scale = min_scale;
    }

    /// The accumulated scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Returns `true` while the accumulated scale is above the floor.
    #[must_use]
    pub fn is_above_floor(&self) -> bool {
        self.scale > self.min_scale
    }

    /// Returns `true` if [`apply_pinch`](Self::apply_pinch) would accept `delta`.
    #[must_use]
    pub fn accepts_pinch(&self, delta: f64) -> bool {
        let candidate = self.scale * delta;
        candidate.is_finite() && candidate > self.min_scale
    }

    /// Multiplies the scale by `delta` unless that would reach the floor.
    pub fn apply_pinch(&mut self, delta: f64) -> ZoomTransform {
        if self.accepts_pinch(delta) {
            self.scale *= delta;
            // Compose incrementally, matching the incremental input.
            self.transform.scale *= delta;
        }
        self.transform
    }

    /// Adds `delta` to the translation while above the floor.
    pub fn apply_pan(&mut self, delta: Vec2) -> ZoomTransform {
        if self.is_above_floor() && delta.is_finite() {
            self.transform.translation += delta;
        }
        self.transform
    }

    /// Adds `radians` to the rotation while above the floor.
    pub fn apply_rotate(&mut self, radians: f64) -> ZoomTransform {
        if self.is_above_floor() && radians.is_finite() {
            self.transform.rotation += radians;
        }
        self.transform
    }

    /// Returns to the identity transform with scale `1.0`.
    pub fn reset(&mut self) -> ZoomTransform {
        self.scale = 1.0;
        self.transform = ZoomTransform::IDENTITY;
        self.transform
    }
}
