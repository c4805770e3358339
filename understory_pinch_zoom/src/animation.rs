// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

/// A return-to-rest transition for the overlaid copy.
///
/// The host animates the copy from `from` to the identity transform, with its
/// center moving back to the center of `frame`, over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestAnimation {
    /// Duration in seconds.
    pub duration: f64,
    /// Rest frame in overlay space.
    pub frame: Rect,
    /// Overlay transform at the moment the animation starts.
    pub from: Affine,
}

/// Host capability: run a return-to-rest animation.
///
/// When the animation finishes, the host must call
/// [`ZoomController::finish_reset`](crate::ZoomController::finish_reset).
/// Until then the controller ignores gesture input.
pub trait Animator {
    /// Start animating the overlaid copy back to rest.
    fn animate_to_rest(&mut self, animation: RestAnimation);
}
