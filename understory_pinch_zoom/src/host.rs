// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::animation::Animator;
use crate::overlay::OverlaySurface;
use crate::scroll_lock::ScrollLockable;

/// How the image is fitted into the element's frame.
///
/// Mirrored unchanged onto the overlaid copy so that both render identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentFit {
    /// Stretch to fill, ignoring aspect ratio.
    Fill,
    /// Scale to fit entirely inside the frame, preserving aspect ratio.
    #[default]
    Contain,
    /// Scale to cover the frame, preserving aspect ratio.
    Cover,
    /// No scaling; centered.
    Center,
}

/// Everything a [`ZoomController`](crate::ZoomController) needs from its host.
///
/// Beyond the three capabilities (ancestor scroll locking, overlay surface,
/// animation), the host identifies the zoomable element and receives the
/// pass-through properties of the controller's public surface.
pub trait ZoomHost: ScrollLockable + OverlaySurface + Animator {
    /// Image payload shown by the element and its overlay copy.
    type Image;

    /// The zoomable element; the ancestor walk starts from here.
    fn element(&self) -> Self::Node;

    /// Enable or disable user interaction and the pinch, pan and rotation recognizers.
    fn set_interaction_enabled(&mut self, enabled: bool);

    /// Show `image` with `fit` on both the inline element and the overlay copy.
    fn mirror_content(&mut self, image: Option<&Self::Image>, fit: ContentFit);
}
