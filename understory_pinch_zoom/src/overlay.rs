// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay promotion: lift the zoomed copy out of its container and back again.
//!
//! While zoomed, the copy is reparented onto a top-level overlay surface so
//! that it draws above siblings and escapes its container's clip. It is placed
//! there at its current overlay-space frame and switched from layout-managed
//! to absolute placement. Demotion animates it back to that frame and returns
//! it to layout.
//!
//! The surface model is abstracted by [`OverlaySurface`]; hosts map it onto
//! whatever window or layer system they use.

use kurbo::{Affine, Rect};

use crate::animation::{Animator, RestAnimation};

/// Host capability: coordinate conversion and reparenting for the zoomed copy.
pub trait OverlaySurface {
    /// The element's current frame converted into overlay space.
    ///
    /// Returns `None` when there is no overlay surface to convert into.
    fn frame_in_overlay_space(&self) -> Option<Rect>;

    /// Reparent the copy onto the overlay at `frame`, with absolute placement.
    fn attach_to_overlay(&mut self, frame: Rect);

    /// Apply `transform` to the overlaid copy.
    fn set_overlay_transform(&mut self, transform: Affine);

    /// Remove the copy from the overlay and return it to layout-managed placement.
    fn detach_from_overlay(&mut self);
}

/// Where the zoomed copy currently lives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Placement {
    /// Laid out inline by the host layout system.
    #[default]
    Inline,
    /// Floating on the overlay at `frame`.
    Overlaid {
        /// Rest frame in overlay space.
        frame: Rect,
    },
    /// Animating back to `frame` before returning inline.
    Returning {
        /// Rest frame in overlay space.
        frame: Rect,
    },
}

/// Result of [`OverlayPromotion::demote`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoteOutcome {
    /// A return animation was started; call [`OverlayPromotion::finish_demote`] on completion.
    Started,
    /// The copy was returned inline immediately.
    Completed,
    /// A previous demotion is still animating; nothing was done.
    AlreadyResetting,
    /// The copy was not on the overlay.
    NotPromoted,
}

/// Tracks the copy's placement and drives promotion/demotion through the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlayPromotion {
    placement: Placement,
}

impl OverlayPromotion {
    /// Creates a promotion tracker with the copy inline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns `true` while the copy is on the overlay, including while returning.
    #[must_use]
    pub fn is_overlaid(&self) -> bool {
        !matches!(self.placement, Placement::Inline)
    }

    /// Returns `true` while a return animation is in flight.
    #[must_use]
    pub fn is_resetting(&self) -> bool {
        matches!(self.placement, Placement::Returning { .. })
    }

    /// The rest frame recorded at promotion, if the copy is on the overlay.
    #[must_use]
    pub fn rest_frame(&self) -> Option<Rect> {
        match self.placement {
            Placement::Inline => None,
            Placement::Overlaid { frame } | Placement::Returning { frame } => Some(frame),
        }
    }

    /// Move the copy onto the overlay at its current overlay-space frame.
    ///
    /// Without an overlay surface the frame degrades to [`Rect::ZERO`]. If the
    /// copy is already on the overlay this only returns the recorded frame.
    pub fn promote<H>(&mut self, host: &mut H) -> Rect
    where
        H: OverlaySurface + ?Sized,
    {
        if let Some(frame) = self.rest_frame() {
            return frame;
        }
        let frame = host.frame_in_overlay_space().unwrap_or(Rect::ZERO);
        host.attach_to_overlay(frame);
        self.placement = Placement::Overlaid { frame };
        tracing::debug!(?frame, "promoted to overlay");
        frame
    }

    /// Return the copy to its rest frame and, eventually, to inline placement.
    ///
    /// With `animated`, asks the host to animate from `from` over `duration`
    /// seconds and enters the returning state; the copy stays on the overlay
    /// until [`finish_demote`](Self::finish_demote). Otherwise the copy is reset
    /// and detached immediately. Calling this while a return animation is in
    /// flight does nothing.
    pub fn demote<H>(
        &mut self,
        host: &mut H,
        animated: bool,
        duration: f64,
        from: Affine,
    ) -> DemoteOutcome
    where
        H: OverlaySurface + Animator + ?Sized,
    {
        let frame = match self.placement {
            Placement::Inline => return DemoteOutcome::NotPromoted,
            Placement::Returning { .. } => return DemoteOutcome::AlreadyResetting,
            Placement::Overlaid { frame } => frame,
        };

        if animated {
            self.placement = Placement::Returning { frame };
            host.animate_to_rest(RestAnimation {
                duration,
                frame,
                from,
            });
            tracing::debug!(duration, "return animation started");
            DemoteOutcome::Started
        } else {
            self.detach(host);
            DemoteOutcome::Completed
        }
    }

    /// Complete an animated demotion: detach the copy and clear the returning state.
    ///
    /// Returns `false` if no return animation was in flight.
    pub fn finish_demote<H>(&mut self, host: &mut H) -> bool
    where
        H: OverlaySurface + ?Sized,
    {
        if !self.is_resetting() {
            return false;
        }
        self.detach(host);
        true
    }

    /// Detach immediately from any overlaid state, animating or not.
    ///
    /// Used on interruption and teardown. Returns `false` if already inline.
    pub fn force_inline<H>(&mut self, host: &mut H) -> bool
    where
        H: OverlaySurface + ?Sized,
    {
        if !self.is_overlaid() {
            return false;
        }
        self.detach(host);
        true
    }

    fn detach<H>(&mut self, host: &mut H)
    where
        H: OverlaySurface + ?Sized,
    {
        host.set_overlay_transform(Affine::IDENTITY);
        host.detach_from_overlay();
        self.placement = Placement::Inline;
        tracing::debug!("returned inline");
    }
}
