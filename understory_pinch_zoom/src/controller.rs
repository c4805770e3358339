// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom interaction state machine.
//!
//! ## States
//!
//! - [`InteractionState::AtRest`]: the copy is inline, ancestors scroll normally.
//! - [`InteractionState::Zooming`]: the copy floats on the overlay with the
//!   accumulated transform, ancestor scrolling is locked.
//! - [`InteractionState::Resetting`]: the return animation is in flight and
//!   all gesture input is ignored.
//!
//! ## Transitions
//!
//! - A pinch that lifts the scale above the floor moves `AtRest → Zooming`,
//!   locking ancestor scrolling and promoting the copy exactly once.
//! - Any gesture reporting `Ended`/`Cancelled`, or a pinch that would take the
//!   scale back to the floor, moves `Zooming → Resetting` (or straight to
//!   `AtRest` when resets are not animated). Ancestor scrolling is restored at
//!   that moment.
//! - [`ZoomController::finish_reset`], called by the host when its animation
//!   completes, moves `Resetting → AtRest`.
//!
//! Repeated reset requests collapse: only the first one in an episode starts
//! an animation.

use core::fmt;

use kurbo::{Affine, Point, Vec2};

use crate::config::{FloorExitPolicy, ZoomConfig};
use crate::gesture::{GestureEvent, GestureKind, Handled};
use crate::host::{ContentFit, ZoomHost};
use crate::overlay::{DemoteOutcome, OverlayPromotion};
use crate::scroll_lock::AncestorScrollLock;
use crate::transform::{TransformAccumulator, ZoomTransform};

/// Interaction state of a [`ZoomController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Not zoomed.
    #[default]
    AtRest,
    /// Zoomed, promoted to the overlay, ancestor scrolling locked.
    Zooming,
    /// Returning to rest; gesture input is ignored.
    Resetting,
}

/// Coordinates pinch, pan and rotation streams into one zoom transform.
///
/// The controller owns its host. Dropping the controller mid-episode still
/// restores ancestor scrolling and returns the copy inline.
pub struct ZoomController<H: ZoomHost> {
    host: H,
    config: ZoomConfig,
    accumulator: TransformAccumulator,
    scroll_lock: AncestorScrollLock<H::Node>,
    overlay: OverlayPromotion,
    state: InteractionState,
    enabled: bool,
    pinch_suppressed: bool,
    image: Option<H::Image>,
    content_fit: ContentFit,
}

impl<H: ZoomHost> ZoomController<H> {
    /// Creates an enabled controller at rest.
    pub fn new(host: H, config: ZoomConfig) -> Self {
        Self {
            host,
            accumulator: TransformAccumulator::new(config.min_scale()),
            config,
            scroll_lock: AncestorScrollLock::new(),
            overlay: OverlayPromotion::new(),
            state: InteractionState::AtRest,
            enabled: true,
            pinch_suppressed: false,
            image: None,
            content_fit: ContentFit::default(),
        }
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Current transform relative to the rest placement.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.accumulator.transform()
    }

    /// Current accumulated scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.accumulator.scale()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The new floor applies to the next gesture update; an episode in
    /// progress is not interrupted.
    pub fn set_config(&mut self, config: ZoomConfig) {
        self.accumulator.set_min_scale(config.min_scale());
        self.config = config;
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    ///
    /// Hosts must not reparent the copy or touch the locked ancestors'
    /// scroll flags behind the controller's back.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Number of ancestors whose scrolling is currently locked.
    #[must_use]
    pub fn locked_ancestors(&self) -> usize {
        self.scroll_lock.locked_count()
    }

    /// Returns `true` while the copy is on the overlay.
    #[must_use]
    pub fn is_overlaid(&self) -> bool {
        self.overlay.is_overlaid()
    }

    /// Returns `true` if the interaction is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the whole interaction.
    ///
    /// Forwards to [`ZoomHost::set_interaction_enabled`]. Disabling while
    /// zoomed starts the return to rest, as the host's recognizers are
    /// cancelled; a return already in flight is left to complete.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.host.set_interaction_enabled(enabled);
        tracing::debug!(enabled, "zoom interaction toggled");
        if !enabled {
            self.pinch_suppressed = false;
            self.begin_reset();
        }
    }

    /// The displayed image.
    #[must_use]
    pub fn image(&self) -> Option<&H::Image> {
        self.image.as_ref()
    }

    /// Sets the displayed image on the element and its overlay copy.
    pub fn set_image(&mut self, image: Option<H::Image>) {
        self.image = image;
        self.host.mirror_content(self.image.as_ref(), self.content_fit);
    }

    /// How the image is fitted into the element.
    #[must_use]
    pub fn content_fit(&self) -> ContentFit {
        self.content_fit
    }

    /// Sets the content fit on the element and its overlay copy.
    pub fn set_content_fit(&mut self, fit: ContentFit) {
        self.content_fit = fit;
        self.host.mirror_content(self.image.as_ref(), fit);
    }

    /// Feed one gesture update.
    ///
    /// Reset the recognizer's incremental baseline only when this returns
    /// [`Handled::Consumed`].
    pub fn handle(&mut self, event: GestureEvent) -> Handled {
        let phase = event.phase();
        if phase.is_terminal() && event.kind() == GestureKind::Pinch {
            self.pinch_suppressed = false;
        }
        if !self.enabled || self.state == InteractionState::Resetting {
            return Handled::Ignored;
        }
        if phase.is_terminal() {
            self.begin_reset();
            return Handled::Ignored;
        }

        match event {
            GestureEvent::Pinch { scale, .. } => self.pinch(scale),
            GestureEvent::Pan { translation, .. } => self.pan(translation),
            GestureEvent::Rotate { radians, .. } => self.rotate(radians),
        }
    }

    /// Completes an animated return to rest.
    ///
    /// Call this from the host's animation completion. Returns `false` if no
    /// return was in flight; duplicate completions are harmless.
    pub fn finish_reset(&mut self) -> bool {
        if self.state != InteractionState::Resetting {
            return false;
        }
        self.overlay.finish_demote(&mut self.host);
        self.settle();
        true
    }

    /// Abandon the current episode immediately, without animating.
    ///
    /// Restores ancestor scrolling, returns the copy inline and resets the
    /// transform, whatever the current state. Returns `false` if there was
    /// nothing to undo. Also runs when the controller is dropped.
    pub fn interrupt(&mut self) -> bool {
        let active = self.state != InteractionState::AtRest
            || self.overlay.is_overlaid()
            || self.scroll_lock.is_engaged();
        self.pinch_suppressed = false;
        if !active {
            return false;
        }
        self.scroll_lock.release(&mut self.host);
        self.overlay.force_inline(&mut self.host);
        self.settle();
        tracing::debug!("zoom episode interrupted");
        true
    }

    fn pinch(&mut self, scale: f64) -> Handled {
        if self.pinch_suppressed || !scale.is_finite() || scale <= 0.0 {
            return Handled::Ignored;
        }
        if !self.accumulator.accepts_pinch(scale) {
            if self.state == InteractionState::Zooming {
                tracing::debug!(scale, "pinch fell to the floor");
                if self.config.floor_exit() == FloorExitPolicy::SuppressUntilEnded {
                    self.pinch_suppressed = true;
                }
                self.begin_reset();
            }
            return Handled::Rejected;
        }

        self.accumulator.apply_pinch(scale);
        if self.state == InteractionState::AtRest {
            self.enter_zooming();
        }
        self.push_transform();
        tracing::trace!(scale = self.accumulator.scale(), "pinch applied");
        Handled::Consumed
    }

    fn pan(&mut self, translation: Vec2) -> Handled {
        if !self.can_move() || !translation.is_finite() {
            return Handled::Ignored;
        }
        self.accumulator.apply_pan(translation);
        self.push_transform();
        tracing::trace!(?translation, "pan applied");
        Handled::Consumed
    }

    fn rotate(&mut self, radians: f64) -> Handled {
        if !self.can_move() || !radians.is_finite() {
            return Handled::Ignored;
        }
        self.accumulator.apply_rotate(radians);
        self.push_transform();
        tracing::trace!(radians, "rotation applied");
        Handled::Consumed
    }

    /// Pan and rotation only apply to a zoomed copy above the floor.
    fn can_move(&self) -> bool {
        self.state == InteractionState::Zooming && self.accumulator.is_above_floor()
    }

    fn enter_zooming(&mut self) {
        let element = self.host.element();
        self.scroll_lock.engage(&mut self.host, &element);
        let frame = self.overlay.promote(&mut self.host);
        self.state = InteractionState::Zooming;
        tracing::debug!(?frame, scale = self.accumulator.scale(), "zooming");
    }

    /// Start the return to rest. Does nothing unless zooming.
    fn begin_reset(&mut self) {
        if self.state != InteractionState::Zooming {
            return;
        }
        let from = self.overlay_affine();
        self.scroll_lock.release(&mut self.host);
        let outcome = self.overlay.demote(
            &mut self.host,
            self.config.animates(),
            self.config.reset_duration(),
            from,
        );
        match outcome {
            DemoteOutcome::Started => {
                self.state = InteractionState::Resetting;
                tracing::debug!("resetting");
            }
            DemoteOutcome::Completed | DemoteOutcome::NotPromoted => self.settle(),
            DemoteOutcome::AlreadyResetting => {}
        }
    }

    fn settle(&mut self) {
        self.accumulator.reset();
        self.state = InteractionState::AtRest;
        tracing::debug!("at rest");
    }

    fn push_transform(&mut self) {
        let affine = self.overlay_affine();
        self.host.set_overlay_transform(affine);
    }

    fn overlay_affine(&self) -> Affine {
        let center = self
            .overlay
            .rest_frame()
            .map(|frame| frame.center())
            .unwrap_or(Point::ZERO);
        self.accumulator.transform().to_affine(center)
    }
}

impl<H: ZoomHost> fmt::Debug for ZoomController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("transform", &self.accumulator.transform())
            .field("overlay", &self.overlay.placement())
            .field("locked_ancestors", &self.scroll_lock.locked_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<H: ZoomHost> Drop for ZoomController<H> {
    fn drop(&mut self) {
        if self.interrupt() {
            tracing::warn!("zoom controller dropped mid-episode; ancestor scrolling restored");
        }
    }
}
