// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pinch Zoom: a headless pinch/pan/rotate zoom interaction.
//!
//! The user pinches an image to zoom it, pans to move it, rotates it while
//! zoomed, and on release it animates back into place. While zoomed, the image
//! is shown through a copy lifted onto a top-level overlay so that it draws
//! above its siblings, and every scrollable ancestor has scrolling disabled so
//! that zooming and scrolling do not fight.
//!
//! This crate owns the policy, not the plumbing:
//!
//! - [`ZoomController`]: the state machine. Feed it [`GestureEvent`]s from
//!   three independent recognizers; it produces one coherent transform.
//! - [`TransformAccumulator`]: scale/translation/rotation with a scale floor.
//! - [`scroll_lock`]: capture and restore ancestor scroll flags.
//! - [`overlay`]: promote the copy onto the overlay and demote it back.
//! - [`baseline`]: helpers for recognizers that report cumulative values.
//!
//! It does **not** recognize gestures, lay out views, run animations, or own
//! a window. Hosts provide those through the [`ZoomHost`] trait and its
//! capability supertraits [`ScrollLockable`], [`OverlaySurface`] and
//! [`Animator`].
//!
//! ## Incremental deltas
//!
//! Every delta passed to [`ZoomController::handle`] is relative to the last
//! delta the controller *consumed*. The returned [`Handled`] tells the host
//! whether to reset its recognizer baseline. A pinch rejected by the floor
//! keeps its baseline, so continued pinching accumulates until it clears the
//! floor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Rect};
//! use understory_pinch_zoom::{
//!     Animator, ContentFit, GestureEvent, GesturePhase, Handled, InteractionState,
//!     OverlaySurface, RestAnimation, ScrollLockable, ZoomConfig, ZoomController, ZoomHost,
//! };
//!
//! /// Node 0 is a scroll view containing the image, node 1.
//! #[derive(Default)]
//! struct Host {
//!     scroll_enabled: bool,
//!     overlaid: bool,
//!     animating: bool,
//! }
//!
//! impl ScrollLockable for Host {
//!     type Node = u32;
//!     fn parent(&self, node: &u32) -> Option<u32> { (*node == 1).then_some(0) }
//!     fn scroll_enabled(&self, node: &u32) -> Option<bool> {
//!         (*node == 0).then_some(self.scroll_enabled)
//!     }
//!     fn set_scroll_enabled(&mut self, _node: &u32, enabled: bool) {
//!         self.scroll_enabled = enabled;
//!     }
//! }
//!
//! impl OverlaySurface for Host {
//!     fn frame_in_overlay_space(&self) -> Option<Rect> {
//!         Some(Rect::new(0.0, 100.0, 320.0, 340.0))
//!     }
//!     fn attach_to_overlay(&mut self, _frame: Rect) { self.overlaid = true; }
//!     fn set_overlay_transform(&mut self, _transform: Affine) {}
//!     fn detach_from_overlay(&mut self) { self.overlaid = false; }
//! }
//!
//! impl Animator for Host {
//!     fn animate_to_rest(&mut self, _animation: RestAnimation) { self.animating = true; }
//! }
//!
//! impl ZoomHost for Host {
//!     type Image = ();
//!     fn element(&self) -> u32 { 1 }
//!     fn set_interaction_enabled(&mut self, _enabled: bool) {}
//!     fn mirror_content(&mut self, _image: Option<&()>, _fit: ContentFit) {}
//! }
//!
//! let host = Host { scroll_enabled: true, ..Host::default() };
//! let mut zoom = ZoomController::new(host, ZoomConfig::default().with_min_scale(1.2));
//!
//! // Still under the floor: rejected, nothing happens.
//! let handled = zoom.handle(GestureEvent::pinch(GesturePhase::Began, 1.1));
//! assert_eq!(handled, Handled::Rejected);
//! assert_eq!(zoom.state(), InteractionState::AtRest);
//!
//! // The recognizer kept its baseline, so the next reading clears the floor.
//! zoom.handle(GestureEvent::pinch(GesturePhase::Changed, 1.43));
//! assert_eq!(zoom.state(), InteractionState::Zooming);
//! assert!(zoom.host().overlaid);
//! assert!(!zoom.host().scroll_enabled);
//!
//! // Lifting the fingers restores scrolling and starts the return animation.
//! zoom.handle(GestureEvent::pinch(GesturePhase::Ended, 1.0));
//! assert_eq!(zoom.state(), InteractionState::Resetting);
//! assert!(zoom.host().scroll_enabled);
//!
//! // The host reports the animation finished.
//! zoom.finish_reset();
//! assert_eq!(zoom.state(), InteractionState::AtRest);
//! assert_eq!(zoom.scale(), 1.0);
//! assert!(!zoom.host().overlaid);
//! ```
//!
//! ## Threading
//!
//! Gesture delivery and animation completion are expected on one thread.
//! The controller takes `&mut self` everywhere; the only gate it needs is the
//! "returning to rest" state, which drops input until [`ZoomController::finish_reset`].
//!
//! ## Logging
//!
//! State transitions and side effects are reported through [`tracing`] at
//! `debug` level and per-update deltas at `trace` level. No subscriber is
//! installed by this crate.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod baseline;
pub mod overlay;
pub mod scroll_lock;

mod animation;
mod config;
mod controller;
mod gesture;
mod host;
mod transform;

pub use animation::{Animator, RestAnimation};
pub use config::{FloorExitPolicy, ZoomConfig};
pub use controller::{InteractionState, ZoomController};
pub use gesture::{GestureEvent, GestureKind, GesturePhase, Handled};
pub use host::{ContentFit, ZoomHost};
pub use overlay::{DemoteOutcome, OverlayPromotion, OverlaySurface, Placement};
pub use scroll_lock::{AncestorScrollLock, ScrollLockable};
pub use transform::{TransformAccumulator, ZoomTransform};
