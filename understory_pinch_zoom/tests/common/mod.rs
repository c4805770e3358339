// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared mock host for controller integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Affine, Rect};
use understory_pinch_zoom::{
    Animator, ContentFit, OverlaySurface, RestAnimation, ScrollLockable, ZoomHost,
};

/// Observable host state, shared so tests can inspect it after the controller is dropped.
#[derive(Debug, Default)]
pub(crate) struct HostState {
    /// Scroll flag per node; node `i` is the parent of node `i + 1`.
    pub(crate) scroll: Vec<Option<bool>>,
    pub(crate) overlay_frame: Option<Rect>,
    pub(crate) attached: Option<Rect>,
    pub(crate) attach_count: usize,
    pub(crate) detach_count: usize,
    pub(crate) scroll_writes: usize,
    pub(crate) transforms: Vec<Affine>,
    pub(crate) animations: Vec<RestAnimation>,
    pub(crate) interaction_enabled: Vec<bool>,
    pub(crate) mirrored: Vec<(Option<String>, ContentFit)>,
}

#[derive(Debug, Clone)]
pub(crate) struct MockHost {
    pub(crate) state: Rc<RefCell<HostState>>,
}

impl MockHost {
    /// A chain of nodes ending in the zoomable element.
    pub(crate) fn new(scroll: Vec<Option<bool>>, overlay_frame: Option<Rect>) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                scroll,
                overlay_frame,
                ..HostState::default()
            })),
        }
    }

    /// Root scroll view, plain container, scroll view, then the element.
    pub(crate) fn nested() -> Self {
        Self::new(
            vec![Some(true), None, Some(true), None],
            Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
        )
    }

    pub(crate) fn state(&self) -> std::cell::Ref<'_, HostState> {
        self.state.borrow()
    }
}

impl ScrollLockable for MockHost {
    type Node = usize;

    fn parent(&self, node: &usize) -> Option<usize> {
        node.checked_sub(1)
    }

    fn scroll_enabled(&self, node: &usize) -> Option<bool> {
        self.state.borrow().scroll.get(*node).copied().flatten()
    }

    fn set_scroll_enabled(&mut self, node: &usize, enabled: bool) {
        let mut state = self.state.borrow_mut();
        state.scroll[*node] = Some(enabled);
        state.scroll_writes += 1;
    }
}

impl OverlaySurface for MockHost {
    fn frame_in_overlay_space(&self) -> Option<Rect> {
        self.state.borrow().overlay_frame
    }

    fn attach_to_overlay(&mut self, frame: Rect) {
        let mut state = self.state.borrow_mut();
        state.attached = Some(frame);
        state.attach_count += 1;
    }

    fn set_overlay_transform(&mut self, transform: Affine) {
        self.state.borrow_mut().transforms.push(transform);
    }

    fn detach_from_overlay(&mut self) {
        let mut state = self.state.borrow_mut();
        state.attached = None;
        state.detach_count += 1;
    }
}

impl Animator for MockHost {
    fn animate_to_rest(&mut self, animation: RestAnimation) {
        self.state.borrow_mut().animations.push(animation);
    }
}

impl ZoomHost for MockHost {
    type Image = String;

    fn element(&self) -> usize {
        self.state.borrow().scroll.len() - 1
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.state.borrow_mut().interaction_enabled.push(enabled);
    }

    fn mirror_content(&mut self, image: Option<&String>, fit: ContentFit) {
        self.state.borrow_mut().mirrored.push((image.cloned(), fit));
    }
}
