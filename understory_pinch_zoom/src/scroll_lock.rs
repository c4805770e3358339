// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor scroll locking: disable scrolling on every scrollable ancestor while zoomed.
//!
//! The walk does not assume any concrete hierarchy. Hosts implement
//! [`ScrollLockable`] over their own node handles (box tree ids, ECS entities,
//! retained widget pointers); an ancestor takes part in locking when
//! [`ScrollLockable::scroll_enabled`] returns `Some`.
//!
//! ```
//! use understory_pinch_zoom::scroll_lock::{AncestorScrollLock, ScrollLockable};
//!
//! // Node 0 is a scroll view, 1 a plain container, 2 the zoomable image.
//! struct Chain { scroll: [Option<bool>; 3] }
//!
//! impl ScrollLockable for Chain {
//!     type Node = usize;
//!     fn parent(&self, node: &usize) -> Option<usize> { node.checked_sub(1) }
//!     fn scroll_enabled(&self, node: &usize) -> Option<bool> { self.scroll[*node] }
//!     fn set_scroll_enabled(&mut self, node: &usize, enabled: bool) {
//!         self.scroll[*node] = Some(enabled);
//!     }
//! }
//!
//! let mut chain = Chain { scroll: [Some(true), None, None] };
//! let mut lock = AncestorScrollLock::new();
//!
//! lock.engage(&mut chain, &2);
//! assert_eq!(chain.scroll[0], Some(false));
//!
//! lock.release(&mut chain);
//! assert_eq!(chain.scroll[0], Some(true));
//! ```

use smallvec::SmallVec;

/// Host capability: parent lookup plus a per-node scroll-enabled flag.
pub trait ScrollLockable {
    /// Node handle.
    type Node: Clone + PartialEq;

    /// Parent of `node`, or `None` at the root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Scroll-enabled flag of `node`, or `None` if `node` does not scroll.
    fn scroll_enabled(&self, node: &Self::Node) -> Option<bool>;

    /// Set the scroll-enabled flag of a scrollable `node`.
    fn set_scroll_enabled(&mut self, node: &Self::Node, enabled: bool);
}

/// Records and restores the scroll-enabled flags of scrollable ancestors.
///
/// Records live for a single zoom episode: [`engage`](Self::engage) fills them,
/// [`release`](Self::release) restores and clears them. Engaging twice without
/// a release does not record the already-disabled flags a second time.
#[derive(Clone, Debug)]
pub struct AncestorScrollLock<K> {
    records: SmallVec<[(K, bool); 4]>,
    engaged: bool,
}

impl<K> Default for AncestorScrollLock<K> {
    fn default() -> Self {
        Self {
            records: SmallVec::new(),
            engaged: false,
        }
    }
}

impl<K: Clone + PartialEq> AncestorScrollLock<K> {
    /// Creates an unengaged lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between [`engage`](Self::engage) and [`release`](Self::release).
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Number of ancestors whose scrolling is currently locked.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if `node` was locked by this episode.
    #[must_use]
    pub fn is_locked(&self, node: &K) -> bool {
        self.records.iter().any(|(k, _)| k == node)
    }

    /// Disable scrolling on every scrollable ancestor of `starting_from`.
    ///
    /// The starting node itself is not locked. Calling this again before
    /// [`release`](Self::release) is a no-op.
    pub fn engage<H>(&mut self, host: &mut H, starting_from: &K)
    where
        H: ScrollLockable<Node = K> + ?Sized,
    {
        if self.engaged {
            return;
        }
        self.engaged = true;

        let mut cursor = host.parent(starting_from);
        while let Some(node) = cursor {
            if let Some(enabled) = host.scroll_enabled(&node) {
                host.set_scroll_enabled(&node, false);
                self.records.push((node.clone(), enabled));
            }
            cursor = host.parent(&node);
        }
        tracing::debug!(locked = self.records.len(), "ancestor scrolling locked");
    }

    /// Restore every recorded flag and clear the records.
    ///
    /// Safe to call when not engaged.
    pub fn release<H>(&mut self, host: &mut H)
    where
        H: ScrollLockable<Node = K> + ?Sized,
    {
        if !self.engaged {
            return;
        }
        let restored = self.records.len();
        // Innermost ancestors were captured first; restore outermost first.
        for (node, enabled) in self.records.drain(..).rev() {
            host.set_scroll_enabled(&node, enabled);
        }
        self.engaged = false;
        tracing::debug!(restored, "ancestor scrolling restored");
    }
}
