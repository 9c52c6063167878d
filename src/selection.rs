//! Selection state machine for the file list.
//!
//! The click handling that usually lives inline in UI event handlers is
//! modeled here as a pure reducer: `(state, ordered ids, click) -> state`.
//! Frontends translate pointer events into [`Click`] values and replace
//! their state wholesale with the result, which keeps the semantics
//! testable without any UI harness.
//!
//! The state is the tuple (`selected`, `active`, `anchor`):
//!
//! - a **plain click** selects exactly the clicked file and focuses it
//! - a **ctrl/cmd click** toggles the clicked file in and out of the
//!   selection without moving focus
//! - a **shift click** replaces the selection with the contiguous range
//!   between the anchor and the clicked file; the anchor stays put so
//!   repeated shift-clicks pivot on the same origin
//!
//! Indices are resolved against the caller's `order` slice on every call,
//! never cached, so list mutations between gestures cannot corrupt a
//! range.

use std::collections::HashSet;

use crate::session::FileId;

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Click {
    /// Ctrl or Cmd: toggle membership.
    pub ctrl: bool,
    /// Shift: range-select from the anchor.
    pub shift: bool,
}

impl Click {
    /// No modifiers.
    pub const PLAIN: Self = Self {
        ctrl: false,
        shift: false,
    };

    /// Ctrl/Cmd held.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };

    /// Shift held.
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// Which files are selected, which one is active, and where the range
/// anchor sits.
///
/// Invariants maintained by [`Session`](crate::session::Session):
/// `selected` is always a subset of the live file list, and `active` is
/// `None` exactly when the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Ids of the selected files.
    pub selected: HashSet<FileId>,

    /// The file currently previewed and exported singly.
    pub active: Option<FileId>,

    /// List index of the most recent plain/ctrl click; the pivot for
    /// shift-click ranges. `None` until the first click.
    pub anchor: Option<usize>,
}

impl SelectionState {
    /// Creates the empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one click against the current list order and returns the
    /// next state.
    ///
    /// `order` must be the live ordering of the file list; indices are
    /// resolved fresh on every call. Ctrl wins when both modifiers are
    /// held. A click on an id that is not in `order`, or a shift-click
    /// before any anchor exists, leaves the state unchanged.
    #[must_use]
    pub fn click(&self, order: &[FileId], target: FileId, click: Click) -> Self {
        let Some(index) = order.iter().position(|id| *id == target) else {
            return self.clone();
        };

        if click.ctrl {
            let mut selected = self.selected.clone();
            if !selected.remove(&target) {
                selected.insert(target);
            }
            return Self {
                selected,
                active: self.active,
                anchor: Some(index),
            };
        }

        if click.shift {
            let Some(anchor) = self.anchor else {
                return self.clone();
            };
            // A deletion may have shortened the list since the anchor was
            // set; resolve it against the current bounds.
            let anchor = anchor.min(order.len() - 1);
            let (start, end) = if anchor <= index {
                (anchor, index)
            } else {
                (index, anchor)
            };
            let selected = order[start..=end].iter().copied().collect();
            return Self {
                selected,
                active: self.active,
                anchor: self.anchor,
            };
        }

        Self {
            selected: HashSet::from([target]),
            active: Some(target),
            anchor: Some(index),
        }
    }

    /// Rebuilds the state after files were removed from the list.
    ///
    /// Dropped ids leave the selection. If the active file is gone, the
    /// first survivor in list order takes its place; an emptied list
    /// leaves nothing active.
    #[must_use]
    pub fn after_deletion(&self, remaining: &[FileId]) -> Self {
        let selected: HashSet<FileId> = self
            .selected
            .iter()
            .copied()
            .filter(|id| remaining.contains(id))
            .collect();

        let active = match self.active {
            Some(id) if remaining.contains(&id) => Some(id),
            _ => remaining.first().copied(),
        };

        Self {
            selected,
            active,
            anchor: self.anchor,
        }
    }
}
