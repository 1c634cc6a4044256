//! # Reorder Coordinator
//!
//! A drag session tracks the visual order of the selection list while an
//! entry is being moved. When the drag ends the visual order is handed back
//! as a list of instance ids, which the selection adopts via
//! [`Selection::reorder`](crate::prompt::Selection::reorder).

use crate::prompt::segment::InstanceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    order: Vec<InstanceId>,
    dragging: usize,
    /// First visible list row when the drag started. Pointer rows map
    /// through this until the drag ends.
    scroll_offset: usize,
}

impl DragSession {
    /// Start dragging the entry at `index`. Returns `None` if out of range.
    pub fn begin(order: Vec<InstanceId>, index: usize) -> Option<Self> {
        if index >= order.len() {
            return None;
        }
        Some(Self {
            order,
            dragging: index,
            scroll_offset: 0,
        })
    }

    pub fn with_scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the dragged entry so it sits at `index` (clamped to the list).
    pub fn drag_to(&mut self, index: usize) {
        let target = index.min(self.order.len().saturating_sub(1));
        if target == self.dragging {
            return;
        }
        let id = self.order.remove(self.dragging);
        self.order.insert(target, id);
        self.dragging = target;
    }

    /// Current visual position of the dragged entry.
    pub fn dragging_index(&self) -> usize {
        self.dragging
    }

    pub fn dragged_id(&self) -> Option<InstanceId> {
        self.order.get(self.dragging).copied()
    }

    pub fn visual_order(&self) -> &[InstanceId] {
        &self.order
    }

    /// End the drag, yielding the visual order.
    pub fn finish(self) -> Vec<InstanceId> {
        self.order
    }
}
