//! # Selection List
//!
//! The ordered composition the user is building. Order is the left-to-right
//! order of the generated prompt. Instances are located only by their
//! [`InstanceId`], which survives reordering.
//!
//! Every operation that references something missing (unknown definition id,
//! unknown instance id, a reorder that is not a permutation of the current
//! ids) is a silent no-op. The return value tells the caller whether anything
//! changed.

use crate::prompt::catalog;
use crate::prompt::segment::{InstanceId, SegmentColor, SegmentInstance, StyleAttr};
use std::collections::HashSet;

/// Definition ids of the composition shown at startup: `user@host dir $`.
pub const DEFAULT_COMPOSITION: [&str; 7] = [
    "user",
    "at-symbol",
    "host-short",
    "space",
    "path-base",
    "space",
    "char-dollar",
];

#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Vec<SegmentInstance>,
    next_id: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup composition, with bold on the username and prompt glyph
    /// and dim on the separators.
    pub fn seeded() -> Self {
        let mut selection = Self::from_ids(DEFAULT_COMPOSITION);
        for item in &mut selection.items {
            match item.id() {
                "user" | "char-dollar" => item.styles.bold = true,
                "at-symbol" | "colon" => item.styles.dim = true,
                _ => {}
            }
        }
        selection
    }

    /// Build a composition from definition ids. Unknown ids are skipped.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.add(id.as_ref());
        }
        selection
    }

    fn fresh_id(&mut self) -> InstanceId {
        self.next_id += 1;
        InstanceId(self.next_id)
    }

    /// Append a new unstyled instance of `definition_id`.
    pub fn add(&mut self, definition_id: &str) -> Option<InstanceId> {
        let Some(definition) = catalog::find(definition_id) else {
            log::debug!("add: unknown definition id {definition_id:?}");
            return None;
        };
        let id = self.fresh_id();
        self.items.push(SegmentInstance::from_definition(definition, id));
        log::debug!("add: {definition_id} as {id}");
        Some(id)
    }

    pub fn remove(&mut self, instance_id: InstanceId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.instance_id != instance_id);
        let removed = self.items.len() != before;
        if !removed {
            log::debug!("remove: unknown instance {instance_id}");
        }
        removed
    }

    /// Rearrange the sequence to follow `new_order`, which must name every
    /// current instance exactly once.
    pub fn reorder(&mut self, new_order: &[InstanceId]) -> bool {
        if !self.is_permutation(new_order) {
            log::debug!(
                "reorder: rejected order of {} ids for {} instances",
                new_order.len(),
                self.items.len()
            );
            return false;
        }

        let mut remaining = std::mem::take(&mut self.items);
        for id in new_order {
            if let Some(pos) = remaining.iter().position(|i| i.instance_id == *id) {
                self.items.push(remaining.swap_remove(pos));
            }
        }
        true
    }

    fn is_permutation(&self, order: &[InstanceId]) -> bool {
        if order.len() != self.items.len() {
            return false;
        }
        let current: HashSet<InstanceId> = self.items.iter().map(|i| i.instance_id).collect();
        let proposed: HashSet<InstanceId> = order.iter().copied().collect();
        proposed.len() == order.len() && proposed == current
    }

    pub fn set_style(&mut self, instance_id: InstanceId, attr: StyleAttr, value: bool) -> bool {
        match self.get_mut(instance_id) {
            Some(item) => {
                item.styles.set(attr, value);
                true
            }
            None => false,
        }
    }

    pub fn toggle_style(&mut self, instance_id: InstanceId, attr: StyleAttr) -> bool {
        match self.get_mut(instance_id) {
            Some(item) => {
                let current = item.styles.get(attr);
                item.styles.set(attr, !current);
                true
            }
            None => false,
        }
    }

    /// Replace color code and value together.
    pub fn set_color(&mut self, instance_id: InstanceId, color: SegmentColor) -> bool {
        match self.get_mut(instance_id) {
            Some(item) => {
                item.color = color;
                true
            }
            None => false,
        }
    }

    /// The ordered sequence consumed by the generator and the preview.
    pub fn segments(&self) -> &[SegmentInstance] {
        &self.items
    }

    pub fn ids(&self) -> Vec<InstanceId> {
        self.items.iter().map(|i| i.instance_id).collect()
    }

    pub fn get(&self, instance_id: InstanceId) -> Option<&SegmentInstance> {
        self.items.iter().find(|i| i.instance_id == instance_id)
    }

    fn get_mut(&mut self, instance_id: InstanceId) -> Option<&mut SegmentInstance> {
        let found = self.items.iter_mut().find(|i| i.instance_id == instance_id);
        if found.is_none() {
            log::debug!("unknown instance {instance_id}");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
