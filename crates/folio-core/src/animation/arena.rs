//! Per-element trigger state.

use std::collections::HashMap;

use super::{ElementKey, Target};

/// Handle to an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementState {
    #[default]
    Pending,
    Triggered,
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub target: Target,
    pub state: ElementState,
    /// Cleared when a one-shot trigger fires
    pub observing: bool,
}

/// Dense storage of observed elements, indexed by [`ElementId`] and looked up
/// by [`ElementKey`].
#[derive(Debug, Clone, Default)]
pub(crate) struct ElementArena {
    slots: Vec<Slot>,
    by_key: HashMap<ElementKey, ElementId>,
}

impl ElementArena {
    /// Insert a target, or return the existing id for its key. An existing
    /// slot keeps its state.
    pub fn insert(&mut self, target: Target) -> ElementId {
        let key = target.key();
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }

        let id = ElementId(self.slots.len());
        self.slots.push(Slot {
            target,
            state: ElementState::Pending,
            observing: true,
        });
        self.by_key.insert(key, id);
        id
    }

    pub fn id_of(&self, key: &ElementKey) -> Option<ElementId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: ElementId) -> Option<&Slot> {
        self.slots.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (ElementId(index), slot))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
