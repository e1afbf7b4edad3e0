//! Ownership and identity of simulated bodies.
//!
//! The registry is an arena: bodies live in a `Vec` in insertion order and
//! are addressed by [`BodyId`]. Parent links are ids too, so a removed body
//! can never be reached through a stale reference; lookups simply miss.

use std::collections::HashSet;

use crate::types::{Body, BodyId, BodySpec};

/// Ordered collection of live bodies.
#[derive(Clone, Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: u64,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body and return its freshly allocated id.
    ///
    /// The spec is assumed valid; the engine checks it before calling this.
    pub fn insert(&mut self, spec: BodySpec) -> BodyId {
        self.next_id += 1;
        let id = BodyId::from_raw(self.next_id);
        self.bodies.push(Body::from_spec(id, spec));
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of a body in iteration order.
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// First body in iteration order (the anchor in simplified mode).
    pub fn first(&self) -> Option<&Body> {
        self.bodies.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Bodies in insertion order. The order only changes through removal.
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Resolve a body's parent, ignoring links to bodies that no longer exist.
    pub fn parent_of(&self, id: BodyId) -> Option<&Body> {
        let parent = self.get(id)?.parent?;
        self.get(parent)
    }

    /// Live bodies whose parent is `id`.
    pub fn children_of(&self, id: BodyId) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(move |b| b.parent == Some(id))
    }

    /// Remove a body together with everything parented to it, transitively.
    ///
    /// Returns the removed ids, root first. Removing an absent id is a no-op
    /// and returns an empty list.
    pub fn remove_cascade(&mut self, id: BodyId) -> Vec<BodyId> {
        if !self.contains(id) {
            return Vec::new();
        }

        let mut doomed: HashSet<BodyId> = HashSet::new();
        let mut order = Vec::new();
        let mut pending = vec![id];

        while let Some(current) = pending.pop() {
            if !doomed.insert(current) {
                continue;
            }
            order.push(current);
            pending.extend(
                self.bodies
                    .iter()
                    .filter(|b| b.parent == Some(current))
                    .map(|b| b.id),
            );
        }

        self.bodies.retain(|b| !doomed.contains(&b.id));
        order
    }

    /// Remove exactly one body, leaving its children in place without a parent.
    pub fn detach(&mut self, id: BodyId) -> Option<Body> {
        let index = self.index_of(id)?;
        let body = self.bodies.remove(index);
        for child in self.bodies.iter_mut().filter(|b| b.parent == Some(id)) {
            child.parent = None;
        }
        Some(body)
    }

    /// Drop every body. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}
