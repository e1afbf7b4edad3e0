//! Bounded position history for motion-path display.

use std::collections::VecDeque;

use bevy::math::DVec2;

/// Recent positions of a body, oldest first.
///
/// The capacity is fixed at creation; recording past it evicts the
/// oldest point.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: VecDeque<DVec2>,
    max_len: usize,
}

impl Trail {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len.min(1024)),
            max_len,
        }
    }

    /// Append a position, evicting from the oldest end when over capacity.
    pub fn record(&mut self, pos: DVec2) {
        self.points.push_back(pos);
        while self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Positions from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    /// Most recently recorded position.
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }
}
