//! Per-viewer visibility bookkeeping: what is seen now and what was ever seen.

use std::collections::HashSet;

use rough_core::Point;

use crate::raycast::{Opacity, Raycaster};

/// Lifecycle of a [`Viewer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    /// Created but never placed; both sets are empty.
    #[default]
    Uninitialized,
    /// Visibility has been computed at least once.
    Active,
}

/// Seen and explored cells of one viewing entity.
///
/// `seen` is replaced wholesale on every [`recompute`](Self::recompute);
/// `explored` only ever grows.
#[derive(Debug, Clone)]
pub struct Viewer {
    raycaster: Raycaster,
    seen: HashSet<Point>,
    explored: HashSet<Point>,
    state: ViewState,
}

impl Viewer {
    pub fn new(radius: i32) -> Self {
        Self {
            raycaster: Raycaster::new(radius),
            seen: HashSet::new(),
            explored: HashSet::new(),
            state: ViewState::Uninitialized,
        }
    }

    pub fn radius(&self) -> i32 {
        self.raycaster.radius()
    }

    /// Takes effect on the next recompute.
    pub fn set_radius(&mut self, radius: i32) {
        self.raycaster.set_radius(radius);
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Recompute visibility from `position`. Call on first placement and
    /// after every move.
    pub fn recompute(&mut self, position: Point, map: &impl Opacity) {
        let visible = self.raycaster.compute(position, map);
        self.seen.clone_from(visible);
        self.explored.extend(self.seen.iter().copied());
        self.state = ViewState::Active;
        log::trace!(
            "visibility from {position}: {} seen, {} explored",
            self.seen.len(),
            self.explored.len()
        );
    }

    /// Cells visible as of the last recompute.
    pub fn seen(&self) -> &HashSet<Point> {
        &self.seen
    }

    /// Every cell seen since the viewer was created.
    pub fn explored(&self) -> &HashSet<Point> {
        &self.explored
    }

    #[inline]
    pub fn is_seen(&self, p: Point) -> bool {
        self.seen.contains(&p)
    }

    #[inline]
    pub fn is_explored(&self, p: Point) -> bool {
        self.explored.contains(&p)
    }
}
