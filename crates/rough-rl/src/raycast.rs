//! Radial raycast field of vision.
//!
//! A full turn is swept in `3 × radius²` uniform angular steps. Each ray
//! starts at the center of the viewer's cell and marches in unit steps,
//! recording every cell it samples until it hits a sight-blocking cell (which
//! is recorded too) or has taken `radius` steps. The union of all rays is the
//! visible set.
//!
//! Cells between two neighbouring rays can be missed at long range, and
//! cells near the viewer are sampled many times. Both are accepted: the
//! sampling is cheap and deterministic.

use std::collections::HashSet;
use std::f64::consts::TAU;

use rough_core::{Point, Vector};

use crate::grid::SparseGrid;

/// Answers whether a cell stops rays.
pub trait Opacity {
    fn blocks_sight(&self, p: Point) -> bool;
}

impl Opacity for SparseGrid {
    #[inline]
    fn blocks_sight(&self, p: Point) -> bool {
        self.get(p).blocks_sight
    }
}

impl<F: Fn(Point) -> bool> Opacity for F {
    #[inline]
    fn blocks_sight(&self, p: Point) -> bool {
        self(p)
    }
}

/// Cast one ray from `origin` and call `visit` for every cell it samples.
///
/// Angle 0 points up (+y) and angles grow clockwise, towards +x. The ray
/// stops after visiting the first cell that blocks sight, or after `radius`
/// samples.
pub fn cast_ray(
    origin: Point,
    angle: f64,
    map: &impl Opacity,
    radius: i32,
    mut visit: impl FnMut(Point),
) {
    let step = Vector::new(angle.sin(), angle.cos());
    let mut pos = Vector::from(origin) + Vector::new(0.5, 0.5);
    for _ in 0..radius {
        let cell = pos.floor();
        visit(cell);
        if map.blocks_sight(cell) {
            return;
        }
        pos = pos + step;
    }
}

/// Reusable visibility computation with a fixed sight radius.
#[derive(Debug, Clone)]
pub struct Raycaster {
    radius: i32,
    visible: HashSet<Point>,
}

impl Raycaster {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            visible: HashSet::new(),
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }

    /// Recompute the cells visible from `origin`.
    ///
    /// A non-positive radius sees nothing, not even the origin.
    pub fn compute(&mut self, origin: Point, map: &impl Opacity) -> &HashSet<Point> {
        self.visible.clear();
        if self.radius <= 0 {
            return &self.visible;
        }
        let r = self.radius as u64;
        let steps = 3 * r * r;
        let visible = &mut self.visible;
        for i in 0..steps {
            let angle = TAU * i as f64 / steps as f64;
            cast_ray(origin, angle, map, self.radius, |p| {
                visible.insert(p);
            });
        }
        &self.visible
    }

    /// Whether `p` was visible in the last [`compute`](Self::compute).
    pub fn is_visible(&self, p: Point) -> bool {
        self.visible.contains(&p)
    }

    pub fn iter_visible(&self) -> impl Iterator<Item = Point> + '_ {
        self.visible.iter().copied()
    }
}

/// One-shot visibility: the set of cells visible from `origin`.
pub fn compute_visible(origin: Point, map: &impl Opacity, radius: i32) -> HashSet<Point> {
    let mut rc = Raycaster::new(radius);
    rc.compute(origin, map);
    rc.visible
}
