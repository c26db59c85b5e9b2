//! Foundational types for the Rough Light roguelike.
//!
//! Geometry primitives on an unbounded Cartesian integer plane and the
//! packed RGB colour used to tint tiles.

pub mod geom;
pub mod style;

pub use geom::{Point, Rect, RectIter, Vector};
pub use style::Color;
