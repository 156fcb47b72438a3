//! Application of the Separating Axis Theorem (SAT) for rectangle overlap tests.
//!
//! Two convex shapes are disjoint if and only if there exists an axis onto which their
//! projections do not overlap. For two rectangles the candidate axes are the normals of
//! their edges, and since a rectangle only has two distinct edge directions, at most
//! four axes need to be tested, two when the rectangles are parallel.
//!
//! Axes are described by the edge slopes stored in each [`Rectangle`](crate::shape::Rectangle)
//! rather than by unit vectors, see [`Rectangle::projection_extrema`](crate::shape::Rectangle::projection_extrema).

pub use self::sat_rectangle_rectangle::*;

mod sat_rectangle_rectangle;
