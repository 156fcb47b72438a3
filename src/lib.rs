/*!
rectsat2d
========

**rectsat2d** is a small 2-dimensional geometric library written with
the rust programming language. It answers a single question, fast: do two
arbitrarily rotated rectangles overlap?

The test is a specialization of the Separating Axis Theorem. A rectangle only
has two distinct edge directions, so at most four candidate axes exist for a
pair of rectangles, and only two when the rectangles are parallel. Every
per-rectangle quantity (vertices, edge slopes, self-projections) is computed
once at construction time.

```
use rectsat2d::shape::Rectangle;

let a = Rectangle::from_scalars(0.0, 0.0, 2.0, 2.0, 0.0);
let b = Rectangle::from_scalars(5.0, 5.0, 2.0, 2.0, 0.0);
assert!(a.separated(&b));
assert!(!a.intersects(&b));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Vector2};

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;
}
