//! Non-persistent geometric queries.
//!
//! * [`query::intersection_test()`](fn@intersection_test) determines if two rectangles are overlapping or not.
//! * [`sat`] exposes the separating-axis building blocks it relies on.

pub use self::intersection_test::intersection_test_rectangle_rectangle as intersection_test;

mod intersection_test;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
