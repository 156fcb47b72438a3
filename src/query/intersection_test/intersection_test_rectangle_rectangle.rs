use crate::query::sat;
use crate::shape::Rectangle;

/// Intersection test between rectangles.
///
/// Returns `true` if the rectangles overlap, including when they only touch.
#[inline]
pub fn intersection_test_rectangle_rectangle(rect1: &Rectangle, rect2: &Rectangle) -> bool {
    !sat::rectangle_rectangle_separated(rect1, rect2)
}
