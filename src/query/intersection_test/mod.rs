//! Implementation details of the `intersection_test` function.

pub use self::intersection_test_rectangle_rectangle::intersection_test_rectangle_rectangle;

mod intersection_test_rectangle_rectangle;
