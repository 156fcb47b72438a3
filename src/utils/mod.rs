//! Various unsorted geometrical and logical operators.

pub use self::extrema::Extrema;

mod extrema;
