//! Shapes supported by rectsat2d.

pub use self::axis_kind::AxisKind;
pub use self::rectangle::Rectangle;

mod axis_kind;
mod rectangle;
