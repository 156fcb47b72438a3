use crate::shape::{AxisKind, Rectangle};
use crate::utils::Extrema;

/// Tests whether the projections of another rectangle, expressed on `rect`'s own
/// axes, are disjoint from `rect`'s self-projections on either axis.
///
/// `extrema` must be indexed by [`AxisKind::index`]: `extrema[0]` is the projection
/// onto `rect`'s nominal axis and `extrema[1]` onto its ortho axis.
///
/// # Returns
///
/// `true` as soon as one axis shows disjoint projections (the rectangles are separated),
/// `false` once both axes have been checked without finding one.
///
/// # Example
///
/// ```rust
/// use rectsat2d::query::sat::rectangle_rectangle_disjunct;
/// use rectsat2d::shape::Rectangle;
///
/// let rect1 = Rectangle::from_scalars(0.0, 0.0, 2.0, 2.0, 0.0);
/// let rect2 = Rectangle::from_scalars(5.0, 0.0, 2.0, 2.0, 0.0);
///
/// // Both rectangles are axis-aligned, so rect2's self-extrema already live on rect1's axes.
/// assert!(rectangle_rectangle_disjunct(&rect1, rect2.self_extrema()));
/// ```
#[inline]
pub fn rectangle_rectangle_disjunct(rect: &Rectangle, extrema: &[Extrema; 2]) -> bool {
    AxisKind::ALL
        .iter()
        .any(|axis| rect.extrema(*axis).is_disjoint_from(&extrema[axis.index()]))
}

/// Projects the vertices of `rect2` onto both axes of `rect1`.
#[inline]
fn project_on_axes_of(rect1: &Rectangle, rect2: &Rectangle) -> [Extrema; 2] {
    [
        rect2.projection_extrema(rect1.slope(AxisKind::Nominal)),
        rect2.projection_extrema(rect1.slope(AxisKind::Ortho)),
    ]
}

/// Returns `true` if the two rectangles do not overlap.
///
/// This is the Separating Axis Theorem specialized to rectangles. A rectangle has only
/// two distinct edge directions, so:
///
/// - if both rectangles have the same nominal slope, only two axes exist and the
///   precomputed self-projections of `rect2` are compared against those of `rect1`
///   directly, with no extra projection;
/// - otherwise `rect1` is projected onto `rect2`'s axes and `rect2` onto `rect1`'s
///   axes, and all four axes are tested.
///
/// The parallel test is an exact comparison of the nominal slopes. Rectangles
/// that are parallel up to rounding take the four-axis path, which gives the same
/// answer.
///
/// Boundary contact counts as overlap: two rectangles sharing an edge or a corner are
/// not separated.
///
/// # Example
///
/// ```rust
/// use rectsat2d::query::sat::rectangle_rectangle_separated;
/// use rectsat2d::shape::Rectangle;
///
/// let rect1 = Rectangle::from_scalars(0.0, 0.0, 4.0, 1.0, 0.0);
/// let rect2 = Rectangle::from_scalars(0.0, 0.0, 1.0, 4.0, 45.0);
/// assert!(!rectangle_rectangle_separated(&rect1, &rect2));
///
/// let rect3 = Rectangle::from_scalars(6.0, 0.0, 1.0, 4.0, 45.0);
/// assert!(rectangle_rectangle_separated(&rect1, &rect3));
/// ```
pub fn rectangle_rectangle_separated(rect1: &Rectangle, rect2: &Rectangle) -> bool {
    if rect1.slope(AxisKind::Nominal) == rect2.slope(AxisKind::Nominal) {
        return rectangle_rectangle_disjunct(rect1, rect2.self_extrema());
    }

    rectangle_rectangle_separated_all_axes(rect1, rect2)
}

/// Returns `true` if the two rectangles do not overlap, always testing all four axes.
///
/// Unlike [`rectangle_rectangle_separated`], this never takes the parallel shortcut.
/// Both functions always agree; this one is slower when the rectangles share a slope.
pub fn rectangle_rectangle_separated_all_axes(rect1: &Rectangle, rect2: &Rectangle) -> bool {
    // Projections of rect2 on rect1's axes, and of rect1 on rect2's axes.
    let extrema2 = project_on_axes_of(rect1, rect2);
    let extrema1 = project_on_axes_of(rect2, rect1);

    rectangle_rectangle_disjunct(rect1, &extrema2) || rectangle_rectangle_disjunct(rect2, &extrema1)
}
