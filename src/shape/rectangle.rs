//! Rotated rectangle shape with precomputed projection axes.

use crate::math::{Isometry, Point, Real};
use crate::query;
use crate::shape::AxisKind;
use crate::utils::Extrema;
use core::fmt;
use na::RealField;

/// A rectangle rotated by an arbitrary angle about its center.
///
/// Each rectangle has two mutually perpendicular edge slopes. The finite,
/// non-negative one is the *nominal* slope, the other one (negative or `+inf`)
/// is the *ortho* slope. A finite slope `m` implies the projection axis
/// `(1, m)`, an infinite slope implies the axis `(0, 1)`.
///
/// Everything the overlap test needs about the rectangle itself is computed
/// by the constructor: the four vertices, both slopes, and the projections
/// of the vertices onto both of the rectangle's own axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Rectangle {
    center: Point<Real>,
    vertices: [Point<Real>; 4],
    slopes: [Real; 2],
    extrema: [Extrema; 2],
}

impl Rectangle {
    /// Creates a rectangle from its center, its width and height, and a rotation
    /// angle in degrees.
    ///
    /// The vertices are laid out unrotated as bottom-left, bottom-right,
    /// top-right, top-left, then rotated counterclockwise by `rotation_degrees`
    /// about `center`. Any real angle is accepted.
    pub fn new(center: Point<Real>, width: Real, height: Real, rotation_degrees: Real) -> Self {
        if width == 0.0 || height == 0.0 {
            log::debug!(
                "Creating a degenerate {}x{} rectangle centered at ({}, {}).",
                width,
                height,
                center.x,
                center.y
            );
        }

        let dw = width / 2.0;
        let dh = height / 2.0;

        let mut vertices = [
            Point::new(center.x - dw, center.y - dh),
            Point::new(center.x + dw, center.y - dh),
            Point::new(center.x + dw, center.y + dh),
            Point::new(center.x - dw, center.y + dh),
        ];

        if rotation_degrees != 0.0 {
            let pos = Isometry::new(center.coords, rotation_degrees * Real::pi() / 180.0);
            for vertex in &mut vertices {
                *vertex = pos * Point::from(*vertex - center);
            }
        }

        let slopes = edge_slopes(&vertices[0], &vertices[1]);
        let mut result = Rectangle {
            center,
            vertices,
            slopes,
            extrema: [Extrema::new(); 2],
        };

        for axis in AxisKind::ALL {
            result.extrema[axis.index()] = result.projection_extrema(slopes[axis.index()]);
        }

        result
    }

    /// Creates a rectangle centered at `(x, y)`.
    ///
    /// See [`Rectangle::new`].
    #[inline]
    pub fn from_scalars(x: Real, y: Real, width: Real, height: Real, rotation_degrees: Real) -> Self {
        Self::new(Point::new(x, y), width, height, rotation_degrees)
    }

    /// The rotation pivot of this rectangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The four corners of this rectangle, in construction order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 4] {
        &self.vertices
    }

    /// One of the two edge slopes of this rectangle.
    #[inline]
    pub fn slope(&self, axis: AxisKind) -> Real {
        self.slopes[axis.index()]
    }

    /// Both edge slopes, indexed by [`AxisKind::index`].
    #[inline]
    pub fn slopes(&self) -> &[Real; 2] {
        &self.slopes
    }

    /// The projection of this rectangle's vertices onto one of its own axes.
    #[inline]
    pub fn extrema(&self, axis: AxisKind) -> Extrema {
        self.extrema[axis.index()]
    }

    /// The projections of this rectangle's vertices onto both of its own axes,
    /// indexed by [`AxisKind::index`].
    #[inline]
    pub fn self_extrema(&self) -> &[Extrema; 2] {
        &self.extrema
    }

    /// Projects the vertices of this rectangle onto the axis implied by `slope`.
    ///
    /// The axis is not normalized: a vertex `p` projects to `p.x + p.y * slope`,
    /// or to `p.y` if `slope` is infinite. Projections of two rectangles onto the
    /// same slope share the same scaling factor, so their overlap is preserved.
    pub fn projection_extrema(&self, slope: Real) -> Extrema {
        if slope.is_infinite() {
            Extrema::from_values(self.vertices.iter().map(|pt| pt.y))
        } else {
            Extrema::from_values(self.vertices.iter().map(|pt| pt.x + pt.y * slope))
        }
    }

    /// Tests the projections of another rectangle onto this rectangle's axes
    /// against this rectangle's own projections.
    ///
    /// Returns `true` as soon as one axis shows disjoint intervals.
    #[inline]
    pub fn disjunct(&self, extrema: &[Extrema; 2]) -> bool {
        query::sat::rectangle_rectangle_disjunct(self, extrema)
    }

    /// Returns `true` if `self` and `other` do not overlap.
    ///
    /// Rectangles touching along an edge or at a corner are not separated.
    #[inline]
    pub fn separated(&self, other: &Rectangle) -> bool {
        query::sat::rectangle_rectangle_separated(self, other)
    }

    /// Returns `true` if `self` and `other` overlap, i.e., `!self.separated(other)`.
    #[inline]
    pub fn intersects(&self, other: &Rectangle) -> bool {
        query::intersection_test(self, other)
    }
}

/// Classifies the slope of the edge `p1 -> p2` into the `[nominal, ortho]` pair.
fn edge_slopes(p1: &Point<Real>, p2: &Point<Real>) -> [Real; 2] {
    let dx = p1.x - p2.x;

    // A vertical edge gives the same pair as a horizontal one.
    if dx == 0.0 {
        return [0.0, Real::INFINITY];
    }

    let m = (p1.y - p2.y) / dx;

    if m == 0.0 {
        [0.0, Real::INFINITY]
    } else if m > 0.0 {
        [m, -1.0 / m]
    } else {
        [-1.0 / m, m]
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Vertices are separated by three spaces, with no trailing separator.
        f.write_str("Rectangle vertices:")?;
        for (i, pt) in self.vertices.iter().enumerate() {
            let sep = if i == 0 { " " } else { "   " };
            write!(f, "{}({}, {})", sep, pt.x, pt.y)?;
        }
        Ok(())
    }
}
