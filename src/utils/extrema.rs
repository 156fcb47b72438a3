use crate::math::Real;
use approx::{AbsDiffEq, RelativeEq};

/// The minimum and maximum of a set of scalar projections onto a single axis.
///
/// An `Extrema` starts out empty (see [`Extrema::new`]) and grows as values are
/// folded into it with [`Extrema::take`]. Once at least one value has been
/// taken, `min <= max` holds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Extrema {
    /// The smallest projection value seen so far.
    pub min: Real,
    /// The largest projection value seen so far.
    pub max: Real,
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}

impl Extrema {
    /// Creates an empty extrema.
    ///
    /// `min` is set to the largest representable value and `max` to the most
    /// negative one, so the first value taken replaces both.
    #[inline]
    pub fn new() -> Self {
        Extrema {
            min: Real::MAX,
            max: -Real::MAX,
        }
    }

    /// Folds every value of `values` into a new extrema.
    pub fn from_values(values: impl IntoIterator<Item = Real>) -> Self {
        let mut result = Self::new();
        for value in values {
            result.take(value);
        }
        result
    }

    /// Enlarges `self` so that it contains `value`.
    #[inline]
    pub fn take(&mut self, value: Real) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    /// Does this extrema contain no value at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// The length of the interval `[min, max]`.
    #[inline]
    pub fn width(&self) -> Real {
        self.max - self.min
    }

    /// Returns `true` if the intervals `[self.min, self.max]` and `[other.min, other.max]`
    /// do not overlap.
    ///
    /// Intervals sharing a single endpoint are not disjoint.
    #[inline]
    pub fn is_disjoint_from(&self, other: &Extrema) -> bool {
        self.max < other.min || other.max < self.min
    }
}

impl AbsDiffEq for Extrema {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl RelativeEq for Extrema {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}
