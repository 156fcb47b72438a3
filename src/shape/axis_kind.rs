/// Identifies one of the two perpendicular edge directions of a rectangle.
///
/// A rectangle's two edge slopes are labelled so that the [`AxisKind::Nominal`]
/// slope is always finite and non-negative, the [`AxisKind::Ortho`] slope being
/// its perpendicular (negative or `+infinity`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// The finite, non-negative slope.
    Nominal = 0,
    /// The slope perpendicular to the nominal one.
    Ortho = 1,
}

impl AxisKind {
    /// Both axis kinds, in index order.
    pub const ALL: [AxisKind; 2] = [AxisKind::Nominal, AxisKind::Ortho];

    /// The index of this axis kind in per-axis arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
