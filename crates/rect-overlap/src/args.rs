//! Conversion of the ten command-line fields into two rectangles.

use core::num::ParseFloatError;
use rectsat2d::math::Real;
use rectsat2d::shape::Rectangle;

/// Names of the expected fields, in command-line order.
pub const FIELD_NAMES: [&str; 10] = ["x1", "y1", "w1", "h1", "r1", "x2", "y2", "w2", "h2", "r2"];

/// Errors raised while reading the command line.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ArgsError {
    /// Not exactly ten fields were given.
    #[error("expected 10 arguments, found {0}")]
    WrongCount(usize),
    /// A field is not a number.
    #[error("argument `{name}` is not a number: {text:?}")]
    InvalidNumber {
        name: &'static str,
        text: String,
        #[source]
        source: ParseFloatError,
    },
    /// A field parsed to an infinite or NaN value.
    #[error("argument `{name}` must be a finite number, found {text:?}")]
    NonFinite { name: &'static str, text: String },
}

/// Parses one field, ignoring surrounding whitespace and a single trailing comma.
fn parse_field(name: &'static str, text: &str) -> Result<Real, ArgsError> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed).trim_end();

    let value: Real = trimmed.parse().map_err(|source| ArgsError::InvalidNumber {
        name,
        text: text.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(ArgsError::NonFinite {
            name,
            text: text.to_string(),
        });
    }

    Ok(value)
}

/// Builds the two rectangles described by `x1 y1 w1 h1 r1 x2 y2 w2 h2 r2`.
pub fn parse_rectangles<S: AsRef<str>>(args: &[S]) -> Result<[Rectangle; 2], ArgsError> {
    if args.len() != FIELD_NAMES.len() {
        return Err(ArgsError::WrongCount(args.len()));
    }

    let mut fields = [0.0; 10];
    for ((field, name), text) in fields.iter_mut().zip(FIELD_NAMES).zip(args) {
        *field = parse_field(name, text.as_ref())?;
    }

    let [x1, y1, w1, h1, r1, x2, y2, w2, h2, r2] = fields;
    Ok([
        Rectangle::from_scalars(x1, y1, w1, h1, r1),
        Rectangle::from_scalars(x2, y2, w2, h2, r2),
    ])
}
