//! Human-readable output and exit statuses.

use rectsat2d::shape::Rectangle;

/// Exit status reported when the command line cannot be used.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Printed on stdout when the command line is rejected.
pub const USAGE: &str = "\
Usage:
rect-overlap x1, y1, w1, h1, r1, x2, y2, w2, h2, r2

where:
 (x1,y1) = center of rectangle 1
 w1 = width of rectangle 1
 h1 = height of rectangle 1
 r1 = rotation angle in degrees of rectangle 1
 (x2,y2) = center of rectangle 2
 w2 = width of rectangle 2
 h2 = height of rectangle 2
 r2 = rotation angle in degrees of rectangle 2
";

/// Result of comparing the two rectangles given on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The rectangles do not overlap.
    Separated,
    /// The rectangles overlap or touch.
    Overlapped,
}

impl Outcome {
    /// Compares two rectangles.
    pub fn of(rect1: &Rectangle, rect2: &Rectangle) -> Self {
        if rect1.separated(rect2) {
            Outcome::Separated
        } else {
            Outcome::Overlapped
        }
    }

    /// The headline printed for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Separated => "Rectangles separated",
            Outcome::Overlapped => "Rectangles are overlapped",
        }
    }

    /// The process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Separated => 0,
            Outcome::Overlapped => 1,
        }
    }
}

/// Formats the outcome followed by the vertices of both rectangles.
pub fn render(outcome: Outcome, rect1: &Rectangle, rect2: &Rectangle) -> String {
    format!(
        "{}\n\nRect1:\n{}\nRect2:\n{}\n",
        outcome.message(),
        rect1,
        rect2
    )
}
