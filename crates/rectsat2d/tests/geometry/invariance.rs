use crate::harness_vectors::{rectangles, CASES};
use rectsat2d::math::{Isometry, Point, Real, Vector};
use rectsat2d::na::RealField;
use rectsat2d::query::sat;
use rectsat2d::shape::{AxisKind, Rectangle};

fn random_rectangle(rng: &mut oorandom::Rand64, min_size: Real) -> Rectangle {
    let mut uniform = |lo: Real, hi: Real| lo + (hi - lo) * rng.rand_float();
    let center = Point::new(uniform(-10.0, 10.0), uniform(-10.0, 10.0));
    let width = uniform(min_size, 5.0);
    let height = uniform(min_size, 5.0);
    let rotation = uniform(-360.0, 360.0);
    Rectangle::new(center, width, height, rotation)
}

#[test]
fn test_symmetry() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..10_000 {
        let rect1 = random_rectangle(&mut rng, 0.0);
        let rect2 = random_rectangle(&mut rng, 0.0);
        assert_eq!(
            rect1.separated(&rect2),
            rect2.separated(&rect1),
            "Asymmetric result for {:?} and {:?}",
            rect1,
            rect2
        );
    }
}

#[test]
fn test_rectangle_is_never_separated_from_itself() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..1000 {
        let rect = random_rectangle(&mut rng, 0.01);
        assert!(!rect.separated(&rect), "{:?} is separated from itself", rect);
    }
}

#[test]
fn test_fast_path_matches_all_axes() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..5000 {
        let rect1 = random_rectangle(&mut rng, 0.0);
        let rect2 = random_rectangle(&mut rng, 0.0);

        // Only pairs with identical nominal slopes take the parallel shortcut.
        if rect1.slope(AxisKind::Nominal) == rect2.slope(AxisKind::Nominal) {
            assert_eq!(
                sat::rectangle_rectangle_separated(&rect1, &rect2),
                sat::rectangle_rectangle_separated_all_axes(&rect1, &rect2)
            );
        }

        // Unrotated rectangles always share their slopes and take the parallel shortcut.
        let shifted = Rectangle::new(
            Point::new(rect1.center().x + rng.rand_float() * 6.0, rect1.center().y),
            3.0,
            1.0,
            0.0,
        );
        let base = Rectangle::new(rect1.center(), 2.0, 0.5, 0.0);
        assert_eq!(base.slopes(), shifted.slopes());
        assert_eq!(
            sat::rectangle_rectangle_separated(&base, &shifted),
            sat::rectangle_rectangle_separated_all_axes(&base, &shifted)
        );
    }
}

#[test]
fn test_parallel_rotated_rectangles_agree_with_all_axes() {
    let mut rng = oorandom::Rand64::new(99);

    for _ in 0..5000 {
        let rotation = -180.0 + 360.0 * rng.rand_float();
        let rect1 = Rectangle::from_scalars(0.0, 0.0, 4.0, 2.0, rotation);
        let rect2 = Rectangle::from_scalars(
            -6.0 + 12.0 * rng.rand_float(),
            -6.0 + 12.0 * rng.rand_float(),
            4.0,
            2.0,
            rotation,
        );
        assert_eq!(
            rect1.separated(&rect2),
            sat::rectangle_rectangle_separated_all_axes(&rect1, &rect2)
        );
    }
}

#[test]
fn test_translation_invariance() {
    let shifts = [
        Vector::new(100.0, -50.0),
        Vector::new(-3.5, 7.25),
        Vector::new(0.1, 0.2),
    ];

    for (fields, expected) in CASES {
        let (rect1, rect2) = rectangles(fields);
        assert_eq!(rect1.separated(&rect2), *expected);

        for shift in &shifts {
            let moved1 = Rectangle::new(
                rect1.center() + *shift,
                fields[2],
                fields[3],
                fields[4],
            );
            let moved2 = Rectangle::new(
                rect2.center() + *shift,
                fields[7],
                fields[8],
                fields[9],
            );
            assert_eq!(
                moved1.separated(&moved2),
                *expected,
                "Translating {:?} by {:?} changed the result",
                fields,
                shift
            );
        }
    }
}

#[test]
fn test_rotation_of_both_invariance() {
    let pivot = Point::new(1.0, 2.0);

    for (fields, expected) in CASES {
        let (rect1, rect2) = rectangles(fields);

        for angle in [30.0, 90.0, -135.0, 180.0, 400.0] {
            let rot = Isometry::rotation_wrt_point(
                rectsat2d::na::UnitComplex::new(angle * Real::pi() / 180.0),
                pivot,
            );
            let turned1 = Rectangle::new(
                rot * rect1.center(),
                fields[2],
                fields[3],
                fields[4] + angle,
            );
            let turned2 = Rectangle::new(
                rot * rect2.center(),
                fields[7],
                fields[8],
                fields[9] + angle,
            );
            assert_eq!(
                turned1.separated(&turned2),
                *expected,
                "Rotating {:?} by {} degrees changed the result",
                fields,
                angle
            );
        }
    }
}
