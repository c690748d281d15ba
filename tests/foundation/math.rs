//! Integration tests for 2D math.

use parallax_foundation::Vec2;

#[test]
fn squared_distance_matches_pythagoras() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(6.0, 8.0);
    assert_eq!(a.distance_squared(b), 100.0);
}

#[test]
fn vector_arithmetic_composes() {
    let origin = Vec2::ZERO;
    let step = Vec2::new(1.5, -0.5);

    let mut position = origin;
    for _ in 0..4 {
        position += step;
    }

    assert_eq!(position, step * 4.0);
    assert_eq!(position - origin, Vec2::new(6.0, -2.0));
}
