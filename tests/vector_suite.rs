use proptest::prelude::*;
use tui_genart::visual::vector::{self, Vec2};

#[test]
fn normalizing_zero_stays_zero() {
    let v = vector::normalize(Vec2::ZERO);
    assert_eq!(v, Vec2::ZERO);
    assert!(!v.x.is_nan() && !v.y.is_nan());
}

#[test]
fn limit_caps_magnitude_only_when_needed() {
    let v = vector::limit(Vec2::new(3.0, 4.0), 1.0);
    assert!((vector::magnitude(v) - 1.0).abs() < 1e-12);
    assert_eq!(vector::limit(Vec2::new(0.3, 0.4), 1.0), Vec2::new(0.3, 0.4));
}

proptest! {
    #[test]
    fn normalized_vectors_have_unit_length(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        prop_assume!(x.abs() > 1e-9 || y.abs() > 1e-9);
        let m = vector::magnitude(vector::normalize(Vec2::new(x, y)));
        prop_assert!((m - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric(ax in -1e3f64..1e3, ay in -1e3f64..1e3, bx in -1e3f64..1e3, by in -1e3f64..1e3) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(vector::distance(a, b), vector::distance(b, a));
    }
}
