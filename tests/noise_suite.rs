use proptest::prelude::*;
use tui_genart::visual::noise::fade;
use tui_genart::visual::NoiseField;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn permutation_is_the_reference_table_doubled() {
    let n = NoiseField::new();
    let p = n.permutation();
    assert_eq!(&p[..5], &[151, 160, 137, 91, 90]);
    assert_eq!(p[255], 180);
    for i in 0..256 {
        assert_eq!(p[i], p[i + 256]);
    }
    let mut seen = [false; 256];
    for &v in &p[..256] {
        seen[v] = true;
    }
    assert!(seen.iter().all(|&s| s), "first half must be a permutation of 0..=255");
}

#[test]
fn known_samples_match_reference_values() {
    let n = NoiseField::new();
    assert!(close(n.sample(0.5, 0.5, 0.5), -0.25));
    assert!(close(n.sample(1.25, 2.75, 0.0), 0.15452098846435547));
    assert!(close(n.sample(-3.3, 4.1, 7.7), 0.002207378748748934));
    assert!(close(n.sample(0.1, 0.2, 0.3), 0.35122924878110723));
    assert!(close(n.sample(12.34, -56.78, 9.1), -0.4118966188631843));
}

#[test]
fn two_dimensional_sample_is_z_zero() {
    let n = NoiseField::new();
    assert_eq!(n.sample2(1.25, 2.75), n.sample(1.25, 2.75, 0.0));
}

#[test]
fn lattice_points_are_zero() {
    let n = NoiseField::new();
    for (x, y, z) in [(0.0, 0.0, 0.0), (3.0, -7.0, 12.0), (255.0, 256.0, -1.0)] {
        assert_eq!(n.sample(x, y, z), 0.0);
    }
}

#[test]
fn dense_grid_stays_in_range() {
    let n = NoiseField::new();
    for i in 0..200 {
        for j in 0..200 {
            let v = n.sample(i as f64 * 0.137 - 10.0, j as f64 * 0.173 - 5.0, (i + j) as f64 * 0.05);
            assert!((-1.01..=1.01).contains(&v), "noise({i},{j}) = {v}");
        }
    }
}

#[test]
fn fade_hits_its_endpoints() {
    assert_eq!(fade(0.0), 0.0);
    assert_eq!(fade(1.0), 1.0);
    assert!(close(fade(0.5), 0.5));
}

proptest! {
    #[test]
    fn sampling_is_pure(x in -500.0f64..500.0, y in -500.0f64..500.0, z in -500.0f64..500.0) {
        let a = NoiseField::new();
        let b = NoiseField::new();
        prop_assert_eq!(a.sample(x, y, z).to_bits(), a.sample(x, y, z).to_bits());
        prop_assert_eq!(a.sample(x, y, z).to_bits(), b.sample(x, y, z).to_bits());
    }

    #[test]
    fn sampling_is_bounded(x in -1.0e4f64..1.0e4, y in -1.0e4f64..1.0e4, z in -1.0e4f64..1.0e4) {
        let v = NoiseField::new().sample(x, y, z);
        prop_assert!(v.is_finite());
        prop_assert!((-1.01..=1.01).contains(&v));
    }
}
