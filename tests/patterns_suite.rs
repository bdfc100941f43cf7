use tui_genart::visual::patterns::{escape_time, Family, MandelbrotView, MAX_ITERATIONS};
use tui_genart::visual::{find_pattern, lookup, Engine, PATTERNS, PATTERN_COUNT};

fn painted(e: &Engine) -> usize {
    e.surface().pixels().chunks_exact(4).filter(|p| p[3] > 0).count()
}

#[test]
fn registry_has_every_pattern_once() {
    assert_eq!(PATTERNS.len(), PATTERN_COUNT);
    assert_eq!(PATTERN_COUNT, 22);
    for (i, a) in PATTERNS.iter().enumerate() {
        for b in &PATTERNS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
    assert_eq!(PATTERNS[7].name, "Mandelbrot");
    assert_eq!(PATTERNS[21].name, "Julia");
    assert_eq!(PATTERNS[7].family, Family::PixelField);
}

#[test]
fn lookup_falls_back_to_first_pattern() {
    assert_eq!(lookup(3).name, "Spiral");
    assert_eq!(lookup(PATTERN_COUNT).name, PATTERNS[0].name);
    assert_eq!(lookup(usize::MAX).name, PATTERNS[0].name);
}

#[test]
fn find_pattern_accepts_ids_and_names() {
    assert_eq!(find_pattern("7"), Some(7));
    assert_eq!(find_pattern(" 21 "), Some(21));
    assert_eq!(find_pattern("22"), None);
    assert_eq!(find_pattern("julia"), Some(21));
    assert_eq!(find_pattern("FLUID"), Some(11));
    assert_eq!(find_pattern("tree"), Some(1));
    assert_eq!(find_pattern("l-system"), Some(12));
    assert_eq!(find_pattern(""), None);
    assert_eq!(find_pattern("no such thing"), None);
}

#[test]
fn origin_never_escapes() {
    assert_eq!(escape_time(0.0, 0.0, 0.0, 0.0), MAX_ITERATIONS);
    assert_eq!(MAX_ITERATIONS, 50);
}

#[test]
fn far_points_escape_quickly() {
    assert_eq!(escape_time(0.0, 0.0, 2.0, 2.0), 1);
    assert_eq!(escape_time(3.0, 0.0, 0.0, 0.0), 0);
    assert!(escape_time(0.0, 0.0, 0.3, 0.6) < MAX_ITERATIONS);
}

#[test]
fn mandelbrot_view_at_time_zero() {
    let v = MandelbrotView::at(0);
    assert_eq!(v.zoom, 0.5);
    assert_eq!(v.offset_x, 0.0);
    assert_eq!(v.offset_y, 0.3);
    let (cx, cy) = v.point(50.0, 50.0, 100.0, 100.0);
    assert_eq!((cx, cy), (0.0, 0.3));
}

#[test]
fn every_pattern_draws_something() {
    let mut e = Engine::with_seed(800, 600, 42).expect("engine");
    for id in 0..PATTERN_COUNT {
        e.select_pattern(id);
        assert!(painted(&e) > 0, "pattern {id} ({}) drew nothing", lookup(id).name);
        for _ in 0..3 {
            e.render_frame();
        }
        assert!(painted(&e) > 0, "pattern {id} blank after frames");
    }
}

#[test]
fn full_frame_patterns_cover_the_surface() {
    let mut e = Engine::with_seed(120, 80, 1).expect("engine");
    for id in [2, 5, 7, 11, 21] {
        e.select_pattern(id);
        let total = 120 * 80;
        assert_eq!(painted(&e), total, "pattern {id} left gaps");
    }
}

#[test]
fn frames_change_over_time() {
    let mut e = Engine::with_seed(200, 150, 3).expect("engine");
    for id in [0, 3, 7, 14, 19, 21] {
        e.select_pattern(id);
        let before = e.surface().pixels().to_vec();
        for _ in 0..20 {
            e.render_frame();
        }
        assert_ne!(e.surface().pixels(), &before[..], "pattern {id} is static");
    }
}

#[test]
fn rendering_clears_the_previous_frame() {
    let mut e = Engine::with_seed(200, 150, 5).expect("engine");
    e.select_pattern(7);
    e.select_pattern(14);
    // Fourier circles leave the corners untouched.
    assert_eq!(e.surface().pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn kaleidoscope_leaves_transform_balanced() {
    let mut e = Engine::with_seed(200, 200, 9).expect("engine");
    e.select_pattern(10);
    e.render_frame();
    assert_eq!(
        e.surface().transform(),
        tui_genart::visual::surface::Transform::IDENTITY
    );
}
