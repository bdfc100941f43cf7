use tui_genart::visual::color::{hsl_to_rgb, wrap_hue};
use tui_genart::visual::{Color, Surface, SurfaceError};

fn opaque(s: &Surface, x: usize, y: usize) -> bool {
    s.pixel(x, y).map(|p| p[3] == 255).unwrap_or(false)
}

#[test]
fn zero_sized_surface_is_rejected() {
    assert_eq!(
        Surface::new(0, 10).err(),
        Some(SurfaceError::ZeroSize { width: 0, height: 10 })
    );
    assert!(matches!(Surface::new(10, 0), Err(SurfaceError::ZeroSize { .. })));
    assert!(matches!(Surface::new(100_000, 10), Err(SurfaceError::TooLarge { .. })));
    assert!(Surface::new(1, 1).is_ok());
}

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(4, 3).expect("surface");
    assert_eq!(s.pixels().len(), 4 * 3 * 4);
    assert!(s.pixels().iter().all(|&b| b == 0));
    assert_eq!(s.pixel(4, 0), None);
}

#[test]
fn fill_rect_covers_exact_pixels() {
    let mut s = Surface::new(10, 10).expect("surface");
    s.fill_rect(2.0, 3.0, 2.0, 2.0, Color::rgb(10, 20, 30));
    assert_eq!(s.pixel(2, 3), Some([10, 20, 30, 255]));
    assert_eq!(s.pixel(3, 4), Some([10, 20, 30, 255]));
    assert_eq!(s.pixel(4, 3), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(2, 5), Some([0, 0, 0, 0]));
}

#[test]
fn clear_drops_pixels_and_transform() {
    let mut s = Surface::new(8, 8).expect("surface");
    s.translate(3.0, 3.0);
    s.save();
    s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    assert!(opaque(&s, 3, 3));
    s.clear();
    assert!(s.pixels().iter().all(|&b| b == 0));
    s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    assert!(opaque(&s, 0, 0));
}

#[test]
fn half_alpha_over_transparent_keeps_colour() {
    let mut s = Surface::new(2, 2).expect("surface");
    s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::rgb(200, 100, 50).with_alpha(0.5));
    assert_eq!(s.pixel(0, 0), Some([200, 100, 50, 128]));
}

#[test]
fn source_over_on_opaque_stays_opaque() {
    let mut s = Surface::new(2, 2).expect("surface");
    s.fill_rect(0.0, 0.0, 2.0, 2.0, Color::BLACK);
    s.fill_rect(0.0, 0.0, 2.0, 2.0, Color::WHITE.with_alpha(0.5));
    let p = s.pixel(1, 1).expect("pixel");
    assert_eq!(p[3], 255);
    assert!((127..=129).contains(&p[0]));
}

#[test]
fn fill_circle_is_round() {
    let mut s = Surface::new(40, 40).expect("surface");
    s.fill_circle(20.0, 20.0, 8.0, Color::WHITE);
    assert!(opaque(&s, 20, 20));
    assert!(opaque(&s, 26, 20));
    assert!(!opaque(&s, 27, 27));
    assert_eq!(s.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn stroke_circle_leaves_the_middle_empty() {
    let mut s = Surface::new(40, 40).expect("surface");
    s.stroke_circle(20.0, 20.0, 10.0, 2.0, Color::WHITE);
    assert!(opaque(&s, 29, 19) || opaque(&s, 30, 19));
    assert_eq!(s.pixel(20, 20), Some([0, 0, 0, 0]));
}

#[test]
fn overlapping_path_segments_composite_once() {
    let mut s = Surface::new(40, 20).expect("surface");
    let pts = [(5.0, 10.5), (35.0, 10.5), (5.0, 10.5)];
    s.stroke_polyline(&pts, 2.0, Color::WHITE.with_alpha(0.5));
    assert_eq!(s.pixel(20, 10), Some([255, 255, 255, 128]));
}

#[test]
fn hairlines_fade_instead_of_vanishing() {
    let mut s = Surface::new(20, 5).expect("surface");
    s.stroke_line(2.0, 2.5, 18.0, 2.5, 0.5, Color::WHITE);
    let p = s.pixel(10, 2).expect("pixel");
    assert!(p[3] > 100 && p[3] < 160, "alpha {}", p[3]);
}

#[test]
fn transform_stack_restores() {
    let mut s = Surface::new(20, 20).expect("surface");
    s.save();
    s.translate(10.0, 10.0);
    s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    s.restore();
    s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    assert!(opaque(&s, 10, 10));
    assert!(opaque(&s, 0, 0));
    // unmatched restore is a no-op
    s.restore();
    s.fill_rect(1.0, 0.0, 1.0, 1.0, Color::WHITE);
    assert!(opaque(&s, 1, 0));
}

#[test]
fn mirrored_scale_flips_y() {
    let mut s = Surface::new(20, 20).expect("surface");
    s.translate(10.0, 10.0);
    s.scale(1.0, -1.0);
    s.fill_circle(0.0, 5.0, 1.5, Color::WHITE);
    assert!(opaque(&s, 10, 4));
    assert!(!opaque(&s, 10, 15));
}

#[test]
fn polygon_fill_is_even_odd() {
    let mut s = Surface::new(30, 30).expect("surface");
    s.fill_polygon(&[(0.0, 30.0), (15.0, 0.0), (30.0, 30.0)], Color::WHITE);
    assert!(opaque(&s, 15, 20));
    assert!(!opaque(&s, 1, 1));
    assert!(!opaque(&s, 28, 2));
}

#[test]
fn non_finite_input_draws_nothing() {
    let mut s = Surface::new(10, 10).expect("surface");
    s.fill_circle(f64::NAN, 5.0, 3.0, Color::WHITE);
    s.fill_rect(0.0, 0.0, f64::INFINITY, 3.0, Color::WHITE);
    s.stroke_line(0.0, 0.0, 5.0, 5.0, f64::NAN, Color::WHITE);
    assert!(s.pixels().iter().all(|&b| b == 0));
}

#[test]
fn hsl_matches_css() {
    assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
    assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
    assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), [0, 0, 255]);
    assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0), [0, 255, 0]);
    assert_eq!(hsl_to_rgb(33.0, 0.0, 100.0), [255, 255, 255]);
    assert_eq!(Color::hex(0x88CCFF), Color::rgb(0x88, 0xCC, 0xFF));
    assert_eq!(Color::hsla(0.0, 70.0, 60.0, 3.0).a, 1.0);
    assert_eq!(wrap_hue(-30.0), 330.0);
}
