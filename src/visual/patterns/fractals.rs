use super::RenderCtx;
use crate::visual::color::Color;
use crate::visual::surface::Surface;

pub const MAX_ITERATIONS: u32 = 50;
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;
const STRIDE: usize = 2;

/// Iterates `z <- z^2 + c` from `z = (x, y)` until `|z|^2 >= 4` or the cap is hit.
pub fn escape_time(mut x: f64, mut y: f64, cx: f64, cy: f64) -> u32 {
    let mut i = 0;
    while x * x + y * y < ESCAPE_RADIUS_SQ && i < MAX_ITERATIONS {
        let xt = x * x - y * y + cx;
        y = 2.0 * x * y + cy;
        x = xt;
        i += 1;
    }
    i
}

/// Zoom and pan of the Mandelbrot view at a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MandelbrotView {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl MandelbrotView {
    pub fn at(t: u64) -> Self {
        let t = t as f64;
        Self {
            zoom: 0.5 + (t * 0.01).sin() * 0.3,
            offset_x: (t * 0.005).sin() * 0.5,
            offset_y: (t * 0.007).cos() * 0.3,
        }
    }

    pub fn point(&self, px: f64, py: f64, w: f64, h: f64) -> (f64, f64) {
        (
            (px - w / 2.0) / (w / 4.0) * self.zoom + self.offset_x,
            (py - h / 2.0) / (h / 4.0) * self.zoom + self.offset_y,
        )
    }
}

pub(super) fn mandelbrot(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let view = MandelbrotView::at(ctx.t);
    sweep(ctx.w, ctx.h, out, |px, py| {
        let (cx, cy) = view.point(px, py, ctx.w, ctx.h);
        let i = escape_time(0.0, 0.0, cx, cy);
        shade(i, (i as f64 * 10.0 + t) % 360.0, 70.0)
    });
}

pub(super) fn julia(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let cx = 0.7269 * (t * 0.005).cos();
    let cy = 0.1889 * (t * 0.008).sin();
    let (w, h) = (ctx.w, ctx.h);
    sweep(w, h, out, |px, py| {
        let zx = (px - w / 2.0) / (w / 4.0);
        let zy = (py - h / 2.0) / (h / 4.0);
        let i = escape_time(zx, zy, cx, cy);
        shade(i, (i as f64 * 15.0 + t * 0.5) % 360.0, 60.0)
    });
}

fn shade(i: u32, hue: f64, light_span: f64) -> Color {
    if i < MAX_ITERATIONS {
        Color::hsl(hue, 70.0, 30.0 + i as f64 / MAX_ITERATIONS as f64 * light_span)
    } else {
        Color::BLACK
    }
}

fn sweep(w: f64, h: f64, out: &mut Surface, mut color_at: impl FnMut(f64, f64) -> Color) {
    let (wi, hi) = (w as usize, h as usize);
    for px in (0..wi).step_by(STRIDE) {
        for py in (0..hi).step_by(STRIDE) {
            let (x, y) = (px as f64, py as f64);
            out.fill_rect(x, y, STRIDE as f64, STRIDE as f64, color_at(x, y));
        }
    }
}
