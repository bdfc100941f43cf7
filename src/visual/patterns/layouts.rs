use super::RenderCtx;
use crate::visual::color::Color;
use crate::visual::surface::Surface;
use std::f64::consts::{PI, TAU};

const GOLDEN_RATIO: f64 = 1.618033988749;

pub(super) fn voronoi(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let (w, h) = (ctx.w, ctx.h);
    let sites: Vec<(f64, f64, Color)> = (0..50)
        .map(|_| {
            let x = ctx.rng.f64() * w;
            let y = ctx.rng.f64() * h;
            (x, y, Color::hsl(ctx.rng.f64() * 360.0, 70.0, 60.0))
        })
        .collect();

    for px in (0..w as usize).step_by(2) {
        for py in (0..h as usize).step_by(2) {
            let (x, y) = (px as f64, py as f64);
            let mut best = f64::INFINITY;
            let mut color = sites[0].2;
            for &(sx, sy, c) in &sites {
                let d = ((x - sx).powi(2) + (y - sy).powi(2)).sqrt();
                if d < best {
                    best = d;
                    color = c;
                }
            }
            out.fill_rect(x, y, 2.0, 2.0, color);
        }
    }

    for &(sx, sy, _) in &sites {
        out.fill_circle(sx, sy, 3.0, Color::WHITE);
    }
}

pub(super) fn spiral(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (cx, cy) = (ctx.w / 2.0, ctx.h / 2.0);
    let max_radius = ctx.w.min(ctx.h) / 2.0;
    let turns = PI * 20.0;

    let mut arm = Vec::with_capacity(630);
    for i in 0..10 {
        arm.clear();
        let phase = i as f64 * 0.5 + t * 0.02;
        let mut angle = 0.0;
        while angle < turns {
            let r = angle / turns * max_radius + (angle * 0.5 + t * 0.1).sin() * 20.0;
            arm.push((cx + (angle + phase).cos() * r, cy + (angle + phase).sin() * r));
            angle += 0.1;
        }
        let hue = (i as f64 * 36.0 + t * 2.0) % 360.0;
        out.stroke_polyline(&arm, 1.0, Color::hsl(hue, 70.0, 60.0));
    }
}

pub(super) fn wave_interference(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (w, h) = (ctx.w, ctx.h);
    let sources = [
        (w * 0.3 + (t * 0.02).sin() * 50.0, h * 0.3 + (t * 0.03).cos() * 30.0),
        (w * 0.7 + (t * 0.025).sin() * 40.0, h * 0.7 + (t * 0.028).cos() * 35.0),
        (w * 0.3 + (t * 0.022).sin() * 45.0, h * 0.7 + (t * 0.026).cos() * 25.0),
        (w * 0.7 + (t * 0.027).sin() * 38.0, h * 0.3 + (t * 0.024).cos() * 32.0),
    ];

    for px in (0..w as usize).step_by(3) {
        for py in (0..h as usize).step_by(3) {
            let (x, y) = (px as f64, py as f64);
            let amplitude: f64 = sources
                .iter()
                .enumerate()
                .map(|(i, &(sx, sy))| {
                    let d = ((x - sx).powi(2) + (y - sy).powi(2)).sqrt();
                    (d * (0.05 + i as f64 * 0.01) + t * 0.1).sin() / (d * 0.01 + 1.0)
                })
                .sum();
            let intensity = (amplitude + 2.0) / 4.0;
            let hue = (intensity * 240.0 + t) % 360.0;
            out.fill_rect(x, y, 3.0, 3.0, Color::hsl(hue, 70.0, intensity * 60.0 + 20.0));
        }
    }

    for (i, &(sx, sy)) in sources.iter().enumerate() {
        let r = 5.0 + (t * 0.1 + i as f64).sin() * 3.0;
        out.fill_circle(sx, sy, r, Color::WHITE);
    }
}

pub(super) fn dna_helix(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    const RUNGS: usize = 100;
    const RADIUS: f64 = 100.0;
    const TURNS: f64 = 4.0;

    let t = ctx.time();
    let cx = ctx.w / 2.0;
    let top = ctx.h * 0.1;
    let span = ctx.h * 0.8;
    let angle_at = |k: usize| k as f64 / RUNGS as f64 * TURNS * TAU + t * 0.02;

    for i in 0..RUNGS {
        let y = top + i as f64 / RUNGS as f64 * span;
        let a1 = angle_at(i);
        let a2 = a1 + PI;
        let x1 = cx + a1.cos() * RADIUS;
        let x2 = cx + a2.cos() * RADIUS;
        let depth1 = (a1.sin() * RADIUS + RADIUS) / (2.0 * RADIUS);
        let depth2 = (a2.sin() * RADIUS + RADIUS) / (2.0 * RADIUS);

        out.fill_circle(x1, y, 4.0, Color::hsl(200.0 + t * 0.5, 70.0, 30.0 + depth1 * 50.0));
        out.fill_circle(x2, y, 4.0, Color::hsl(320.0 + t * 0.5, 70.0, 30.0 + depth2 * 50.0));

        if i % 10 == 0 {
            out.stroke_line(x1, y, x2, y, 2.0, Color::hsla(60.0, 70.0, 70.0, 0.6));
        }
    }

    let left = Color::hsl(200.0, 70.0, 60.0);
    let right = Color::hsl(320.0, 70.0, 60.0);
    for i in 0..RUNGS - 1 {
        let y1 = top + i as f64 / RUNGS as f64 * span;
        let y2 = top + (i + 1) as f64 / RUNGS as f64 * span;
        let (a1, a2) = (angle_at(i), angle_at(i + 1));
        out.stroke_line(cx + a1.cos() * RADIUS, y1, cx + a2.cos() * RADIUS, y2, 3.0, left);
        out.stroke_line(
            cx + (a1 + PI).cos() * RADIUS,
            y1,
            cx + (a2 + PI).cos() * RADIUS,
            y2,
            3.0,
            right,
        );
    }
}

pub(super) fn kaleidoscope(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    const SEGMENTS: usize = 8;
    let t = ctx.time();

    out.save();
    out.translate(ctx.w / 2.0, ctx.h / 2.0);
    for seg in 0..SEGMENTS {
        out.save();
        out.rotate(seg as f64 * TAU / SEGMENTS as f64);
        if seg % 2 == 0 {
            out.scale(1.0, -1.0);
        }

        for i in 0..50 {
            let fi = i as f64;
            let r = fi * 5.0 + (t * 0.02 + fi * 0.1).sin() * 10.0;
            let a = fi * 0.3 + t * 0.01;
            let (x, y) = (a.cos() * r, a.sin() * r);
            let hue = (fi * 7.0 + t + seg as f64 * 45.0) % 360.0;
            let size = 2.0 + (t * 0.05 + fi * 0.2).sin();

            out.fill_circle(x, y, size, Color::hsl(hue, 70.0, 60.0));
            out.fill_circle(-x, -y, size * 0.7, Color::hsl((hue + 180.0) % 360.0, 70.0, 40.0));
        }
        out.restore();
    }
    out.restore();
}

pub(super) fn cellular_rings(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    const CELL: f64 = 8.0;
    let t = ctx.time();
    let cols = (ctx.w / CELL).floor() as usize;
    let rows = (ctx.h / CELL).floor() as usize;
    let (mx, my) = (cols as f64 / 2.0, rows as f64 / 2.0);

    for x in 0..cols {
        for y in 0..rows {
            let dist = ((x as f64 - mx).powi(2) + (y as f64 - my).powi(2)).sqrt();
            if (dist * 0.3 + t * 0.05).sin() > 0.0 {
                let hue = (dist * 10.0 + t * 2.0) % 360.0;
                out.fill_rect(x as f64 * CELL, y as f64 * CELL, CELL, CELL, Color::hsl(hue, 70.0, 60.0));
            }
        }
    }
}

pub(super) fn fourier_circles(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (cx, cy) = (ctx.w / 2.0, ctx.h / 2.0);
    for i in 0..8 {
        let fi = i as f64;
        let r = 30.0 + fi * 15.0;
        let a = t * 0.02 * (fi + 1.0);
        out.stroke_circle(cx, cy, r, 2.0, Color::hsl(fi * 45.0, 70.0, 60.0));
        out.fill_circle(cx + a.cos() * r, cy + a.sin() * r, 4.0, Color::hsl(fi * 45.0, 70.0, 70.0));
    }
}

pub(super) fn lorenz_curve(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (cx, cy) = (ctx.w / 2.0, ctx.h / 2.0);
    for i in 0..100 {
        let s = t * 0.02 + i as f64 * 0.1;
        let x = cx + (s * 1.2).sin() * (s * 0.8).cos() * 150.0;
        let y = cy + (s * 0.9).sin() * (s * 1.1).cos() * 100.0;
        let hue = (i as f64 * 3.6 + t) % 360.0;
        out.fill_circle(x, y, 2.0, Color::hsl(hue, 70.0, 60.0));
    }
}

pub(super) fn fibonacci_spiral(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (cx, cy) = (ctx.w / 2.0, ctx.h / 2.0);
    let step = TAU / GOLDEN_RATIO;

    for i in 0..200 {
        let fi = i as f64;
        let a = fi * step + t * 0.01;
        let r = fi.sqrt() * 15.0;
        let hue = (fi * 137.5 + t * 0.5) % 360.0;
        let size = (1.0 + (fi * 0.1 + t * 0.02).sin() * 2.0).max(0.5);
        out.fill_circle(cx + a.cos() * r, cy + a.sin() * r, size, Color::hsl(hue, 70.0, 60.0));
    }

    let frame = Color::hsla(60.0, 70.0, 70.0, 0.5);
    let (mut a, mut b) = (1.0_f64, 1.0_f64);
    for i in 0..8 {
        let angle = i as f64 * step + t * 0.01;
        let x = cx + angle.cos() * a * 3.0;
        let y = cy + angle.sin() * a * 3.0;
        out.stroke_rect(x - a, y - a, a * 2.0, a * 2.0, 2.0, frame);
        (a, b) = (b, a + b);
    }
}

pub(super) fn percolation(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    const CELL: f64 = 12.0;
    let t = ctx.time();
    let cols = (ctx.w / CELL).floor() as usize;
    let rows = (ctx.h / CELL).floor() as usize;

    for x in 0..cols {
        for y in 0..rows {
            let (fx, fy) = (x as f64, y as f64);
            let v = (fx * 0.2 + t * 0.01).sin() * (fy * 0.2 + t * 0.01).cos();
            if v > 0.3 {
                let hue = (fx * 7.0 + fy * 7.0 + t) % 360.0;
                out.fill_rect(fx * CELL, fy * CELL, CELL, CELL, Color::hsl(hue, 70.0, 60.0));
            }
        }
    }
}

pub(super) fn mountains(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (w, h) = (ctx.w, ctx.h);
    let mut outline = vec![(0.0, h)];
    for x in (0..w.ceil() as usize).step_by(10) {
        let fx = x as f64;
        let height = 200.0 + (fx * 0.02).sin() * 100.0 + (fx * 0.005 + t * 0.01).sin() * 50.0;
        outline.push((fx, h - height));
    }
    outline.push((w, h));
    out.fill_polygon(&outline, Color::hsl(120.0 + (t * 0.01).sin() * 30.0, 50.0, 40.0));
}

pub(super) fn orbits(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (cx, cy) = (ctx.w / 2.0, ctx.h / 2.0);
    for i in 0..8 {
        let fi = i as f64;
        let a = t * 0.01 * (fi + 1.0) + fi * PI / 4.0;
        let r = 50.0 + fi * 30.0;
        let hue = (fi * 45.0 + t) % 360.0;
        out.fill_circle(cx + a.cos() * r, cy + a.sin() * r, 5.0 + fi, Color::hsl(hue, 70.0, 60.0));
        out.stroke_circle(cx, cy, r, 1.0, Color::hsla(hue, 70.0, 60.0, 0.3));
    }
}

pub(super) fn boid_orbits(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let (cx, cy) = (ctx.w / 2.0, ctx.h / 2.0);
    for i in 0..30 {
        let s = t * 0.02 + i as f64 * 0.2;
        let x = cx + s.sin() * 200.0 + (s * 2.3).sin() * 50.0;
        let y = cy + s.cos() * 150.0 + (s * 1.7).cos() * 30.0;
        let hue = (i as f64 * 12.0 + t) % 360.0;
        out.fill_circle(x, y, 3.0, Color::hsl(hue, 70.0, 60.0));
    }
}
