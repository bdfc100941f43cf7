use super::RenderCtx;
use crate::visual::color::Color;
use crate::visual::surface::Surface;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI};

const FLOW_COLS: usize = 80;
const FLOW_ROWS: usize = 60;
const FLOW_CELL: f64 = 10.0;
const FLOW_INC: f64 = 0.1;

pub(super) fn flow_field(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    let mut zoff = t * 0.01;

    for y in 0..FLOW_ROWS {
        let mut xoff = 0.0;
        for x in 0..FLOW_COLS {
            let angle = ctx.noise.sample(xoff, y as f64 * FLOW_INC, zoff) * PI * 2.0 * 4.0;
            let length = ctx.noise.sample(xoff, y as f64 * FLOW_INC, zoff + 1000.0) * 20.0;

            let px = x as f64 * FLOW_CELL;
            let py = y as f64 * FLOW_CELL;
            let hue = (angle.to_degrees() + t * 2.0) % 360.0;
            out.stroke_line(
                px,
                py,
                px + angle.cos() * length,
                py + angle.sin() * length,
                1.0,
                Color::hsl(hue, 70.0, 60.0),
            );

            xoff += FLOW_INC;
        }
        zoff += FLOW_INC;
    }
}

pub(super) fn fractal_tree(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let wind = (ctx.time() * 0.05).sin() * 0.3;
    tree_branch(ctx, out, ctx.w / 2.0, ctx.h, 100.0, -FRAC_PI_2 + wind, 8);
}

fn tree_branch(
    ctx: &RenderCtx<'_>,
    out: &mut Surface,
    x: f64,
    y: f64,
    length: f64,
    angle: f64,
    depth: u32,
) {
    if depth == 0 {
        return;
    }
    let t = ctx.time();
    let d = depth as f64;
    let end_x = x + angle.cos() * length;
    let end_y = y + angle.sin() * length;

    let color = Color::hsl(120.0 + d * 10.0 + (t * 0.1 + d).sin() * 30.0, 70.0, 60.0 - d * 5.0);
    out.stroke_line(x, y, end_x, end_y, d * 0.5, color);

    let spread = FRAC_PI_6 + (ctx.noise.sample(x * 0.01, y * 0.01, t * 0.01) - 0.5) * 0.5;
    let sway = (t * 0.03 + d * 0.5).sin() * 0.2;
    tree_branch(ctx, out, end_x, end_y, length * 0.75, angle - spread + sway, depth - 1);
    tree_branch(ctx, out, end_x, end_y, length * 0.75, angle + spread - sway, depth - 1);
}

const LSYSTEM_MAX_DEPTH: u32 = 6;
const LSYSTEM_MIN_LENGTH: f64 = 5.0;

// Children only sprout past depth 1, so only the trunk is ever drawn.
pub(super) fn lsystem_tree(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    lsystem_branch(ctx, out, ctx.w / 2.0, ctx.h - 20.0, -FRAC_PI_2, 80.0, 0);
}

fn lsystem_branch(
    ctx: &RenderCtx<'_>,
    out: &mut Surface,
    x: f64,
    y: f64,
    angle: f64,
    length: f64,
    depth: u32,
) {
    if depth > LSYSTEM_MAX_DEPTH || length < LSYSTEM_MIN_LENGTH {
        return;
    }
    let d = depth as f64;
    let end_x = x + angle.cos() * length;
    let end_y = y + angle.sin() * length;

    let color = Color::hsl(120.0 + d * 20.0, 70.0, 60.0 - d * 5.0);
    out.stroke_line(x, y, end_x, end_y, (6.0 - d).max(1.0), color);

    if depth > 1 {
        let sway = (ctx.time() * 0.02 + d).sin() * 0.3;
        lsystem_branch(ctx, out, end_x, end_y, angle - 0.5 + sway, length * 0.7, depth + 1);
        lsystem_branch(ctx, out, end_x, end_y, angle + 0.5 - sway, length * 0.7, depth + 1);
    }
}
