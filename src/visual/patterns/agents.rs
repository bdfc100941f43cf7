use super::{layouts, BoidsMode, RenderCtx};
use crate::visual::color::Color;
use crate::visual::state::{
    respawn_particle, spawn_fluid, spawn_flock, spawn_lightning, spawn_network, spawn_particles,
    PatternState,
};
use crate::visual::surface::Surface;
use crate::visual::vector::{self, Vec2};
use log::debug;

/// Lightning is rebuilt on every frame whose clock is a multiple of this.
pub const LIGHTNING_PERIOD: u64 = 60;
/// A particle respawns once its remaining life drops to this value.
pub const PARTICLE_RESPAWN_LIFE: f64 = 0.0;

const LINK_DISTANCE: f64 = 120.0;
const LIGHTNING_GLOW: u32 = 0x88CCFF;
const FLUID_RELAXATION: f64 = 0.1;
const FLUID_VELOCITY_DAMPING: f64 = 0.95;
const FLUID_BUBBLE_THRESHOLD: f64 = 0.3;

const SEPARATION_RADIUS: f64 = 25.0;
const NEIGHBOR_RADIUS: f64 = 50.0;
const DESIRED_SPEED: f64 = 1.0;
const MAX_FORCE: f64 = 0.03;
const SPEED_LIMIT: f64 = 2.0;

pub(super) fn network(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let (t, w, h) = (ctx.time(), ctx.w, ctx.h);
    if !matches!(ctx.state, PatternState::Network(_)) {
        let nodes = spawn_network(ctx.rng, w, h);
        debug!("network: spawned {} nodes", nodes.len());
        *ctx.state = PatternState::Network(nodes);
    }
    let PatternState::Network(nodes) = &mut *ctx.state else {
        return;
    };

    for node in nodes.iter_mut() {
        node.x += node.vx;
        node.y += node.vy;
        if node.x < 0.0 || node.x > w {
            node.vx *= -1.0;
        }
        if node.y < 0.0 || node.y > h {
            node.vy *= -1.0;
        }
        node.x = node.x.clamp(0.0, w);
        node.y = node.y.clamp(0.0, h);
    }

    let red = 100.0 + (t * 0.02).sin() * 50.0;
    for (i, node) in nodes.iter().enumerate() {
        for (j, other) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = ((node.x - other.x).powi(2) + (node.y - other.y).powi(2)).sqrt();
            if d < LINK_DISTANCE {
                let opacity = (1.0 - d / LINK_DISTANCE) * 0.8;
                out.stroke_line(
                    node.x,
                    node.y,
                    other.x,
                    other.y,
                    opacity * 2.0,
                    Color::rgba(red, 200.0, 255.0, opacity),
                );
            }
        }

        let pulse = (t * 0.05 + i as f64 * 0.1).sin() * 0.5 + 0.5;
        out.fill_circle(
            node.x,
            node.y,
            node.radius + pulse,
            Color::rgba(100.0, 200.0, 255.0, 0.7 + pulse * 0.3),
        );
    }
}

pub(super) fn particles(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let (t, w, h) = (ctx.time(), ctx.w, ctx.h);
    if !matches!(ctx.state, PatternState::Particles(_)) {
        let particles = spawn_particles(ctx.rng, w, h);
        debug!("particles: spawned {}", particles.len());
        *ctx.state = PatternState::Particles(particles);
    }
    let PatternState::Particles(particles) = &mut *ctx.state else {
        return;
    };

    for p in particles.iter_mut() {
        p.x += p.vx + (t * 0.01 + p.x * 0.01).sin() * 0.5;
        p.y += p.vy + (t * 0.01 + p.y * 0.01).cos() * 0.5;
        p.life -= 1.0;

        if p.x < 0.0 || p.x > w {
            p.vx *= -0.8;
        }
        if p.y < 0.0 || p.y > h {
            p.vy *= -0.8;
        }
        p.x = p.x.clamp(0.0, w);
        p.y = p.y.clamp(0.0, h);

        if p.life <= PARTICLE_RESPAWN_LIFE {
            respawn_particle(p, ctx.rng, w, h);
        }

        // life may start above max_life, so alpha can exceed 1 before the colour clamps it
        let alpha = p.life / p.max_life;
        let size = p.size * alpha;
        let hue = (p.hue + t * 0.5) % 360.0;
        out.fill_circle(p.x, p.y, size, Color::hsla(hue, 70.0, 60.0, alpha));
        out.fill_radial_glow(p.x, p.y, size * 2.0, Color::hsla(hue, 70.0, 60.0, alpha * 0.3));
    }
}

pub(super) fn lightning(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let t = ctx.time();
    if !matches!(ctx.state, PatternState::Lightning(_)) || ctx.t % LIGHTNING_PERIOD == 0 {
        let bolts = spawn_lightning(ctx.rng, ctx.w, ctx.h);
        debug!("lightning: regenerated {} bolts at t={}", bolts.len(), ctx.t);
        *ctx.state = PatternState::Lightning(bolts);
    }
    let PatternState::Lightning(bolts) = &*ctx.state else {
        return;
    };

    let core = Color::hsla(
        220.0 + (t * 0.1).sin() * 40.0,
        100.0,
        70.0 + (t * 0.2).sin() * 30.0,
        0.8,
    );
    let glow = Color::hex(LIGHTNING_GLOW);
    for bolt in bolts {
        out.stroke_polyline(&bolt.points, bolt.width + 12.0, glow.with_alpha(0.12));
        out.stroke_polyline(&bolt.points, bolt.width + 6.0, glow.with_alpha(0.2));
        out.stroke_polyline(&bolt.points, bolt.width, core);
    }
}

pub(super) fn fluid(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let (t, w, h) = (ctx.time(), ctx.w, ctx.h);
    if !matches!(ctx.state, PatternState::Fluid(_)) {
        debug!("fluid: seeding density grid");
        *ctx.state = PatternState::Fluid(spawn_fluid(ctx.rng));
    }
    let PatternState::Fluid(grid) = &mut *ctx.state else {
        return;
    };

    let n = grid.size;
    // In-place sweep: cells already visited this frame feed their neighbours.
    for x in 1..n.saturating_sub(1) {
        for y in 1..n.saturating_sub(1) {
            let avg =
                (grid.at(x - 1, y) + grid.at(x + 1, y) + grid.at(x, y - 1) + grid.at(x, y + 1)) / 4.0;
            let i = grid.idx(x, y);
            let mut d = grid.density[i];
            d += (avg - d) * FLUID_RELAXATION;
            d += (t * 0.02 + x as f64 * 0.1 + y as f64 * 0.1).sin() * 0.01;

            let v = &mut grid.velocity[i];
            v.x += (ctx.rng.f64() - 0.5) * 0.02;
            v.y += (ctx.rng.f64() - 0.5) * 0.02;
            *v = vector::scale(*v, FLUID_VELOCITY_DAMPING);

            grid.density[i] = d.clamp(0.0, 1.0);
        }
    }

    let cw = w / n as f64;
    let ch = h / n as f64;
    for x in 0..n {
        for y in 0..n {
            let density = grid.at(x, y);
            let hue = (density * 240.0 + t * 0.5) % 360.0;
            let (cx, cy) = (x as f64 * cw, y as f64 * ch);
            out.fill_rect(cx, cy, cw, ch, Color::hsl(hue, 70.0, 20.0 + density * 60.0));

            if density > FLUID_BUBBLE_THRESHOLD {
                out.fill_circle(
                    cx + cw / 2.0,
                    cy + ch / 2.0,
                    (density * 3.0).max(0.5),
                    Color::hsla(hue, 70.0, 80.0, 0.6),
                );
            }
        }
    }
}

pub(super) fn boids(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    match ctx.boids {
        BoidsMode::Orbit => layouts::boid_orbits(ctx, out),
        BoidsMode::Flocking => flocking(ctx, out),
    }
}

fn flocking(ctx: &mut RenderCtx<'_>, out: &mut Surface) {
    let (t, w, h) = (ctx.time(), ctx.w, ctx.h);
    if !matches!(ctx.state, PatternState::Flock(_)) {
        let flock = spawn_flock(ctx.rng, w, h);
        debug!("boids: spawned flock of {}", flock.len());
        *ctx.state = PatternState::Flock(flock);
    }
    let PatternState::Flock(flock) = &mut *ctx.state else {
        return;
    };

    let snapshot: Vec<(Vec2, Vec2)> = flock.iter().map(|b| (b.position, b.velocity)).collect();
    for boid in flock.iter_mut() {
        let force = vector::add(
            vector::add(
                separation(boid.position, boid.velocity, &snapshot),
                alignment(boid.position, boid.velocity, &snapshot),
            ),
            cohesion(boid.position, boid.velocity, &snapshot),
        );
        boid.acceleration = force;
        boid.velocity = vector::limit(vector::add(boid.velocity, boid.acceleration), SPEED_LIMIT);
        boid.position = vector::add(boid.position, boid.velocity);
        boid.position.x = wrap(boid.position.x, w);
        boid.position.y = wrap(boid.position.y, h);
        boid.acceleration = Vec2::ZERO;
    }

    for (i, boid) in flock.iter().enumerate() {
        let hue = (i as f64 * 12.0 + t) % 360.0;
        out.fill_circle(boid.position.x, boid.position.y, 3.0, Color::hsl(hue, 70.0, 60.0));
    }
}

// Toroidal wrap into [0, max).
fn wrap(v: f64, max: f64) -> f64 {
    let r = v.rem_euclid(max);
    if r >= max { 0.0 } else { r }
}

// Reynolds steering: head toward `desired` at cruise speed, capped at MAX_FORCE.
fn steer(desired: Vec2, velocity: Vec2) -> Vec2 {
    let target = vector::scale(vector::normalize(desired), DESIRED_SPEED);
    vector::limit(vector::sub(target, velocity), MAX_FORCE)
}

fn separation(pos: Vec2, vel: Vec2, flock: &[(Vec2, Vec2)]) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for &(other, _) in flock {
        let d = vector::distance(pos, other);
        if d > 0.0 && d < SEPARATION_RADIUS {
            let away = vector::scale(vector::normalize(vector::sub(pos, other)), 1.0 / d);
            sum = vector::add(sum, away);
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    steer(vector::scale(sum, 1.0 / count as f64), vel)
}

fn alignment(pos: Vec2, vel: Vec2, flock: &[(Vec2, Vec2)]) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for &(other, other_vel) in flock {
        let d = vector::distance(pos, other);
        if d > 0.0 && d < NEIGHBOR_RADIUS {
            sum = vector::add(sum, other_vel);
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    steer(vector::scale(sum, 1.0 / count as f64), vel)
}

fn cohesion(pos: Vec2, vel: Vec2, flock: &[(Vec2, Vec2)]) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for &(other, _) in flock {
        let d = vector::distance(pos, other);
        if d > 0.0 && d < NEIGHBOR_RADIUS {
            sum = vector::add(sum, other);
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    let centre = vector::scale(sum, 1.0 / count as f64);
    steer(vector::sub(centre, pos), vel)
}
