use super::vector::Vec2;
use fastrand::Rng;

pub const NETWORK_NODES: usize = 80;
pub const PARTICLE_COUNT: usize = 200;
pub const FLUID_GRID: usize = 40;
pub const FLOCK_SIZE: usize = 50;

/// Persistent per-pattern data. Only the active pattern's variant is ever populated; every
/// pattern change goes back to `Empty`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PatternState {
    #[default]
    Empty,
    Network(Vec<Node>),
    Particles(Vec<Particle>),
    Lightning(Vec<Bolt>),
    Fluid(FluidGrid),
    Flock(Vec<Boid>),
}

impl PatternState {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Network(_) => "network",
            Self::Particles(_) => "particles",
            Self::Lightning(_) => "lightning",
            Self::Fluid(_) => "fluid",
            Self::Flock(_) => "flock",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
    pub hue: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bolt {
    pub points: Vec<(f64, f64)>,
    pub width: f64,
}

/// Square density grid, stored column-major (`x * size + y`).
#[derive(Clone, Debug, PartialEq)]
pub struct FluidGrid {
    pub size: usize,
    pub density: Vec<f64>,
    pub velocity: Vec<Vec2>,
}

impl FluidGrid {
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.density[self.idx(x, y)]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

// Uniform in [-half, half).
fn jitter(rng: &mut Rng, half: f64) -> f64 {
    (rng.f64() - 0.5) * 2.0 * half
}

pub fn spawn_network(rng: &mut Rng, w: f64, h: f64) -> Vec<Node> {
    (0..NETWORK_NODES)
        .map(|_| Node {
            x: rng.f64() * w,
            y: rng.f64() * h,
            vx: jitter(rng, 0.5),
            vy: jitter(rng, 0.5),
            radius: rng.f64() * 3.0 + 2.0,
        })
        .collect()
}

pub fn spawn_particles(rng: &mut Rng, w: f64, h: f64) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            x: rng.f64() * w,
            y: rng.f64() * h,
            vx: jitter(rng, 2.0),
            vy: jitter(rng, 2.0),
            life: rng.f64() * 100.0 + 50.0,
            max_life: rng.f64() * 100.0 + 50.0,
            size: rng.f64() * 3.0 + 1.0,
            hue: rng.f64() * 360.0,
        })
        .collect()
}

pub fn respawn_particle(p: &mut Particle, rng: &mut Rng, w: f64, h: f64) {
    p.x = rng.f64() * w;
    p.y = rng.f64() * h;
    p.vx = jitter(rng, 2.0);
    p.vy = jitter(rng, 2.0);
    p.life = p.max_life;
    p.hue = rng.f64() * 360.0;
}

pub fn spawn_fluid(rng: &mut Rng) -> FluidGrid {
    let n = FLUID_GRID * FLUID_GRID;
    FluidGrid {
        size: FLUID_GRID,
        density: (0..n).map(|_| rng.f64() * 0.5).collect(),
        velocity: vec![Vec2::ZERO; n],
    }
}

pub fn spawn_flock(rng: &mut Rng, w: f64, h: f64) -> Vec<Boid> {
    (0..FLOCK_SIZE)
        .map(|_| Boid {
            position: Vec2::new(rng.f64() * w, rng.f64() * h),
            velocity: Vec2::new(jitter(rng, 1.0), jitter(rng, 1.0)),
            acceleration: Vec2::ZERO,
        })
        .collect()
}

/// 3..=6 main bolts from the top edge to the bottom, each with an even chance of a side fork.
pub fn spawn_lightning(rng: &mut Rng, w: f64, h: f64) -> Vec<Bolt> {
    let mut bolts = Vec::new();
    let count = 3 + rng.usize(0..4);

    for _ in 0..count {
        let start_x = w * (0.2 + rng.f64() * 0.6);
        let start_y = 0.0;
        let end_x = start_x + jitter(rng, 100.0);
        let end_y = h;

        let segments = 20 + rng.usize(0..30);
        let mut points = Vec::with_capacity(segments + 1);
        points.push((start_x, start_y));
        for i in 1..segments {
            let t = i as f64 / segments as f64;
            let x = start_x + (end_x - start_x) * t + jitter(rng, 20.0);
            let y = start_y + (end_y - start_y) * t + jitter(rng, 10.0);
            points.push((x, y));
        }
        points.push((end_x, end_y));

        let fork_at = if rng.f64() > 0.5 {
            Some((segments as f64 * (0.3 + rng.f64() * 0.4)).floor() as usize)
        } else {
            None
        };
        let fork_origin = fork_at.map(|i| points[i.min(points.len() - 1)]);

        bolts.push(Bolt {
            points,
            width: 2.0 + rng.f64() * 3.0,
        });

        if let Some((ox, oy)) = fork_origin {
            let fork_segments = 10 + rng.usize(0..15);
            let mut fork = Vec::with_capacity(fork_segments);
            fork.push((ox, oy));
            for i in 1..fork_segments {
                let t = i as f64 / fork_segments as f64;
                let angle = rng.f64() * std::f64::consts::FRAC_PI_2 - std::f64::consts::FRAC_PI_4;
                let dist = t * 150.0;
                let x = ox + angle.cos() * dist + jitter(rng, 15.0);
                let y = oy + angle.sin() * dist + t * 100.0;
                fork.push((x, y));
            }
            bolts.push(Bolt {
                points: fork,
                width: 1.0 + rng.f64() * 2.0,
            });
        }
    }

    bolts
}
