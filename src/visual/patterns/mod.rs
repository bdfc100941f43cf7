mod agents;
mod fields;
mod fractals;
mod layouts;

use super::noise::NoiseField;
use super::state::PatternState;
use super::surface::Surface;
use fastrand::Rng;

pub use crate::config::BoidsMode;

pub use fractals::{escape_time, MandelbrotView, ESCAPE_RADIUS_SQ, MAX_ITERATIONS};
pub use agents::{LIGHTNING_PERIOD, PARTICLE_RESPAWN_LIFE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Noise,
    PixelField,
    Agents,
    ClosedForm,
}

impl Family {
    pub fn label(self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::PixelField => "pixel field",
            Self::Agents => "agents",
            Self::ClosedForm => "closed form",
        }
    }
}

/// Everything a routine may touch while drawing one frame.
pub struct RenderCtx<'a> {
    pub t: u64,
    pub w: f64,
    pub h: f64,
    pub noise: &'a NoiseField,
    pub state: &'a mut PatternState,
    pub rng: &'a mut Rng,
    pub boids: BoidsMode,
}

impl RenderCtx<'_> {
    #[inline]
    pub fn time(&self) -> f64 {
        self.t as f64
    }
}

pub type PatternFn = fn(&mut RenderCtx<'_>, &mut Surface);

pub struct PatternDef {
    pub name: &'static str,
    pub family: Family,
    pub render: PatternFn,
}

pub const PATTERN_COUNT: usize = 22;

pub static PATTERNS: [PatternDef; PATTERN_COUNT] = [
    def("Flow Field", Family::Noise, fields::flow_field),
    def("Fractal Tree", Family::Noise, fields::fractal_tree),
    def("Voronoi", Family::ClosedForm, layouts::voronoi),
    def("Spiral", Family::ClosedForm, layouts::spiral),
    def("Network", Family::Agents, agents::network),
    def("Wave Interference", Family::ClosedForm, layouts::wave_interference),
    def("Particles", Family::Agents, agents::particles),
    def("Mandelbrot", Family::PixelField, fractals::mandelbrot),
    def("DNA Helix", Family::ClosedForm, layouts::dna_helix),
    def("Lightning", Family::Agents, agents::lightning),
    def("Kaleidoscope", Family::ClosedForm, layouts::kaleidoscope),
    def("Fluid", Family::Agents, agents::fluid),
    def("L-System Tree", Family::Noise, fields::lsystem_tree),
    def("Cellular Rings", Family::ClosedForm, layouts::cellular_rings),
    def("Fourier Circles", Family::ClosedForm, layouts::fourier_circles),
    def("Lorenz Curve", Family::ClosedForm, layouts::lorenz_curve),
    def("Fibonacci Spiral", Family::ClosedForm, layouts::fibonacci_spiral),
    def("Percolation", Family::ClosedForm, layouts::percolation),
    def("Mountains", Family::ClosedForm, layouts::mountains),
    def("Orbits", Family::ClosedForm, layouts::orbits),
    def("Boids", Family::Agents, agents::boids),
    def("Julia", Family::PixelField, fractals::julia),
];

const fn def(name: &'static str, family: Family, render: PatternFn) -> PatternDef {
    PatternDef {
        name,
        family,
        render,
    }
}

/// Ids past the end of the table resolve to the flow field.
pub fn lookup(id: usize) -> &'static PatternDef {
    PATTERNS.get(id).unwrap_or(&PATTERNS[0])
}

/// Accepts a numeric id or a case-insensitive fragment of a pattern name.
pub fn find_pattern(query: &str) -> Option<usize> {
    let q = query.trim();
    if let Ok(id) = q.parse::<usize>() {
        return (id < PATTERN_COUNT).then_some(id);
    }
    let q = q.to_ascii_lowercase();
    if q.is_empty() {
        return None;
    }
    PATTERNS
        .iter()
        .position(|p| p.name.to_ascii_lowercase() == q)
        .or_else(|| {
            PATTERNS
                .iter()
                .position(|p| p.name.to_ascii_lowercase().contains(&q))
        })
}
