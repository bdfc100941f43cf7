pub mod color;
pub mod noise;
pub mod patterns;
pub mod state;
pub mod surface;
pub mod vector;

use fastrand::Rng;
use log::{info, warn};

pub use color::Color;
pub use noise::NoiseField;
pub use patterns::{find_pattern, lookup, BoidsMode, PatternDef, RenderCtx, PATTERNS, PATTERN_COUNT};
pub use state::PatternState;
pub use surface::{Surface, SurfaceError};

/// Owns the surface, the frame clock, the active pattern and its persistent state.
///
/// `select_pattern` and `regenerate_current_pattern` draw immediately at the current clock;
/// only `render_frame` advances it.
pub struct Engine {
    surface: Surface,
    noise: NoiseField,
    state: PatternState,
    rng: Rng,
    time: u64,
    pattern: usize,
    boids: BoidsMode,
    running: bool,
}

impl Engine {
    pub fn new(width: usize, height: usize) -> Result<Self, SurfaceError> {
        Self::with_rng(width, height, Rng::new())
    }

    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, SurfaceError> {
        Self::with_rng(width, height, Rng::with_seed(seed))
    }

    fn with_rng(width: usize, height: usize, rng: Rng) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: Surface::new(width, height)?,
            noise: NoiseField::new(),
            state: PatternState::Empty,
            rng,
            time: 0,
            pattern: 0,
            boids: BoidsMode::default(),
            running: true,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn state(&self) -> &PatternState {
        &self.state
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    /// The id as last requested; may be out of range, in which case routine 0 draws.
    pub fn pattern(&self) -> usize {
        self.pattern
    }

    pub fn pattern_name(&self) -> &'static str {
        lookup(self.pattern).name
    }

    pub fn boids_mode(&self) -> BoidsMode {
        self.boids
    }

    pub fn set_boids_mode(&mut self, mode: BoidsMode) {
        if self.boids != mode {
            self.boids = mode;
            info!("boids mode: {}", mode.label());
            self.reset_for_new_pattern();
        }
    }

    pub fn select_pattern(&mut self, id: usize) {
        if id >= PATTERN_COUNT {
            warn!("unknown pattern {id}, drawing {} instead", PATTERNS[0].name);
        }
        self.pattern = id;
        self.reset_for_new_pattern();
        info!("pattern {} ({}) at t={}", id, self.pattern_name(), self.time);
        self.draw();
    }

    /// `None` picks a uniformly random pattern; `Some(id)` redraws that one from scratch.
    pub fn regenerate_current_pattern(&mut self, id: Option<usize>) {
        let id = id.unwrap_or_else(|| self.rng.usize(0..PATTERN_COUNT));
        self.pattern = id;
        self.reset_for_new_pattern();
        info!("regenerated pattern {} ({})", id, self.pattern_name());
        self.draw();
    }

    pub fn next_pattern(&mut self) {
        let cur = self.pattern.min(PATTERN_COUNT - 1);
        self.select_pattern((cur + 1) % PATTERN_COUNT);
    }

    pub fn prev_pattern(&mut self) {
        let cur = self.pattern.min(PATTERN_COUNT - 1);
        self.select_pattern((cur + PATTERN_COUNT - 1) % PATTERN_COUNT);
    }

    pub fn reset_for_new_pattern(&mut self) {
        self.state = PatternState::Empty;
    }

    pub fn render_frame(&mut self) {
        self.time += 1;
        self.draw();
    }

    /// One scheduler step: renders a frame unless paused.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.render_frame();
        true
    }

    pub fn pause_scheduling(&mut self) {
        self.running = false;
    }

    pub fn resume_scheduling(&mut self) {
        self.running = true;
    }

    pub fn toggle_scheduling(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn draw(&mut self) {
        self.surface.clear();
        let w = self.surface.width() as f64;
        let h = self.surface.height() as f64;
        let def = lookup(self.pattern);
        let mut ctx = RenderCtx {
            t: self.time,
            w,
            h,
            noise: &self.noise,
            state: &mut self.state,
            rng: &mut self.rng,
            boids: self.boids,
        };
        (def.render)(&mut ctx, &mut self.surface);
    }
}
