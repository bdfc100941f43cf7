use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use tui_genart::config::BoidsMode;
use tui_genart::export;
use tui_genart::visual::{find_pattern, Engine, PATTERN_COUNT};

const DEFAULT_OUT_DIR: &str = "frames";
const DEFAULT_SEED: u64 = 0x6A7E_2026;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "render_frames",
    version,
    about = "Headless pattern render to a numbered PNG sequence"
)]
pub(crate) struct Cli {
    #[arg(long, value_name = "INDEX_OR_SUBSTRING")]
    pub(crate) pattern: Option<String>,

    #[arg(long, default_value_t = 60)]
    pub(crate) frames: u32,

    #[arg(long, default_value_t = 800)]
    pub(crate) width: usize,

    #[arg(long, default_value_t = 600)]
    pub(crate) height: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub(crate) seed: u64,

    #[arg(long, value_enum, default_value_t = BoidsMode::Orbit)]
    pub(crate) boids: BoidsMode,

    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub(crate) out: PathBuf,
}

pub(crate) fn validate_args(args: &Cli) -> Result<()> {
    if args.width == 0 {
        bail!("--width must be >= 1");
    }
    if args.height == 0 {
        bail!("--height must be >= 1");
    }
    if args.frames == 0 {
        bail!("--frames must be >= 1");
    }
    Ok(())
}

pub(crate) fn resolve_pattern(selection: Option<&str>) -> Result<usize> {
    let Some(raw) = selection else {
        return Ok(0);
    };
    match find_pattern(raw) {
        Some(id) => Ok(id),
        None => bail!(
            "no pattern matches {raw:?} (ids 0..{}, or part of a name)",
            PATTERN_COUNT - 1
        ),
    }
}

pub(crate) fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("frame-{index:05}.png"))
}

/// Renders `args.frames` frames; frame 0 is the initial draw, later ones advance the clock.
pub(crate) fn run(args: &Cli) -> Result<Vec<PathBuf>> {
    validate_args(args)?;
    let pattern = resolve_pattern(args.pattern.as_deref())?;

    let mut engine = Engine::with_seed(args.width, args.height, args.seed)
        .context("create drawing surface")?;
    engine.set_boids_mode(args.boids);
    engine.select_pattern(pattern);
    info!(
        "rendering {} frames of {} at {}x{}",
        args.frames,
        engine.pattern_name(),
        args.width,
        args.height
    );

    let mut written = Vec::with_capacity(args.frames as usize);
    for i in 0..args.frames {
        if i > 0 {
            engine.render_frame();
        }
        let path = frame_path(&args.out, i);
        export::write_png(engine.surface(), &path)
            .with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    let written = run(&args)?;
    println!("wrote {} frames to {}", written.len(), args.out.display());
    Ok(())
}
