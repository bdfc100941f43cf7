use anyhow::bail;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "tui_genart", about = "Procedural pattern playground for the terminal")]
pub struct Config {
    /// Pattern id (0-21) or part of a pattern name. Random when omitted.
    #[arg(long)]
    pub pattern: Option<String>,

    #[arg(long, default_value_t = 800)]
    pub width: usize,

    #[arg(long, default_value_t = 600)]
    pub height: usize,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub paused: bool,

    #[arg(long, value_enum, default_value_t = BoidsMode::Orbit)]
    pub boids: BoidsMode,

    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,

    #[arg(long, default_value_t = false)]
    pub list_patterns: bool,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sync_updates: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BoidsMode {
    #[default]
    #[value(alias = "lissajous")]
    Orbit,
    #[value(alias = "flock", alias = "sim")]
    Flocking,
}

impl BoidsMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Flocking => "flocking",
        }
    }
}

impl Config {
    /// Checks the parts clap cannot express on its own.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 {
            bail!("--width must be >= 1");
        }
        if self.height == 0 {
            bail!("--height must be >= 1");
        }
        if self.fps == 0 {
            bail!("--fps must be >= 1");
        }
        Ok(())
    }
}
