use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = tui_genart::config::Config::parse();
    if cfg.list_patterns {
        tui_genart::app::list_patterns(&mut std::io::stdout().lock())?;
        return Ok(());
    }

    tui_genart::app::run(cfg)
}
