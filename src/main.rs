use std::path::PathBuf;

use clap::Parser;
use scenery_ngin::{SceneConfig, flow, render::LogSurface};

/// Generate and animate a procedural outdoor scene without a window.
#[derive(Parser, Debug)]
#[command(name = "scenery-ngin", version, about)]
struct Cli {
    /// TOML file overriding the default tunables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible worlds; overrides the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many animation steps. Runs forever when omitted.
    #[arg(long)]
    steps: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut surface = LogSurface::default();
    flow::run(config, &mut surface, cli.steps)?;
    log::info!("drew {} frames", surface.frames());
    Ok(())
}
