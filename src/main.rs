mod frontend;

use anyhow::{Context, Result};
use clap::Parser;
use snake_attack::{Game, GameConfig, HighScoreFile};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_attack")]
#[command(version, about = "Single-screen snake arcade game")]
struct Cli {
    /// Game configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Where the best score is kept between runs
    #[arg(long, default_value = "highscore.json")]
    high_score: PathBuf,

    /// Level id from the configuration
    #[arg(long, default_value = "1")]
    level: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config).with_context(|| format!("loading {}", cli.config.display()))?;
    config.level(cli.level)?;
    info!(config = %cli.config.display(), level = cli.level, "configuration loaded");

    let conf = frontend::window_conf(&config);
    let game = Game::new(config, Box::new(HighScoreFile::new(cli.high_score))).context("failed to set up the first run")?;
    let level = cli.level;

    macroquad::Window::from_config(conf, async move {
        if let Err(err) = frontend::run(game, level).await {
            error!("{err:#}");
            std::process::exit(1);
        }
    });
    Ok(())
}
