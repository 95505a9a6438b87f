mod config;
mod render;

use std::{error::Error, io::Write, path::PathBuf};

use bandfx::{Gradient, GradientError};
use clap::Parser;
use config::{ConfigError, RenderConfig};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid gradient: {0}")]
    Gradient(#[from] GradientError),

    #[error("grid of {width}x{height} does not fit the coordinate range")]
    GridTooLarge { width: u32, height: u32 },
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fills a grid with the bands of a gradient",
    long_about = None
)]
struct Cli {
    #[arg(short, long, default_value = "gradient.json")]
    config: PathBuf,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    #[arg(short, long)]
    verbose: bool,
}

fn build(cli: &Cli) -> Result<(Gradient, i32, i32), CliError> {
    let config = RenderConfig::from_path(&cli.config)?;
    let width = cli.width.unwrap_or(config.width);
    let height = cli.height.unwrap_or(config.height);
    let (Ok(grid_width), Ok(grid_height)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(CliError::GridTooLarge { width, height });
    };

    let gradient = Gradient::new(config.gradient)?;
    Ok((gradient, grid_width, grid_height))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    TermLogger::init(
        if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let (gradient, width, height) = build(&cli)?;
    info!(
        "Rendering {}x{} grid with {} bands from {}",
        width,
        height,
        gradient.bands().len(),
        cli.config.display()
    );

    std::io::stdout().write_all(render::render(&gradient, width, height).as_bytes())?;

    Ok(())
}
