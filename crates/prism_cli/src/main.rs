use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::Scene;
use prism_renderer::{render, RenderConfig, MAX_REFLECT_DEPTH};

mod output;

/// Render the built-in scene to a binary PPM image.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
struct Args {
    /// Rendered image pixel width (height is width * 4 / 5)
    #[arg(short = 'w', long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Rendered image filename
    #[arg(short = 'o', long, default_value = "out.ppm")]
    output: PathBuf,

    /// Maximum number of mirror bounces
    #[arg(long, default_value_t = MAX_REFLECT_DEPTH)]
    max_depth: u32,

    /// Worker threads (defaults to all available cores)
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u16).range(1..))]
    threads: Option<u16>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            threads: self.threads.map(usize::from),
            ..RenderConfig::default()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let scene = Scene::showcase().context("Failed to build the showcase scene")?;
    let image = render(&scene, args.width, &args.render_config()).context("Render failed")?;

    output::save_ppm(&image, &args.output)?;
    log::info!("Saved {}x{} image to {}", image.width, image.height, args.output.display());

    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!("Starting prism");

    // Report once through the logger, then fail the process
    if let Err(err) = run(&args) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
