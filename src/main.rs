use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hex_namer::{ColorValue, ServiceClient, ServiceConfig, create_many};
use hex_namer::DEFAULT_COLORS;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Colors to compare, in #RRGGBB form
    colors: Vec<String>,

    /// Path to TOML file with color service settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log requests and lookups
    #[arg(long)]
    debug: bool,
}

fn init_logging(args: &CliArgs) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args);

    let config = match &args.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    let mut colors = if args.colors.is_empty() {
        create_many(DEFAULT_COLORS)
    } else {
        create_many(&args.colors)
    }
    .context("Invalid color")?;

    // first one wins on equal brightness
    let mut brightest: Option<(f64, &mut ColorValue)> = None;
    for color in &mut colors {
        let brightness = color.brightness()?;
        if brightest.as_ref().is_none_or(|(best, _)| brightness > *best) {
            brightest = Some((brightness, color));
        }
    }
    let Some((brightness, color)) = brightest else {
        anyhow::bail!("No colors to compare");
    };
    info!(color = %color, brightness, "picked brightest color");

    let client = ServiceClient::new(config)?;
    let name = color
        .resolve_name(&client)
        .with_context(|| format!("Could not resolve name of {color}"))?;
    let rgb = color.to_rgb()?;

    let called = if name.is_empty() {
        String::new()
    } else {
        format!(", called {}", name.to_lowercase())
    };
    println!(
        "The brightest color is: {} (r={}, g={}, b={}){called}",
        color, rgb.red, rgb.green, rgb.blue
    );
    Ok(())
}
