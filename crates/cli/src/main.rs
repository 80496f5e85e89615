mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lil_core::visibility::is_visible;
use lil_core::{ImageAttributes, LoaderConfig};
use lil_protocol::{NodeBox, Viewport};

#[derive(Debug, Parser)]
#[command(name = "lil", version, about = "Inspect lazy image-set descriptors")]
struct Cli {
    /// Loader config (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log parser decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a descriptor and print it as JSON.
    Parse {
        descriptor: String,
        /// Explicit fallback source.
        #[arg(long)]
        fallback: Option<String>,
        /// The element's existing source, used when no fallback is given.
        #[arg(long)]
        src: Option<String>,
    },
    /// Print the source chosen for a device.
    Select {
        descriptor: String,
        #[arg(long, default_value_t = 1.0)]
        dpr: f64,
        #[arg(long, default_value_t = 0.0)]
        width: f64,
        #[arg(long)]
        fallback: Option<String>,
        #[arg(long)]
        src: Option<String>,
    },
    /// Check whether an element is on screen.
    Visible {
        #[arg(long)]
        top: f64,
        #[arg(long)]
        height: f64,
        #[arg(long, default_value_t = 0.0)]
        scroll_y: f64,
        #[arg(long)]
        viewport_height: f64,
    },
    /// Print the effective loader config as TOML.
    Config,
}

fn attributes(descriptor: String, fallback: Option<String>, src: Option<String>) -> ImageAttributes {
    ImageAttributes {
        image_set: Some(descriptor),
        fallback_src: fallback,
        src,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => LoaderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    tracing::debug!(?config, "effective config");

    let mut out = std::io::stdout().lock();
    run(cli.command, &config, &mut out)
}

/// Execute one subcommand, writing its result to `out`.
fn run(command: Command, config: &LoaderConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Parse {
            descriptor,
            fallback,
            src,
        } => {
            let Some(parsed) = attributes(descriptor, fallback, src).to_descriptor() else {
                anyhow::bail!("no valid entries in image set");
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&parsed)?)?;
        }
        Command::Select {
            descriptor,
            dpr,
            width,
            fallback,
            src,
        } => {
            let Some(parsed) = attributes(descriptor, fallback, src).to_descriptor() else {
                anyhow::bail!("no valid entries in image set");
            };
            let viewport = Viewport::from_host(0.0, 0.0, Some(width), Some(dpr));
            writeln!(
                out,
                "{}",
                parsed.select_source(viewport.device_pixel_ratio, viewport.width)
            )?;
        }
        Command::Visible {
            top,
            height,
            scroll_y,
            viewport_height,
        } => {
            let viewport = Viewport::from_host(scroll_y, viewport_height, None, None);
            writeln!(out, "{}", is_visible(&NodeBox::new(top, height), &viewport))?;
        }
        Command::Config => {
            write!(out, "{}", toml::to_string_pretty(config)?)?;
        }
    }
    Ok(())
}
