//! Generate a cross-section and save its central view as a PNG
//!
//! This example shows:
//! - Loading an optional TOML configuration
//! - Running a seeded simulation
//! - Cropping the central window and compositing swatches for each rock
//! - Printing the numbered event log
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example cross_section -- --seed 42 --output profile.png
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use strata::constants::{BORDER_COLOR, INTRUSION_COLOR};
use strata::{hex, Canvas, CrossSection, SimulationConfig, StrataSimulation, WHITE};

#[derive(Parser, Debug)]
struct Args {
    /// random seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file; missing keys use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// where to write the PNG
    #[arg(long, default_value = "geological_profile.png")]
    output: PathBuf,

    /// side of the square central view
    #[arg(long, default_value_t = 500)]
    view: usize,

    /// save the whole canvas instead of the composited view
    #[arg(long, default_value_t = false)]
    full: bool,
}

const FRAME_WIDTH: usize = 1024;
const FRAME_HEIGHT: usize = 576;
const SWATCH: usize = 30;
const SWATCH_SPACING: usize = 50;
const VIEW_LEFT: usize = 76;
const LEGEND_GAP: usize = 24;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SimulationConfig::from_toml_str(&source)?
        }
        None => SimulationConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let section = StrataSimulation::with_config(seed, config)?.run();
    let picture = if args.full { section.canvas.clone() } else { compose(&section, args.view) };
    save_png(&picture, &args.output)?;

    println!("Seed {seed}, saved {}", args.output.display());
    println!("Legend:");
    for (i, rock) in section.palette.iter().enumerate() {
        println!("  swatch {}: {} {}", i + 1, hex(rock.color), rock.name);
    }
    println!("  swatch {}: {} intrusion", section.palette.len() + 1, hex(INTRUSION_COLOR));
    println!("Events that occurred during the simulation:");
    print!("{}", section.events);
    Ok(())
}

/// Central view on the left of a white frame, one swatch per rock on the right
fn compose(section: &CrossSection, view: usize) -> Canvas {
    let view = section.canvas.crop_center(view, view);
    let width = FRAME_WIDTH.max(VIEW_LEFT + view.width() + LEGEND_GAP + SWATCH + VIEW_LEFT);
    let height = FRAME_HEIGHT.max(view.height());
    let mut frame = Canvas::filled(width, height, WHITE);

    let top = (height - view.height()) / 2;
    frame.paste(&view, VIEW_LEFT as isize, top as isize);

    let legend_x = (VIEW_LEFT + view.width() + LEGEND_GAP) as isize;
    let colors = section
        .palette
        .iter()
        .map(|rock| rock.color)
        .chain(std::iter::once(INTRUSION_COLOR));
    for (i, color) in colors.enumerate() {
        let y = (100 + i * SWATCH_SPACING) as isize;
        let side = SWATCH as isize - 1;
        frame.fill_rect(legend_x, y, legend_x + side, y + side, color);
        frame.stroke_rect(legend_x, y, legend_x + side, y + side, BORDER_COLOR);
    }
    frame
}

fn save_png(canvas: &Canvas, path: &Path) -> anyhow::Result<()> {
    canvas
        .image()
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
