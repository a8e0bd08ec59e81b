//! gridsvg CLI
//!
//! Usage:
//!   gridsvg [OPTIONS] [FILE]
//!
//! Reads a text-art bitmap (`#` dark, `.` light) and prints the SVG to stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridsvg::{render_with_config, IntRect, RenderConfig, Style, MAX_BORDER};

#[derive(Parser)]
#[command(name = "gridsvg")]
#[command(about = "Render cell bitmaps such as QR codes to merged SVG paths")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render config file (TOML format); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Styling preset
    #[arg(short, long, value_enum)]
    style: Option<Style>,

    /// Empty space around each cell, in percent
    #[arg(short = 'm', long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pixel_margin: Option<u32>,

    /// Corner radius in percent of half a cell
    #[arg(short = 'r', long, value_parser = clap::value_parser!(u32).range(0..=100))]
    corner_radius: Option<u32>,

    /// Style safe areas as well
    #[arg(short = 'a', long)]
    style_all: bool,

    /// Area exempt from styling, as x,y,width,height (repeatable)
    #[arg(long = "safe-area", value_parser = parse_area)]
    safe_areas: Vec<IntRect>,

    /// Blank cells added around the bitmap
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_BORDER)))]
    border: Option<u32>,

    /// Fill color for all paths
    #[arg(long)]
    fill: Option<String>,

    /// Emit one path per cell instead of merging touching cells
    #[arg(long)]
    no_shape_optimization: bool,

    /// Log to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Merge flags over the config file
    fn render_config(&self) -> Result<RenderConfig, String> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)
                .map_err(|e| format!("Error loading config '{}': {}", path.display(), e))?,
            None => RenderConfig::default(),
        };

        let profile = &mut config.profile;
        if let Some(style) = self.style {
            profile.style = style;
        }
        if let Some(margin) = self.pixel_margin {
            profile.pixel_margin = margin;
        }
        if let Some(radius) = self.corner_radius {
            profile.corner_radius = radius;
        }
        if let Some(border) = self.border {
            profile.border = border;
        }
        profile.style_all |= self.style_all;
        profile.safe_areas.extend(self.safe_areas.iter().copied());

        if let Some(fill) = &self.fill {
            config.svg = config.svg.with_fill(fill.clone());
        }
        if self.no_shape_optimization {
            config.svg = config.svg.with_merge_shapes(false);
        }
        Ok(config)
    }
}

/// Parse `x,y,width,height`
fn parse_area(value: &str) -> Result<IntRect, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [x, y, width, height] = parts.as_slice() else {
        return Err(format!("expected x,y,width,height, got '{}'", value));
    };
    let coordinate = |s: &str| s.parse::<i32>().map_err(|e| format!("invalid coordinate '{}': {}", s, e));
    let extent = |s: &str| s.parse::<u32>().map_err(|e| format!("invalid size '{}': {}", s, e));
    Ok(IntRect::from_xywh(
        coordinate(*x)?,
        coordinate(*y)?,
        extent(*width)?,
        extent(*height)?,
    ))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Nothing piped in: show usage instead of waiting on the terminal
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let config = match cli.render_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match render_with_config(&source, &config) {
        Ok(svg) => {
            print!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"gridsvg - Render cell bitmaps to merged SVG paths

USAGE:
    gridsvg [OPTIONS] [FILE]
    printf '##.\n.##\n' | gridsvg

STYLES (-s):
    standard       Square cells
    dots           Dots, rounded by --corner-radius
    holes          Solid squares with rounded holes
    liquid-dots    Cells rounded where the bitmap changes color
    liquid-holes   Like liquid-dots, keeping diagonal dark cells connected

Run with --help for all options."#
    );
}
