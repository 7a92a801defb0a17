//! SVG Graph CLI
//!
//! Usage:
//!   svg-graph [OPTIONS] <LAYOUT> <POINTS>
//!
//! Options:
//!   -o, --output <FILE>  Write the SVG to a file instead of stdout
//!   -c, --connect        Join consecutive points with a path
//!   --fragment           Omit the XML declaration
//!   --compact            Do not put fragments on separate lines
//!   -h, --help           Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use svg_graph::{render_files, RenderConfig, TracingDiagnostics};

#[derive(Parser)]
#[command(name = "svg-graph")]
#[command(about = "Render a JSON-described Cartesian chart as SVG")]
struct Cli {
    /// Layout file (JSON, or TOML with a .toml extension)
    layout: PathBuf,

    /// Point file (JSON object with a DataVals array)
    points: PathBuf,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Join consecutive points with a path
    #[arg(short, long)]
    connect: bool,

    /// Omit the XML declaration
    #[arg(long)]
    fragment: bool,

    /// Do not put fragments on separate lines
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = RenderConfig::new()
        .with_standalone(!cli.fragment)
        .with_pretty_print(!cli.compact)
        .with_connect_points(cli.connect);

    let svg = match render_files(&cli.layout, &cli.points, config, &TracingDiagnostics) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}
