//! Kundali Chart CLI
//!
//! Usage:
//!   kundali-chart [OPTIONS] [FILE]
//!
//! Options:
//!   -k, --kind <KIND>        birth or navamsha (default: birth)
//!   -f, --format <FORMAT>    svg, json or table (default: svg)
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -d, --debug              Print house occupancy to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use kundali_chart::chart::record::birth_bodies;
use kundali_chart::summary::{format_table, karakas, planet_rows};
use kundali_chart::{
    labels_json, layout_with_config, parse_response, render_svg_with_stylesheet, ChartKind,
    RenderConfig, RenderError, Stylesheet,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// Birth (rasi) chart from a planets response
    Birth,
    /// Navamsha chart from a navamsa-chart-info response
    Navamsha,
}

impl From<KindArg> for ChartKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Birth => ChartKind::Birth,
            KindArg::Navamsha => ChartKind::Divisional,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// SVG drawing of the chart
    Svg,
    /// Label descriptors as JSON
    Json,
    /// Planet listing with karakas (birth chart only)
    Table,
}

#[derive(Parser)]
#[command(name = "kundali-chart")]
#[command(about = "Lay out North Indian style Vedic astrology charts")]
struct Cli {
    /// Astrology service response (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Chart kind the response describes
    #[arg(short, long, value_enum, default_value = "birth")]
    kind: KindArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    format: Format,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Debug mode: print house occupancy to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let kind = ChartKind::from(cli.kind);
    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);

    let output = match cli.format {
        Format::Table => table(&source, kind),
        Format::Svg | Format::Json => chart(&source, kind, cli.format, &config),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(RenderError::Ingest(e)) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn chart(
    source: &str,
    kind: ChartKind,
    format: Format,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let result = layout_with_config(source, kind, config)?;
    match format {
        Format::Json => labels_json(&result),
        _ => Ok(render_svg_with_stylesheet(
            &result,
            &config.geometry,
            &config.svg_for(kind),
            &config.stylesheet,
        )),
    }
}

fn table(source: &str, kind: ChartKind) -> Result<String, RenderError> {
    if kind != ChartKind::Birth {
        eprintln!("Warning: the planet table uses birth chart fields; navamsha records have no degrees");
    }
    let bodies = birth_bodies(&parse_response(source, kind)?);
    let mut out = format_table(&planet_rows(&bodies));
    if let Some(k) = karakas(&bodies) {
        out.push_str(&format!(
            "\nAtmakaraka: {}\nDarakaraka: {}\n",
            k.atmakaraka, k.darakaraka
        ));
    }
    Ok(out.trim_end().to_string())
}

fn print_intro() {
    println!(
        r#"Kundali Chart - North Indian style Vedic astrology charts

USAGE:
    kundali-chart [OPTIONS] [FILE]
    cat planets.json | kundali-chart

OPTIONS:
    -k, --kind         birth (default) or navamsha
    -f, --format       svg (default), json or table
    -s, --stylesheet   Custom color palette (TOML file)
    -d, --debug        Print house occupancy to stderr
    -h, --help         Print help

INPUT:
    A saved response from the astrology service's planets endpoint (birth)
    or navamsa-chart-info endpoint (navamsha), or a bare JSON array of
    records with name, normDegree, current_sign, house_number and isRetro.

QUICK START:
    kundali-chart planets.json > chart.svg
    kundali-chart --kind navamsha navamsa.json > navamsha.svg

Set RUST_LOG=debug to trace house assignment."#
    );
}
