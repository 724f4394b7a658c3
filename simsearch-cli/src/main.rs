use clap::Parser;
use serde::{Deserialize, Serialize};
use simsearch::{best_match, similarity_matrix_with, top_matches, Grid, Peak, SearchConfig};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "simsearch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SearchConfigJson {
    parallel: bool,
    topk: usize,
    nms_radius: usize,
    min_score: f64,
}

impl Default for SearchConfigJson {
    fn default() -> Self {
        let cfg = SearchConfig::default();
        Self {
            parallel: cfg.parallel,
            topk: cfg.topk,
            nms_radius: cfg.nms_radius,
            min_score: cfg.min_score,
        }
    }
}

impl From<SearchConfigJson> for SearchConfig {
    fn from(value: SearchConfigJson) -> Self {
        Self {
            parallel: value.parallel,
            topk: value.topk,
            nms_radius: value.nms_radius,
            min_score: value.min_score,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    input_path: String,
    output_path: Option<String>,
    include_matrix: bool,
    search: SearchConfigJson,
}

/// Grids to search, as nested rows.
#[derive(Debug, Deserialize)]
struct Input {
    pattern: Vec<Vec<f64>>,
    image: Vec<Vec<f64>>,
}

#[derive(Debug, Serialize)]
struct PeakRecord {
    row: usize,
    col: usize,
    score: f64,
}

impl From<Peak> for PeakRecord {
    fn from(value: Peak) -> Self {
        Self {
            row: value.row,
            col: value.col,
            score: value.score,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    rows: usize,
    cols: usize,
    best: PeakRecord,
    topk: Vec<PeakRecord>,
    matrix: Option<Vec<Vec<f64>>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("simsearch=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }
    if config.search.topk == 0 {
        return Err("topk must be at least 1".into());
    }

    let input_text = fs::read_to_string(&config.input_path)?;
    let input: Input = serde_json::from_str(&input_text)?;
    let pattern = Grid::from_rows(&input.pattern)?;
    let image = Grid::from_rows(&input.image)?;

    let search: SearchConfig = config.search.into();
    let similarity = similarity_matrix_with(pattern.view(), image.view(), &search)?;
    let peaks = top_matches(
        similarity.view(),
        search.topk,
        search.nms_radius,
        search.min_score,
    );
    tracing::info!(peaks = peaks.len(), "search finished");

    let best = PeakRecord::from(best_match(similarity.view()));
    let topk = peaks.into_iter().map(PeakRecord::from).collect();
    let output = Output {
        rows: similarity.rows(),
        cols: similarity.cols(),
        best,
        topk,
        matrix: config.include_matrix.then(|| similarity.to_rows()),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
