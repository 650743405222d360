use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use boundscope_aggregate::{
    AllWindowsView, ComparisonView, GlobalView, Ranking, Selection, SelectionMiss, SingleView,
    View, WinDistribution,
};
use boundscope_core::{Metric, ResultTable};
use boundscope_io::{ReportName, ReportWriter, ResultsReader};

#[derive(Parser)]
#[command(name = "boundscope")]
#[command(about = "Aggregate and rank DTW lower-bound benchmark results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Comma-separated bound names, in results order (defaults to the standard six)
    #[arg(long, value_delimiter = ',', global = true)]
    bounds: Option<Vec<String>>,

    /// Report name for JSON/CSV artifacts (must match [a-zA-Z0-9_-]+); nothing is written without it
    #[arg(long, global = true)]
    report: Option<String>,

    /// Output directory for report artifacts
    #[arg(long, default_value = ".", global = true)]
    output_dir: PathBuf,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Input shared by every view.
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Path to the results JSON file
    #[arg(long)]
    results: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Metrics of every bound for one dataset at one window
    Single {
        #[command(flatten)]
        input: InputArgs,

        /// Dataset name
        #[arg(long)]
        dataset: String,

        /// Window identifier, e.g. "w5"
        #[arg(long)]
        window: String,
    },

    /// Evolution of every bound across the windows of one dataset
    Windows {
        #[command(flatten)]
        input: InputArgs,

        /// Dataset name
        #[arg(long)]
        dataset: String,
    },

    /// Compare bounds across all datasets at one window
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Window identifier, e.g. "w5"
        #[arg(long)]
        window: String,
    },

    /// Rankings, heatmap and win counts over every dataset and window
    Global {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Command {
    fn input(&self) -> &InputArgs {
        match self {
            Command::Single { input, .. }
            | Command::Windows { input, .. }
            | Command::Compare { input, .. }
            | Command::Global { input } => input,
        }
    }

    fn selection(&self) -> Selection {
        match self {
            Command::Single {
                dataset, window, ..
            } => Selection::Single {
                dataset: dataset.clone(),
                window: window.clone(),
            },
            Command::Windows { dataset, .. } => Selection::AllWindows {
                dataset: dataset.clone(),
            },
            Command::Compare { window, .. } => Selection::Comparison {
                window: window.clone(),
            },
            Command::Global { .. } => Selection::Global,
        }
    }
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct NoDataOutput {
    status: &'static str,
    view: &'static str,
    reason: String,
}

#[derive(Serialize)]
struct RankOutput {
    rank: usize,
    bound: String,
    avg_pruned: f64,
    avg_accuracy: f64,
    avg_time: f64,
    sample_count: usize,
}

#[derive(Serialize)]
struct SingleOutput {
    status: &'static str,
    dataset: String,
    window: String,
    bounds: Vec<String>,
    most_pruned: Option<String>,
    most_accurate: Option<String>,
    pruned: Option<Vec<f64>>,
    accuracy: Option<Vec<f64>>,
    times: Option<Vec<f64>>,
}

#[derive(Serialize)]
struct WinnerOutput {
    window: String,
    bound: String,
    pruned: f64,
    accuracy: Option<f64>,
}

#[derive(Serialize)]
struct WindowsOutput {
    status: &'static str,
    dataset: String,
    windows: Vec<String>,
    best_per_window: Vec<WinnerOutput>,
}

#[derive(Serialize)]
struct CompareOutput {
    status: &'static str,
    window: String,
    datasets_with_data: usize,
    best_accuracy: Option<String>,
    ranking: Vec<RankOutput>,
}

#[derive(Serialize)]
struct GlobalOutput<'a> {
    status: &'static str,
    datasets: usize,
    windows: usize,
    bounds: usize,
    cells: usize,
    grid_size: usize,
    best_accuracy: Option<String>,
    fastest: Option<String>,
    heatmap_max: f64,
    ranking: Vec<RankOutput>,
    wins: &'a WinDistribution,
}

fn rank_rows(ranking: &Ranking) -> Vec<RankOutput> {
    ranking
        .entries()
        .iter()
        .map(|r| RankOutput {
            rank: r.rank,
            bound: r.summary.name.clone(),
            avg_pruned: r.summary.avg_pruned,
            avg_accuracy: r.summary.avg_accuracy,
            avg_time: r.summary.avg_time,
            sample_count: r.summary.sample_count,
        })
        .collect()
}

fn single_output(table: &ResultTable, view: &SingleView) -> SingleOutput {
    let registry = table.registry();
    let cell = table.cell(view.dataset.as_str(), view.window.as_str());
    let best_name = |metric: Metric| {
        cell.and_then(|c| c.best_bound(metric))
            .and_then(|id| registry.name(id))
            .map(str::to_owned)
    };

    SingleOutput {
        status: "ok",
        dataset: view.dataset.to_string(),
        window: view.window.to_string(),
        bounds: view.bounds.clone(),
        most_pruned: best_name(Metric::Pruned),
        most_accurate: best_name(Metric::Accuracy),
        pruned: view.pruned.clone(),
        accuracy: view.accuracy.clone(),
        times: view.times.clone(),
    }
}

fn windows_output(view: &AllWindowsView) -> WindowsOutput {
    WindowsOutput {
        status: "ok",
        dataset: view.dataset.to_string(),
        windows: view.windows.iter().map(ToString::to_string).collect(),
        best_per_window: view
            .best_per_window
            .iter()
            .map(|w| WinnerOutput {
                window: w.window.to_string(),
                bound: w.name.clone(),
                pruned: w.pruned,
                accuracy: w.accuracy,
            })
            .collect(),
    }
}

fn compare_output(view: &ComparisonView) -> CompareOutput {
    CompareOutput {
        status: "ok",
        window: view.window.to_string(),
        datasets_with_data: view.datasets_with_data,
        best_accuracy: view.best_accuracy.as_ref().map(|s| s.name.clone()),
        ranking: rank_rows(&view.ranking),
    }
}

fn global_output(view: &GlobalView) -> GlobalOutput<'_> {
    GlobalOutput {
        status: "ok",
        datasets: view.stats.datasets,
        windows: view.stats.windows,
        bounds: view.stats.bounds,
        cells: view.stats.cells,
        grid_size: view.stats.grid_size,
        best_accuracy: view.best_accuracy.as_ref().map(|s| s.name.clone()),
        fastest: view.fastest.as_ref().map(|s| s.name.clone()),
        heatmap_max: view.heatmap.max(),
        ranking: rank_rows(&view.ranking),
        wins: &view.wins,
    }
}

fn print_no_data(selection: &Selection, miss: &SelectionMiss) -> Result<()> {
    warn!(view = selection.kind(), %miss, "selection has no data");
    let output = NoDataOutput {
        status: "no_data",
        view: selection.kind(),
        reason: miss.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Validate the report name before doing any work
    let report = cli
        .report
        .clone()
        .map(ReportName::new)
        .transpose()
        .context("invalid report name")?;

    // Load results
    let mut reader = ResultsReader::new(&cli.command.input().results);
    if let Some(names) = &cli.bounds {
        reader = reader
            .with_bound_names(names.iter().map(|n| n.trim().to_owned()))
            .context("invalid --bounds list")?;
    }
    let table = reader.read().context("failed to load results")?;
    info!(
        n_datasets = table.dataset_count(),
        n_windows = table.all_windows().len(),
        "results ready"
    );

    // Compute the selected view
    let selection = cli.command.selection();
    let view = match selection.evaluate(&table) {
        Ok(view) => view,
        Err(miss) => return print_no_data(&selection, &miss),
    };

    // Write artifacts
    if let Some(report) = report {
        let writer = ReportWriter::new(&cli.output_dir, report)?;
        let paths = writer.write_view(&view)?;
        info!(n_files = paths.len(), "report written");
    }

    // Build and print stdout summary
    let summary = match &view {
        View::Single(v) => serde_json::to_string_pretty(&single_output(&table, v))?,
        View::AllWindows(v) => serde_json::to_string_pretty(&windows_output(v))?,
        View::Comparison(v) => serde_json::to_string_pretty(&compare_output(v))?,
        View::Global(v) => serde_json::to_string_pretty(&global_output(v))?,
    };
    println!("{summary}");

    Ok(())
}
