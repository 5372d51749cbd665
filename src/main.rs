use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use aggregator::{RunCollection, full_detector_tables};
use analytics::RunContainer;
use configuration::StyleOptions;
use histogram_store::JsonStore;
use report::{ExportFlags, ReportTables, ReportWriter, RunSummaryRow, console_table};

/// The main entry point for the pixocc occupancy reporting tool.
fn main() {
    // One subscriber for the whole process; RUST_LOG overrides the default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Single(args) => {
            if let Err(e) = handle_single(args) {
                eprintln!("Error processing file: {e}");
                std::process::exit(1);
            }
        }
        Commands::Batch(args) => {
            if let Err(e) = handle_batch(args) {
                eprintln!("Error during batch processing: {e}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Detector-occupancy statistics and cross-run comparison reports.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute occupancy values for a single histogram store file.
    Single(SingleArgs),
    /// Process a run list and write a comparison report folder.
    Batch(BatchArgs),
}

#[derive(Parser)]
struct SingleArgs {
    /// The histogram summary file to process.
    #[arg(long)]
    file: PathBuf,

    /// Number of colliding bunches during the run.
    #[arg(long)]
    colliding_bunches: f64,

    /// Print the full diagnostic dump instead of the summary tables.
    #[arg(long)]
    dump: bool,
}

#[derive(Parser)]
struct BatchArgs {
    /// The TOML run-list file driving the batch.
    #[arg(long)]
    config: PathBuf,

    /// The folder the report is written into.
    #[arg(long, default_value = "occupancy-report")]
    output: PathBuf,

    /// Also export LaTeX tables into <output>/tex.
    #[arg(long)]
    latex: bool,

    /// Also export semicolon-separated tables into <output>/csv.
    #[arg(long)]
    csv: bool,

    /// Also export INI-style tables into <output>/cfg.
    #[arg(long)]
    cfg: bool,
}

// ==============================================================================
// Single-File Command Logic
// ==============================================================================

/// Computes one container and prints it to the terminal.
fn handle_single(args: SingleArgs) -> anyhow::Result<()> {
    let run_name = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "run".to_string());
    tracing::info!(run = %run_name, "Processing file");

    let store = JsonStore::open(&args.file)?;
    let container = RunContainer::build(
        &run_name,
        &store,
        args.colliding_bunches,
        core_types::DetectorConstants::default(),
    );

    if args.dump {
        print!("{}", container.debug_dump());
        return Ok(());
    }

    let mut runs = RunCollection::new();
    runs.push(container);
    let (per_run, _) = full_detector_tables(&runs);
    let style = StyleOptions::default();
    for entry in per_run {
        println!("{} {}", entry.run, entry.group.label());
        println!("{}", console_table(&entry.table, style.html_precision));
    }

    Ok(())
}

// ==============================================================================
// Batch Command Logic
// ==============================================================================

/// Handles the orchestration of a multi-run batch: build all containers,
/// aggregate, write the report folder.
fn handle_batch(args: BatchArgs) -> anyhow::Result<()> {
    let run_list = configuration::load_run_list(&args.config)?;
    let constants = run_list.constants.resolve();

    println!(
        "Processing {} runs from {} into {}",
        run_list.runs.len(),
        args.config.display(),
        args.output.display()
    );

    // Set up the progress bar
    let progress_bar = ProgressBar::new(run_list.runs.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    let mut runs = RunCollection::new();
    let mut summary = Vec::new();
    for entry in &run_list.runs {
        progress_bar.set_message(format!("Processing {}...", entry.id));

        // A store that cannot be opened is fatal for this run only; the
        // batch continues with the others.
        match JsonStore::open(&entry.file) {
            Ok(store) => {
                runs.push(RunContainer::build(
                    &entry.id,
                    &store,
                    entry.colliding_bunches,
                    constants,
                ));
                summary.push(RunSummaryRow {
                    id: entry.id.clone(),
                    colliding_bunches: entry.colliding_bunches,
                    comment: entry.comment.clone(),
                });
            }
            Err(e) => {
                tracing::error!(run = %entry.id, error = %e, "Skipping run, histogram store unusable");
            }
        }
        progress_bar.inc(1);
    }
    progress_bar.finish_with_message("Runs processed");

    if runs.is_empty() {
        anyhow::bail!("no run in the batch could be processed");
    }

    let tables = ReportTables::from_collection(&runs);
    let writer = ReportWriter::new(&args.output, run_list.style.clone());
    writer.write_all(
        &run_list.title,
        &run_list.description,
        &summary,
        &tables,
        ExportFlags {
            latex: args.latex,
            csv: args.csv,
            cfg: args.cfg,
        },
        Some(&args.config),
    )?;

    println!("Report written to {}", args.output.join("index.html").display());
    Ok(())
}
