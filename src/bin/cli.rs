// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Heritage Eval CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use heritage_eval::cli::Reporter;
use heritage_eval::evaluation::{
    evaluate_all, evaluate_collection, evaluate_one, BatchProgress, BatchReport, Evaluator,
    Outcome, ResultSink,
};
use heritage_eval::{
    comparison_table, telemetry, AccessMode, ArtifactRecord, ArtifactStore, DirectoryStore,
    EngineConfig, ManifestStore,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "heritage-eval")]
#[command(about = "Quality evaluation for digitized cultural-heritage meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Artifact manifest (JSON array or TOML [[artifacts]])
    #[arg(long, value_name = "FILE", global = true, conflicts_with = "dir")]
    manifest: Option<PathBuf>,

    /// Folder of mesh files; subfolders are collections
    #[arg(long, value_name = "DIR", global = true)]
    dir: Option<PathBuf>,

    /// Configuration file (defaults to ./heritage-eval.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Access mode
    #[arg(long, value_parser = ["full", "basic"], global = true)]
    mode: Option<String>,

    /// Seed for the synthetic fidelity proxy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Score unloadable meshes as zero instead of falling back to basic mode
    #[arg(long, global = true)]
    no_fallback: bool,

    /// Skip the simulated basic-mode load delay
    #[arg(long, global = true)]
    no_delay: bool,

    /// Result file (defaults to a timestamped file in the output directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every artifact in the store
    All,

    /// Evaluate one artifact by id
    Model {
        /// Artifact id
        id: String,
    },

    /// Evaluate every artifact in a collection
    Collection {
        /// Collection name
        name: String,
    },

    /// Evaluate a single mesh file without a store
    File {
        /// Mesh file
        path: PathBuf,
    },

    /// Show collections and artifact counts
    Status,

    /// Print the baseline comparison table
    Baseline,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    telemetry::init_tracing(cli.json_logs, level);

    if let Err(e) = run(&cli) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Baseline => {
            Reporter::report_baseline(&comparison_table());
            Ok(())
        }
        Commands::Status => {
            let store = open_store(cli)?;
            let collections = store.collections().context("Failed to enumerate artifacts")?;
            Reporter::report_status(&collections);
            Ok(())
        }
        Commands::File { path } => {
            let config = load_config(cli)?;
            let outcome = Evaluator::new(&config).evaluate(&ArtifactRecord::from_path(path));
            single_command(cli, &config, outcome)
        }
        Commands::Model { id } => {
            let config = load_config(cli)?;
            let store = open_store(cli)?;
            let outcome = evaluate_one(store.as_ref(), &mut Evaluator::new(&config), id)?;
            single_command(cli, &config, outcome)
        }
        Commands::All => {
            let config = load_config(cli)?;
            let store = open_store(cli)?;
            let report = batch_command(&config, |evaluator, on_done| {
                evaluate_all(store.as_ref(), evaluator, on_done)
            })?;
            let sink = ResultSink::new(&config.output_dir);
            save(cli, &report, sink.all_path(report.evaluated_at))
        }
        Commands::Collection { name } => {
            let config = load_config(cli)?;
            let store = open_store(cli)?;
            let report = batch_command(&config, |evaluator, on_done| {
                evaluate_collection(store.as_ref(), evaluator, name, on_done)
            })?;
            let sink = ResultSink::new(&config.output_dir);
            save(cli, &report, sink.collection_path(name, report.evaluated_at))
        }
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = EngineConfig::from_file(path)?;
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        }
        None => EngineConfig::load()?,
    };

    if let Some(mode) = &cli.mode {
        config.mode = mode.parse::<AccessMode>().map_err(anyhow::Error::msg)?;
    }
    if let Some(seed) = cli.seed {
        config.noise_seed = Some(seed);
    }
    if cli.no_fallback {
        config.fallback_to_basic = false;
    }
    if cli.no_delay {
        config.simulate_load_delay = false;
    }

    Ok(config)
}

fn open_store(cli: &Cli) -> Result<Box<dyn ArtifactStore>> {
    match (&cli.manifest, &cli.dir) {
        (Some(manifest), _) => Ok(Box::new(ManifestStore::load(manifest)?)),
        (None, Some(dir)) => Ok(Box::new(DirectoryStore::new(dir))),
        (None, None) => bail!("An artifact store is required: pass --manifest <FILE> or --dir <DIR>"),
    }
}

fn single_command(cli: &Cli, config: &EngineConfig, outcome: Outcome) -> Result<()> {
    let result = match outcome {
        Ok(result) => result,
        Err(failure) => bail!("{}", failure),
    };

    Reporter::report_result(&result);

    let sink = ResultSink::new(&config.output_dir);
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| sink.model_path(&result.artifact.id, result.evaluated_at));
    ResultSink::write_json(&result, &path)?;
    Reporter::success(&format!("Results saved to {}", path.display()));
    Ok(())
}

fn batch_command(
    config: &EngineConfig,
    run: impl FnOnce(&mut Evaluator, &mut dyn FnMut(BatchProgress<'_>)) -> Result<BatchReport>,
) -> Result<BatchReport> {
    println!("{} artifacts ({} mode)", "Evaluating".bold(), config.mode);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut evaluator = Evaluator::new(config);
    let on_done: &mut dyn FnMut(BatchProgress<'_>) = &mut |progress| {
        pb.set_length(progress.total as u64);
        if !progress.succeeded {
            pb.println(format!("{} {}", "✗".red(), progress.record.display_name));
        }
        pb.set_message(progress.record.display_name.clone());
        pb.set_position(progress.completed as u64);
    };
    let report = run(&mut evaluator, on_done);
    pb.finish_and_clear();

    let report = report?;
    Reporter::report_batch(&report);
    Ok(report)
}

fn save(cli: &Cli, report: &BatchReport, default_path: PathBuf) -> Result<()> {
    let path = cli.output.clone().unwrap_or(default_path);
    ResultSink::write_json(report, &path)?;
    Reporter::success(&format!("Results saved to {}", path.display()));
    Ok(())
}
