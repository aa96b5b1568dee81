mod input;
mod trials;

use std::time::Instant;

use anyhow::{bail, Context, Result};
use bed_bundles::{compute_bundles, format_bundles, BundleConfig, Vacancy, VacancyBundle};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Longest shared availability windows for every group size.
#[derive(Parser, Debug)]
#[command(name = "bed-bundles", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute bundles from a JSON array of vacancies
    Compute {
        /// Input file, `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Run the built-in reference trials
    Trial {
        /// Trial to run (all trials when omitted)
        index: Option<usize>,

        #[command(flatten)]
        sweep: SweepArgs,
    },
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Reference date for expiry (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Keep vacancies that ended before today
    #[arg(long)]
    keep_expired: bool,

    /// Do not merge back-to-back vacancies of the same bed
    #[arg(long)]
    no_merge: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl SweepArgs {
    fn config(&self, default_today: NaiveDate) -> BundleConfig {
        BundleConfig::new(self.today.unwrap_or(default_today))
            .with_remove_expired_vacancies(!self.keep_expired)
            .with_combine_adjacent_vacancies(!self.no_merge)
    }
}

#[derive(Serialize)]
struct TrialReport<'a> {
    trial: usize,
    bundles: &'a [VacancyBundle],
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute { input: path, sweep } => {
            let raw = input::read_input(&path)?;
            let vacancies = input::parse_vacancies(&raw)?;
            let config = sweep.config(Utc::now().date_naive());
            let bundles = compute_bundles(&vacancies, &config);
            match sweep.format {
                Format::Text => print_text(&bundles),
                Format::Json => println!("{}", serde_json::to_string_pretty(&bundles)?),
            }
        }
        Command::Trial { index, sweep } => {
            let default_today = NaiveDate::from_ymd_opt(trials::TRIAL_YEAR, 1, 1)
                .context("invalid trial reference date")?;
            let config = sweep.config(default_today);
            let indices: Vec<usize> = match index {
                Some(i) if i >= trials::count() => {
                    bail!("no trial {i}, expected 0..{}", trials::count() - 1)
                }
                Some(i) => vec![i],
                None => (0..trials::count()).collect(),
            };

            let mut results = Vec::with_capacity(indices.len());
            for idx in indices {
                let vacancies = trials::load(idx).with_context(|| format!("unknown trial {idx}"))?;
                results.push((idx, run_with_timer(idx, &vacancies, &config)));
            }

            match sweep.format {
                Format::Text => {
                    for (idx, bundles) in &results {
                        println!("### Trial {idx}\n");
                        print_text(bundles);
                    }
                }
                Format::Json => {
                    let reports: Vec<TrialReport<'_>> = results
                        .iter()
                        .map(|(trial, bundles)| TrialReport {
                            trial: *trial,
                            bundles,
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_with_timer(idx: usize, vacancies: &[Vacancy], config: &BundleConfig) -> Vec<VacancyBundle> {
    let start = Instant::now();
    let bundles = compute_bundles(vacancies, config);
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
    eprintln!("Trial {idx}: elapsed time {elapsed_us:.0}us");
    bundles
}

fn print_text(bundles: &[VacancyBundle]) {
    if bundles.is_empty() {
        println!("No bundles found\n");
    } else {
        println!("{}", format_bundles(bundles));
    }
}
