use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use cutback_advice::{fmt::money, render_json, render_text, Advice};
use cutback_core::{CoreError, RecommendConfig, Recommender};
use cutback_ingest::{load_dictionary, load_transactions_csv};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "cutback",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CUTBACK_BUILD_SHA"), ")"),
    about = "Suggest spending categories to cut, sampled from your top spend"
)]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend categories to cut from a transaction CSV (date,description,amount)
    Recommend {
        /// Transaction CSV
        csv: PathBuf,

        #[command(flatten)]
        inputs: InputArgs,

        /// Top-spend categories eligible for sampling
        #[arg(long)]
        pool_size: Option<usize>,

        /// Number of categories to recommend
        #[arg(long)]
        reservoir_size: Option<usize>,

        /// Keyword never recommended (repeatable; replaces configured exclusions)
        #[arg(long = "exclude", value_name = "KEYWORD")]
        exclude: Vec<String>,

        /// Recommend from every category, essentials included
        #[arg(long, conflicts_with = "exclude")]
        no_exclusions: bool,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Months covered by the projected saving
        #[arg(long)]
        horizon: Option<u32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show categories ranked by total spend
    Rank {
        /// Transaction CSV
        csv: PathBuf,

        #[command(flatten)]
        inputs: InputArgs,

        /// Limit number of categories printed (default: 20)
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Manage ~/.cutback/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Keyword dictionary, one keyword per line (default from config: dictionary.txt)
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Recommend {
            csv,
            inputs,
            pool_size,
            reservoir_size,
            exclude,
            no_exclusions,
            seed,
            horizon,
            json,
        } => {
            let cfg = config::load_config()?;
            let mut rc = cfg.recommend;
            if let Some(n) = pool_size {
                rc.pool_size = n;
            }
            if let Some(k) = reservoir_size {
                rc.reservoir_size = k;
            }
            if no_exclusions {
                rc.exclusions.clear();
            } else if !exclude.is_empty() {
                rc.exclusions = exclude;
            }
            let horizon = horizon.unwrap_or(cfg.report.horizon_months);
            let dictionary = inputs.dictionary.unwrap_or(cfg.dictionary);

            recommend(&csv, &dictionary, rc, seed, horizon, json)?;
        }

        Command::Rank { csv, inputs, limit } => {
            let cfg = config::load_config()?;
            let dictionary = inputs.dictionary.unwrap_or(cfg.dictionary);
            rank(&csv, &dictionary, cfg.recommend, limit)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_recommender(dictionary: &Path, rc: RecommendConfig) -> Result<Recommender> {
    let dictionary = load_dictionary(dictionary)
        .context("the keyword dictionary is required (pass --dictionary <file>)")?;
    Ok(Recommender::new(rc, dictionary)?)
}

fn recommend(
    csv: &Path,
    dictionary: &Path,
    rc: RecommendConfig,
    seed: Option<u64>,
    horizon: u32,
    json: bool,
) -> Result<()> {
    let recommender = build_recommender(dictionary, rc)?;
    let txns = load_transactions_csv(csv)?;
    if !json {
        println!("File: {} - total records read: {}\n", csv.display(), txns.len());
    }

    let rec = match seed {
        Some(seed) => recommender.recommend(&txns, &mut StdRng::seed_from_u64(seed)),
        None => recommender.recommend(&txns, &mut rand::thread_rng()),
    }
    .map_err(explain)?;
    tracing::info!(reservoir = ?rec.reservoir, "recommendation ready");

    let advice =
        Advice::build(&rec, &recommender.config().exclusions, horizon).map_err(explain)?;
    if json {
        println!("{}", render_json(&advice)?);
    } else {
        print!("{}", render_text(&advice));
    }
    Ok(())
}

fn rank(csv: &Path, dictionary: &Path, rc: RecommendConfig, limit: usize) -> Result<()> {
    let recommender = build_recommender(dictionary, rc)?;
    let txns = load_transactions_csv(csv)?;
    let (totals, ranked) = recommender.rank(&txns);

    println!(
        "{} transactions, {} categories, total {}\n",
        txns.len(),
        totals.len(),
        money(totals.sum())
    );
    for (i, entry) in ranked.entries().iter().take(limit).enumerate() {
        println!("{:>3}. {:>40}   {}", i + 1, entry.label, money(entry.total));
    }
    Ok(())
}

fn explain(err: CoreError) -> anyhow::Error {
    match err {
        CoreError::DegenerateSpan { .. } => anyhow!(err)
            .context("cannot average per month: transactions must span at least two calendar months"),
        other => anyhow!(other),
    }
}
