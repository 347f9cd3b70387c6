use std::{
    collections::BTreeMap,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};

use emo_context::{DatasetBuilder, EmoDataset, EmotionLabel, LoaderConfig, Split};

/// EmoContext dataset loader.
#[derive(Parser)]
#[command(name = "emo-context", version, about)]
struct Cli {
    /// JSON file with loader settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the split files (overrides config and env).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the dataset metadata as JSON
    Info,
    /// Download the split files if missing
    Fetch {
        /// Download even if the files already exist
        #[arg(long)]
        force: bool,
    },
    /// Write a split's records as JSON lines
    Dump {
        split: String,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print record and label counts of a split
    Stats { split: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LoaderConfig::from_json_file(path)?,
        None => LoaderConfig::default(),
    }
    .with_env_overrides();

    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Command::Info => {
            let dataset = EmoDataset::new(config);
            let json = serde_json::to_string_pretty(&dataset.describe_dataset())?;
            println!("{json}");
        }
        Command::Fetch { force } => {
            config.force_refetch |= force;
            let dataset = EmoDataset::new(config);
            for generator in dataset.list_splits()? {
                println!("{}: {}", generator.split, generator.filepath.display());
            }
        }
        Command::Dump { split, limit } => {
            let split: Split = split.parse()?;
            let dataset = EmoDataset::new(config);
            let records = dataset.generate_records(split)?;

            let mut out = BufWriter::new(io::stdout().lock());
            for record in records.take(limit.unwrap_or(usize::MAX)) {
                serde_json::to_writer(&mut out, &record)?;
                out.write_all(b"\n")?;
            }
            out.flush().context("flushing stdout")?;
        }
        Command::Stats { split } => {
            let split: Split = split.parse()?;
            let dataset = EmoDataset::new(config);
            let records = dataset.generate_records(split)?;

            let total = records.len();
            let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
            for record in records {
                *counts.entry(record.label.index()).or_default() += 1;
            }

            println!("split: {split}");
            println!("records: {total}");
            for label in EmotionLabel::ALL {
                let n = counts.get(&label.index()).copied().unwrap_or(0);
                println!("  {label:<7} {n}");
            }
        }
    }

    Ok(())
}
