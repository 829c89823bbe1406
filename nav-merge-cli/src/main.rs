mod args;
mod config;
mod records;
mod replay;

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
};

use anyhow::{Context as _, Result};
use args::{Cli, DefaultConfigCli, ModeSelect, ReplayCli, StepCli};
use clap::Parser;
use config::{config_to_string, load_or_default, save_config};
use log::{LevelFilter, info};
use nav_merge_core::{MergeConfig, NavMerger};
use records::StateRecord;
use replay::{replay, step};

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let args = Cli::parse();
    match args.mode {
        ModeSelect::Replay(args) => replay_command(args),
        ModeSelect::DefaultConfig(args) => default_config_command(args),
        ModeSelect::Step(args) => step_command(args),
    }
}

fn replay_command(args: ReplayCli) -> Result<()> {
    let config = load_or_default(args.config.as_deref())?;

    let initial_str = fs::read_to_string(&args.initial)
        .with_context(|| format!("failed to read {}", args.initial.display()))?;
    let initial: StateRecord = serde_json::from_str(&initial_str)
        .with_context(|| format!("malformed initial state {}", args.initial.display()))?;
    let mut merger = NavMerger::new(config, initial.into())?;

    let measurements = File::open(&args.measurements)
        .with_context(|| format!("failed to open {}", args.measurements.display()))?;
    let input = BufReader::new(measurements);

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            replay(&mut merger, input, BufWriter::new(file))?;
            info!("states written to {}", path.display());
        }
        None => {
            replay(&mut merger, input, io::stdout().lock())?;
        }
    }

    Ok(())
}

fn default_config_command(args: DefaultConfigCli) -> Result<()> {
    let config = MergeConfig::default();
    match args.output {
        Some(path) => {
            save_config(&config, &path)?;
            info!("default config written to {}", path.display());
        }
        None => {
            print!("{}", config_to_string(&config)?);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

fn step_command(args: StepCli) -> Result<()> {
    let config = load_or_default(args.config.as_deref())?;
    println!("{}", step(&config, &args.state, &args.measurement)?);
    Ok(())
}
