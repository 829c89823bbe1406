use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(name = "Nav Merge")]
#[command(bin_name = "nav-merge")]
pub struct Cli {
    #[clap(subcommand)]
    pub mode: ModeSelect,
}

#[derive(Subcommand, Debug)]
pub enum ModeSelect {
    #[command(about = "run a recorded measurement log through the merge chain")]
    Replay(ReplayCli),

    #[command(about = "write the default merge config as toml")]
    DefaultConfig(DefaultConfigCli),

    #[command(about = "run a single merge step on inline json")]
    Step(StepCli),
}

#[derive(Parser, Debug)]
pub struct ReplayCli {
    #[arg(long, help = "initial state, json")]
    pub initial: PathBuf,
    #[arg(long, help = "merge config, toml")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "write states here instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(help = "measurements, one json record per line")]
    pub measurements: PathBuf,
}

#[derive(Parser, Debug)]
pub struct DefaultConfigCli {
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct StepCli {
    #[arg(long, help = "previous state, json")]
    pub state: String,
    #[arg(long, help = "measurement, json")]
    pub measurement: String,
    #[arg(long, help = "merge config, toml")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod test {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_replay() {
        let cli = Cli::parse_from([
            "nav-merge",
            "replay",
            "--initial",
            "state.json",
            "--config",
            "merge.toml",
            "flight.jsonl",
        ]);
        let ModeSelect::Replay(args) = cli.mode else {
            panic!("expected replay");
        };
        assert_eq!(args.initial, PathBuf::from("state.json"));
        assert_eq!(args.config, Some(PathBuf::from("merge.toml")));
        assert_eq!(args.output, None);
        assert_eq!(args.measurements, PathBuf::from("flight.jsonl"));
    }

    #[test]
    fn replay_needs_initial_state() {
        let result = Cli::try_parse_from(["nav-merge", "replay", "flight.jsonl"]);
        assert!(result.is_err());
    }
}
