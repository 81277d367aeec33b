//! Prisoner's Arena - Iterated Prisoner's Dilemma Tournament
//!
//! Runs a round-robin tournament over a roster of strategies, printing each
//! round as it is played, then the win table.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use match_logic::report::{render_standings, Transcript};
use match_logic::{
    describe_strategy, Agent, ConsolePrompt, PlayerSpec, Strategy, Tournament, TournamentConfig,
    DEFAULT_ROUNDS,
};

#[derive(Debug, Parser)]
#[command(
    name = "prisoners-arena",
    version,
    about = "Iterated Prisoner's Dilemma round-robin tournament"
)]
struct Args {
    /// Rounds per match
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Seed for random players (defaults to the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Roster entry as NAME=STRATEGY (cooperate, defect, tft, random); repeatable
    #[arg(short, long = "player", value_name = "NAME=STRATEGY")]
    players: Vec<PlayerSpec>,

    /// Add an interactive player answering on stdin; repeatable
    #[arg(long = "human", value_name = "NAME")]
    humans: Vec<String>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// List built-in strategies and exit
    #[arg(long)]
    list: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    fn seed(&self) -> anyhow::Result<u64> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => Ok(SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("system clock before unix epoch")?
                .as_nanos() as u64),
        }
    }
}

fn log(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level());

    if args.list {
        for strategy in Strategy::ALL {
            println!("{:<16}{}", strategy.name(), describe_strategy(strategy));
        }
        return Ok(());
    }

    let config = TournamentConfig {
        rounds: args.rounds,
        seed: args.seed()?,
    };
    let roster = if args.players.is_empty() && args.humans.is_empty() {
        TournamentConfig::default_roster()
    } else {
        args.players.clone()
    };

    let mut agents = config.build_agents(&roster);
    agents.extend(args.humans.iter().map(|name| Agent::human(name.as_str(), ConsolePrompt)));
    log::info!("seed {}", config.seed);

    let mut tournament = Tournament::new(agents, config.rounds);
    let report = if args.json {
        tournament.run()?
    } else {
        println!("Seed: {}", config.seed);
        let mut transcript = Transcript::new(io::stdout());
        let report = tournament.run_with(&mut transcript)?;
        transcript.finish().context("writing transcript")?;
        report
    };

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_standings(&report.standings));
    }
    Ok(())
}
