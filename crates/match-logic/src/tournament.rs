//! Round-robin tournament over a roster of agents

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::agent::Agent;
use crate::error::{ArenaError, Result};
use crate::game::{Banker, MatchObserver, MatchResult, Verdict, DEFAULT_ROUNDS};
use crate::pairing::round_robin_pairs;
use crate::random::SeededRng;
use crate::strategy::Strategy;

/// Roster entry for a built-in agent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub strategy: Strategy,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self { name: name.into(), strategy }
    }
}

/// Parses `NAME=STRATEGY`
impl FromStr for PlayerSpec {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, strategy) = s
            .split_once('=')
            .ok_or_else(|| ArenaError::InvalidPlayerSpec(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ArenaError::InvalidPlayerSpec(s.to_string()));
        }
        Ok(Self::new(name, strategy.parse()?))
    }
}

/// Tournament settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Rounds per match, applied to every pairing
    pub rounds: u32,
    /// Root seed; each agent draws from its own stream of it
    pub seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self { rounds: DEFAULT_ROUNDS, seed: 0 }
    }
}

impl TournamentConfig {
    /// Build agents for a roster, seeding each from its roster slot
    pub fn build_agents(&self, roster: &[PlayerSpec]) -> Vec<Agent> {
        roster
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let rng = SeededRng::new(self.seed, i as u32);
                Agent::new(spec.name.as_str(), spec.strategy, rng)
            })
            .collect()
    }

    /// The roster the arena plays when none is given
    pub fn default_roster() -> Vec<PlayerSpec> {
        vec![
            PlayerSpec::new("Cooperator", Strategy::AlwaysCooperate),
            PlayerSpec::new("Defector", Strategy::AlwaysDefect),
            PlayerSpec::new("TitForTat", Strategy::TitForTat),
            PlayerSpec::new("RandomPlayer", Strategy::Random),
        ]
    }
}

/// Win count for one name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
}

/// Everything a tournament run produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub rounds: u32,
    pub matches: Vec<MatchResult>,
    pub standings: Vec<Standing>,
}

impl TournamentReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// All-pairs tournament.
///
/// Owns its agents for their whole lifetime. Agents are lent to one banker at
/// a time and keep their history and score from match to match, so every
/// verdict compares running totals rather than the last match alone.
#[derive(Debug)]
pub struct Tournament {
    agents: Vec<Agent>,
    rounds: u32,
    results: HashMap<String, u32>,
}

impl Tournament {
    pub fn new(agents: Vec<Agent>, rounds: u32) -> Self {
        Self {
            agents,
            rounds,
            results: HashMap::new(),
        }
    }

    pub fn from_config(config: &TournamentConfig, roster: &[PlayerSpec]) -> Self {
        Self::new(config.build_agents(roster), config.rounds)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Win counts by agent name from the latest run
    pub fn results(&self) -> &HashMap<String, u32> {
        &self.results
    }

    /// Win counts in roster order, one entry per distinct name
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = Vec::with_capacity(self.agents.len());
        for agent in &self.agents {
            if standings.iter().any(|s| s.name == agent.name()) {
                continue;
            }
            standings.push(Standing {
                name: agent.name().to_string(),
                wins: self.results.get(agent.name()).copied().unwrap_or(0),
            });
        }
        standings
    }

    pub fn run(&mut self) -> Result<TournamentReport> {
        self.run_with(&mut ())
    }

    /// Play every pairing once, reporting every match and round to `observer`
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<TournamentReport>
    where
        O: MatchObserver + ?Sized,
    {
        self.results = self
            .agents
            .iter()
            .map(|agent| (agent.name().to_string(), 0))
            .collect();

        let pairs = round_robin_pairs(self.agents.len());
        log::info!(
            "tournament: {} agents, {} matches, {} rounds each",
            self.agents.len(),
            pairs.len(),
            self.rounds,
        );

        let mut matches = Vec::with_capacity(pairs.len());
        for (a, b) in pairs {
            let (left, right) = self.agents.split_at_mut(b);
            let player_a = &mut left[a];
            let player_b = &mut right[0];

            log::info!("Playing match between {} and {}", player_a.name(), player_b.name());
            let result = Banker::with_rounds(player_a, player_b, self.rounds)
                .run_game_observed(observer)?;

            let winner = match result.verdict {
                Verdict::PlayerA => Some(&result.player_a),
                Verdict::PlayerB => Some(&result.player_b),
                Verdict::Draw => None,
            };
            if let Some(name) = winner {
                *self.results.entry(name.clone()).or_insert(0) += 1;
            }

            matches.push(result);
        }

        let standings = self.standings();
        for standing in &standings {
            log::info!("{}: {} wins", standing.name, standing.wins);
        }

        Ok(TournamentReport {
            rounds: self.rounds,
            matches,
            standings,
        })
    }
}
