//! End-to-end scenarios through the public API

use std::io::Cursor;

use match_logic::report::render_match;
use match_logic::{
    calculate_match_count, payoff, Agent, Banker, HumanPrompt, Move, Outcome, PlayerSpec, SeededRng,
    Strategy, Tournament, TournamentConfig, Verdict,
};

#[test]
fn cooperator_loses_every_round_to_defector() {
    let mut p1 = Agent::builtin("Player 1", Strategy::AlwaysCooperate);
    let mut p2 = Agent::builtin("Player 2", Strategy::AlwaysDefect);

    let result = Banker::new(&mut p1, &mut p2).run_game().unwrap();

    assert_eq!(result.rounds, vec![payoff(Move::Cooperate, Move::Defect); 3]);
    assert_eq!((result.total_score_a, result.total_score_b), (0, 15));
    assert_eq!(result.verdict, Verdict::PlayerB);
}

#[test]
fn two_cooperators_draw() {
    let mut p1 = Agent::builtin("Player 1", Strategy::AlwaysCooperate);
    let mut p2 = Agent::builtin("Player 2", Strategy::AlwaysCooperate);

    let result = Banker::new(&mut p1, &mut p2).run_game().unwrap();

    assert!(result.rounds.iter().all(|r| r.outcome == Outcome::BothCooperate));
    assert_eq!((result.total_score_a, result.total_score_b), (9, 9));
    assert_eq!(result.verdict, Verdict::Draw);
}

#[test]
fn two_player_tournament() {
    let roster = vec![
        PlayerSpec::new("AlwaysCooperate", Strategy::AlwaysCooperate),
        PlayerSpec::new("AlwaysDefect", Strategy::AlwaysDefect),
    ];
    let mut tournament = Tournament::from_config(&TournamentConfig::default(), &roster);
    let report = tournament.run().unwrap();

    assert_eq!(tournament.results()["AlwaysCooperate"], 0);
    assert_eq!(tournament.results()["AlwaysDefect"], 1);
    assert_eq!(report.matches.len(), 1);
}

#[test]
fn default_roster_plays_six_matches() {
    let roster = TournamentConfig::default_roster();
    let config = TournamentConfig { rounds: 3, seed: 42 };
    let mut tournament = Tournament::from_config(&config, &roster);
    let report = tournament.run().unwrap();

    assert_eq!(report.matches.len(), calculate_match_count(roster.len()));
    let wins: u32 = report.standings.iter().map(|s| s.wins).sum();
    assert!(wins as usize <= calculate_match_count(roster.len()));

    // Defector never scores less than its opponent in any round
    let defector = report.standings.iter().find(|s| s.name == "Defector").unwrap();
    assert_eq!(defector.wins, 3);
}

#[test]
fn replaying_from_fresh_agents_is_identical() {
    let play = |seed| {
        let mut a = Agent::new("A", Strategy::TitForTat, SeededRng::new(seed, 0));
        let mut b = Agent::new("B", Strategy::Random, SeededRng::new(seed, 1));
        Banker::with_rounds(&mut a, &mut b, 40).run_game().unwrap().rounds
    };
    assert_eq!(play(8), play(8));
}

#[test]
fn human_joins_a_match() {
    let prompt = HumanPrompt::new(Cursor::new(b"d\nD\n  c  \n".to_vec()), Vec::new());
    let mut human = Agent::human("Human", prompt);
    let mut tft = Agent::builtin("TitForTat", Strategy::TitForTat);

    let result = Banker::new(&mut human, &mut tft).run_game().unwrap();
    let outcomes: Vec<_> = result.rounds.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::PlayerAWin, Outcome::BothDefect, Outcome::PlayerBWin]);
    assert_eq!((result.total_score_a, result.total_score_b), (6, 6));

    let text = render_match(&result);
    assert!(text.contains(" 1W  BD  2W \n"));
    assert!(text.ends_with("Draw!\n"));
}
