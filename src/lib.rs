//! Fantasy Counter-Strike scoring and league ladder.
//!
//! Turns per-player match stat lines into fantasy points, checks rosters,
//! totals each user's five picks for the day, settles 1v1 league fixtures and
//! sorts the A/B/C ladder into Super Cup, promotion and relegation zones.
//! Everything is a pure function of its inputs.

pub mod composition;
pub mod daily;
pub mod data_loader;
pub mod error;
pub mod fixtures;
pub mod league;
pub mod match_result;
pub mod multi_kill;
pub mod report;
pub mod scoring;
pub mod scoring_context;
pub mod super_cup;
pub mod util;

pub use composition::{validate_team_composition, CompositionReport, RosterPick, TeamCompositionRules};
pub use daily::{average_points_for_non_playing, calculate_daily_results};
pub use data_loader::{
    load_matchday, FantasyTeam, LeagueTier, MatchPerformance, MatchResult, Matchday, PlayerDirectory, PlayerRole,
    PlayerTier,
};
pub use error::{DataError, LeagueError, SuperCupError};
pub use fixtures::{play_fixture, play_matchday, Fixture, FixtureOutcome};
pub use league::{classify_zone, LeagueStandingEntry, LeagueTable, LeagueUser, Zone, ZoneRules};
pub use match_result::{determine_league_results, determine_match_result, LeagueResult, MatchAward, MatchOutcome};
pub use multi_kill::MultiKills;
pub use scoring::{calculate_fantasy_points, FantasyPoints, PointsBreakdown};
pub use scoring_context::ScoringContext;
pub use super_cup::{CupRound, SuperCup};
