use thiserror::Error;

use crate::data_loader::LeagueTier;

/// Failures while reading a matchday file or writing reports.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum LeagueError {
    #[error("League {tier:?} has {promotion} promotion and {relegation} relegation spots but only {users} users")]
    SpotsExceedUsers {
        tier: LeagueTier,
        promotion: usize,
        relegation: usize,
        users: usize,
    },

    #[error("League {tier:?} has {users} users, maximum is {max}")]
    OverCapacity { tier: LeagueTier, users: usize, max: usize },

    #[error("Unknown league user {0}")]
    UnknownUser(String),

    #[error("No fantasy team registered for user {0}")]
    MissingTeam(String),

    #[error("Fixture pairs user {0} with themselves")]
    SelfFixture(String),

    #[error("Fixture between {home} and {away} crosses league tiers")]
    CrossTierFixture { home: String, away: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum SuperCupError {
    #[error("No league table for tier {0:?}")]
    MissingTier(LeagueTier),

    #[error("More than one league table for tier {0:?}")]
    DuplicateTier(LeagueTier),

    #[error("League {tier:?} has {users} users, at least {needed} are needed to qualify")]
    NotEnoughUsers { tier: LeagueTier, users: usize, needed: usize },

    #[error("{0} is not a Super Cup participant")]
    UnknownParticipant(String),

    #[error("No Super Cup match with id {0}")]
    UnknownMatch(String),

    #[error("Super Cup match {0} is already completed")]
    AlreadyCompleted(String),

    #[error("Super Cup match {match_id} ended level at {points}, a knockout needs a winner")]
    Undecided { match_id: String, points: f64 },
}
