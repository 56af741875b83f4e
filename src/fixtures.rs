use serde::*;

use crate::daily::calculate_daily_results;
use crate::data_loader::{FantasyTeam, MatchPerformance, MatchResult, PlayerDirectory};
use crate::error::LeagueError;
use crate::league::{EventStatus, LeagueTable};
use crate::match_result::{determine_match_result, MatchAward};
use crate::scoring_context::ScoringContext;

/// A scheduled 1v1 league match between two users of the same tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: String,
    pub home: String,
    pub away: String,
    pub scheduled_date: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FixtureOutcome {
    pub fixture_id: String,
    pub home: FantasyTeam,
    pub away: FantasyTeam,
    pub home_award: MatchAward,
    pub away_award: MatchAward,
}

// Sides of a fixture as indices: (table, home roster, away roster)
fn resolve(fixture: &Fixture, teams: &[FantasyTeam], tables: &[LeagueTable]) -> Result<(usize, usize, usize), LeagueError> {
    let find_team = |user_id: &str| {
        teams
            .iter()
            .position(|t| t.user_id == user_id)
            .ok_or_else(|| LeagueError::MissingTeam(user_id.to_owned()))
    };
    let find_table = |user_id: &str| {
        tables
            .iter()
            .position(|t| t.contains(user_id))
            .ok_or_else(|| LeagueError::UnknownUser(user_id.to_owned()))
    };

    if fixture.home == fixture.away {
        return Err(LeagueError::SelfFixture(fixture.home.clone()));
    }

    let home_table = find_table(&fixture.home)?;
    let away_table = find_table(&fixture.away)?;
    if home_table != away_table {
        return Err(LeagueError::CrossTierFixture {
            home: fixture.home.clone(),
            away: fixture.away.clone(),
        });
    }

    Ok((home_table, find_team(&fixture.home)?, find_team(&fixture.away)?))
}

/*
    Scores both rosters against each other, decides the match and books it on both users.
    Only the two rosters take part in the aggregation, so the bench discount depends on this opponent alone.
*/
pub fn play_fixture(
    fixture: &Fixture,
    teams: &[FantasyTeam],
    performances: &[MatchPerformance],
    results: &[MatchResult],
    directory: &PlayerDirectory,
    tables: &mut [LeagueTable],
    ctx: &ScoringContext,
) -> Result<FixtureOutcome, LeagueError> {
    let (table_idx, home_idx, away_idx) = resolve(fixture, teams, tables)?;

    let pair = [teams[home_idx].clone(), teams[away_idx].clone()];
    let [home, away]: [FantasyTeam; 2] = calculate_daily_results(&pair, performances, results, directory, ctx)
        .try_into()
        .map_err(|_| LeagueError::MissingTeam(fixture.away.clone()))?;

    let [home_award, away_award] = determine_match_result(home.total_points, away.total_points, &ctx.league_points);

    let table = &mut tables[table_idx];
    if let Some(user) = table.user_mut(&fixture.home) {
        user.record_match(&fixture.id, &fixture.away, &fixture.scheduled_date, home.total_points, away.total_points, home_award);
    }
    if let Some(user) = table.user_mut(&fixture.away) {
        user.record_match(&fixture.id, &fixture.home, &fixture.scheduled_date, away.total_points, home.total_points, away_award);
    }

    log::info!(
        "Fixture {}: {} {:.2} - {:.2} {} ({:?}/{:?})",
        fixture.id, home.team_name, home.total_points, away.total_points, away.team_name, home_award.result, away_award.result
    );

    Ok(FixtureOutcome {
        fixture_id: fixture.id.clone(),
        home,
        away,
        home_award,
        away_award,
    })
}

// Every fixture is checked before any is played, so a bad fixture leaves the tables untouched.
// Each table that hosted at least one fixture moves on one round.
pub fn play_matchday(
    fixtures: &[Fixture],
    teams: &[FantasyTeam],
    performances: &[MatchPerformance],
    results: &[MatchResult],
    directory: &PlayerDirectory,
    tables: &mut [LeagueTable],
    ctx: &ScoringContext,
) -> Result<Vec<FixtureOutcome>, LeagueError> {
    let mut touched = vec![false; tables.len()];
    for fixture in fixtures {
        let (table_idx, _, _) = resolve(fixture, teams, tables)?;
        touched[table_idx] = true;
    }

    let mut outcomes = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        outcomes.push(play_fixture(fixture, teams, performances, results, directory, tables, ctx)?);
    }

    for (table, _) in tables.iter_mut().zip(touched).filter(|(_, t)| *t) {
        table.current_round += 1;
        table.status = EventStatus::Active;
    }

    Ok(outcomes)
}
