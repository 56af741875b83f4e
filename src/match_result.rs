use serde::*;

use crate::data_loader::FantasyTeam;
use crate::scoring_context::LeaguePointAwards;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn league_points(&self, awards: &LeaguePointAwards) -> u32 {
        match self {
            MatchOutcome::Win => awards.win,
            MatchOutcome::Draw => awards.draw,
            MatchOutcome::Loss => awards.loss,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchAward {
    pub result: MatchOutcome,
    pub points: u32,
}

impl MatchAward {
    pub fn new(result: MatchOutcome, awards: &LeaguePointAwards) -> Self {
        Self { result, points: result.league_points(awards) }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueResult {
    pub user_id: String,
    pub result: MatchOutcome,
    pub points: u32,
}

// 1v1: exact equality is the only draw
pub fn determine_match_result(team1_points: f64, team2_points: f64, awards: &LeaguePointAwards) -> [MatchAward; 2] {
    let (first, second) = if team1_points > team2_points {
        (MatchOutcome::Win, MatchOutcome::Loss)
    } else if team1_points < team2_points {
        (MatchOutcome::Loss, MatchOutcome::Win)
    } else {
        (MatchOutcome::Draw, MatchOutcome::Draw)
    };

    [MatchAward::new(first, awards), MatchAward::new(second, awards)]
}

// Any number of teams, highest total first. A total shared with another team is a draw wherever it sits;
// otherwise the top team wins and everyone else loses.
pub fn determine_league_results(teams: &[FantasyTeam], awards: &LeaguePointAwards) -> Vec<LeagueResult> {
    let mut sorted: Vec<&FantasyTeam> = teams.iter().collect();
    sorted.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));

    let mut out = Vec::with_capacity(sorted.len());
    for (idx, team) in sorted.iter().enumerate() {
        let same_points = sorted.iter().filter(|t| t.total_points == team.total_points).count();

        let result = if same_points > 1 {
            MatchOutcome::Draw
        } else if idx == 0 {
            MatchOutcome::Win
        } else {
            MatchOutcome::Loss
        };

        out.push(LeagueResult {
            user_id: team.user_id.clone(),
            result,
            points: result.league_points(awards),
        });
    }

    out
}
