use serde::*;

use crate::data_loader::LeagueTier;
use crate::error::LeagueError;
use crate::match_result::{MatchAward, MatchOutcome};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Supercup,
    Promotion,
    Relegation,
    Safe,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Live,
    Active,
    Completed,
}

/// Where the zone boundaries sit. Which zones a tier has at all is fixed by
/// the tier itself: A has no promotion, C has no relegation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneRules {
    pub supercup_spots: usize,
    pub promotion_cutoff: usize,
    pub relegation_spots: usize,
}

impl Default for ZoneRules {
    fn default() -> Self {
        Self {
            supercup_spots: 2,
            promotion_cutoff: 3,
            relegation_spots: 2,
        }
    }
}

// position is 1-indexed within the tier's sorted standings. A position outside 1..=participants is Safe.
pub fn classify_zone(tier: LeagueTier, position: usize, participants: usize, rules: &ZoneRules) -> Zone {
    if position == 0 || position > participants {
        return Zone::Safe;
    }

    let has_promotion = matches!(tier, LeagueTier::B | LeagueTier::C);
    let has_relegation = matches!(tier, LeagueTier::A | LeagueTier::B);

    if position <= rules.supercup_spots {
        return Zone::Supercup;
    }
    if has_promotion && position <= rules.promotion_cutoff {
        return Zone::Promotion;
    }
    if has_relegation && position > participants.saturating_sub(rules.relegation_spots) {
        return Zone::Relegation;
    }

    Zone::Safe
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMatch {
    pub id: String,
    pub opponent_id: String,
    pub scheduled_date: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub result: Option<MatchOutcome>,
    #[serde(default)]
    pub user_points: Option<f64>,
    #[serde(default)]
    pub opponent_points: Option<f64>,
    #[serde(default)]
    pub points_awarded: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueUser {
    pub id: String,
    pub username: String,
    pub team_name: String,
    pub current_league: LeagueTier,
    #[serde(default)]
    pub league_points: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub total_fantasy_points: f64,
    #[serde(default)]
    pub match_history: Vec<UserMatch>,
}

impl LeagueUser {
    pub fn new(id: &str, username: &str, team_name: &str, current_league: LeagueTier) -> Self {
        Self {
            id: id.to_owned(),
            username: username.to_owned(),
            team_name: team_name.to_owned(),
            current_league,
            league_points: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            total_fantasy_points: 0.0,
            match_history: Vec::new(),
        }
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    // Books a completed 1v1 match. The league tier is never touched here.
    pub fn record_match(
        &mut self,
        match_id: &str,
        opponent_id: &str,
        scheduled_date: &str,
        user_points: f64,
        opponent_points: f64,
        award: MatchAward,
    ) {
        match award.result {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
        self.league_points += award.points;
        self.total_fantasy_points += user_points;

        self.match_history.push(UserMatch {
            id: match_id.to_owned(),
            opponent_id: opponent_id.to_owned(),
            scheduled_date: scheduled_date.to_owned(),
            status: EventStatus::Completed,
            result: Some(award.result),
            user_points: Some(user_points),
            opponent_points: Some(opponent_points),
            points_awarded: Some(award.points),
        });
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTable {
    pub tier: LeagueTier,
    pub users: Vec<LeagueUser>,
    pub max_participants: usize,
    #[serde(default)]
    pub current_round: u32,
    pub total_rounds: u32,
    #[serde(default)]
    pub status: EventStatus,
    pub promotion_spots: usize,
    pub relegation_spots: usize,
}

// One row of a tier's table, ready for display or export
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStandingEntry {
    pub position: usize,
    pub tier: LeagueTier,
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub league_points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub total_fantasy_points: f64,
    pub zone: Zone,
}

impl LeagueTable {
    // An empty table with the tier's usual size and spot counts
    pub fn new(tier: LeagueTier) -> Self {
        let (max_participants, promotion_spots, relegation_spots) = match tier {
            LeagueTier::A => (16, 0, 2),
            LeagueTier::B => (16, 3, 2),
            LeagueTier::C => (20, 3, 0),
        };

        Self {
            tier,
            users: Vec::new(),
            max_participants,
            current_round: 0,
            total_rounds: 15,
            status: EventStatus::Upcoming,
            promotion_spots,
            relegation_spots,
        }
    }

    pub fn validate(&self) -> Result<(), LeagueError> {
        if self.promotion_spots + self.relegation_spots > self.users.len() {
            return Err(LeagueError::SpotsExceedUsers {
                tier: self.tier,
                promotion: self.promotion_spots,
                relegation: self.relegation_spots,
                users: self.users.len(),
            });
        }
        if self.users.len() > self.max_participants {
            return Err(LeagueError::OverCapacity {
                tier: self.tier,
                users: self.users.len(),
                max: self.max_participants,
            });
        }
        Ok(())
    }

    // Most league points first, then most fantasy points. Anything still level keeps table order.
    pub fn standings(&self) -> Vec<&LeagueUser> {
        let mut sorted: Vec<&LeagueUser> = self.users.iter().collect();
        sorted.sort_by(|a, b| {
            b.league_points
                .cmp(&a.league_points)
                .then(b.total_fantasy_points.total_cmp(&a.total_fantasy_points))
        });
        sorted
    }

    pub fn classify_position(&self, position: usize, rules: &ZoneRules) -> Zone {
        classify_zone(self.tier, position, self.users.len(), rules)
    }

    pub fn standings_with_zones(&self, rules: &ZoneRules) -> Vec<LeagueStandingEntry> {
        let participants = self.users.len();

        self.standings()
            .into_iter()
            .enumerate()
            .map(|(idx, u)| LeagueStandingEntry {
                position: idx + 1,
                tier: self.tier,
                user_id: u.id.clone(),
                username: u.username.clone(),
                team_name: u.team_name.clone(),
                league_points: u.league_points,
                wins: u.wins,
                draws: u.draws,
                losses: u.losses,
                total_fantasy_points: u.total_fantasy_points,
                zone: classify_zone(self.tier, idx + 1, participants, rules),
            })
            .collect()
    }

    pub fn user_mut(&mut self, user_id: &str) -> Option<&mut LeagueUser> {
        self.users.iter_mut().find(|u| u.id == user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }
}
