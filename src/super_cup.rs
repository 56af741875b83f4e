use serde::*;

use crate::data_loader::LeagueTier;
use crate::error::SuperCupError;
use crate::league::{EventStatus, LeagueTable, LeagueUser};

// Qualifiers per tier
const QUALIFIERS_PER_TIER: usize = 2;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CupRound {
    Semifinal,
    Final,
    ThirdPlace,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CupMatchResult {
    pub winner: String,
    pub user1_points: f64,
    pub user2_points: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuperCupMatch {
    pub id: String,
    pub round: CupRound,
    pub user1: String,
    pub user2: String,
    pub status: EventStatus,
    pub result: Option<CupMatchResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Prizes {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl Default for Prizes {
    fn default() -> Self {
        Self {
            first: "50,000 Credits + Champion Badge".to_string(),
            second: "25,000 Credits + Runner-up Badge".to_string(),
            third: "10,000 Credits + Bronze Badge".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuperCup {
    pub id: String,
    pub participants: Vec<LeagueUser>,
    pub status: EventStatus,
    pub matches: Vec<SuperCupMatch>,
    pub winner: Option<String>,
    pub prizes: Prizes,
}

impl SuperCup {
    /*
        Takes the top two of every tier, A first. Needs exactly one table per tier.
        Ranking uses the same standings order as the league tables.
    */
    pub fn qualify(id: &str, tables: &[LeagueTable]) -> Result<Self, SuperCupError> {
        let mut participants = Vec::with_capacity(QUALIFIERS_PER_TIER * LeagueTier::ALL.len());

        for tier in LeagueTier::ALL {
            let mut of_tier = tables.iter().filter(|t| t.tier == tier);
            let table = of_tier.next().ok_or(SuperCupError::MissingTier(tier))?;
            if of_tier.next().is_some() {
                return Err(SuperCupError::DuplicateTier(tier));
            }

            if table.users.len() < QUALIFIERS_PER_TIER {
                return Err(SuperCupError::NotEnoughUsers {
                    tier,
                    users: table.users.len(),
                    needed: QUALIFIERS_PER_TIER,
                });
            }

            for user in table.standings().into_iter().take(QUALIFIERS_PER_TIER) {
                log::info!("{} ({}) qualifies for the Super Cup from league {:?}", user.username, user.id, tier);
                participants.push(user.clone());
            }
        }

        Ok(Self {
            id: id.to_owned(),
            participants,
            status: EventStatus::Upcoming,
            matches: Vec::new(),
            winner: None,
            prizes: Prizes::default(),
        })
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|u| u.id == user_id)
    }

    pub fn schedule_match(&mut self, round: CupRound, user1: &str, user2: &str) -> Result<&SuperCupMatch, SuperCupError> {
        for user in [user1, user2] {
            if !self.is_participant(user) {
                return Err(SuperCupError::UnknownParticipant(user.to_owned()));
            }
        }

        let id = format!("{}-{}", self.id, self.matches.len() + 1);
        self.matches.push(SuperCupMatch {
            id,
            round,
            user1: user1.to_owned(),
            user2: user2.to_owned(),
            status: EventStatus::Upcoming,
            result: None,
        });
        self.status = EventStatus::Active;

        Ok(&self.matches[self.matches.len() - 1])
    }

    // Knockout: the higher fantasy total goes through, a level score is rejected. Deciding the final crowns the winner.
    pub fn record_result(&mut self, match_id: &str, user1_points: f64, user2_points: f64) -> Result<&SuperCupMatch, SuperCupError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or_else(|| SuperCupError::UnknownMatch(match_id.to_owned()))?;

        let m = &mut self.matches[idx];
        if m.status == EventStatus::Completed {
            return Err(SuperCupError::AlreadyCompleted(match_id.to_owned()));
        }
        if user1_points == user2_points {
            return Err(SuperCupError::Undecided {
                match_id: match_id.to_owned(),
                points: user1_points,
            });
        }

        let winner = if user1_points > user2_points { m.user1.clone() } else { m.user2.clone() };
        m.status = EventStatus::Completed;
        m.result = Some(CupMatchResult {
            winner: winner.clone(),
            user1_points,
            user2_points,
        });

        if m.round == CupRound::Final {
            log::info!("{} wins Super Cup {}", winner, self.id);
            self.winner = Some(winner);
            self.status = EventStatus::Completed;
        }

        Ok(&self.matches[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::tests::table_with_users;

    fn ladder() -> Vec<LeagueTable> {
        vec![
            table_with_users(LeagueTier::A, 16),
            table_with_users(LeagueTier::B, 16),
            table_with_users(LeagueTier::C, 20),
        ]
    }

    #[test]
    fn test_qualify_top_two_of_each_tier() {
        let cup = SuperCup::qualify("supercup-2024", &ladder()).unwrap();

        let ids: Vec<&str> = cup.participants.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2", "B1", "B2", "C1", "C2"]);
        assert_eq!(cup.status, EventStatus::Upcoming);
        assert_eq!(cup.winner, None);
    }

    #[test]
    fn test_qualify_uses_standings_order() {
        let mut tables = ladder();
        tables[2].users[7].league_points = 500;

        let cup = SuperCup::qualify("cup", &tables).unwrap();
        assert_eq!(cup.participants[4].id, "C8");
        assert_eq!(cup.participants[5].id, "C1");
    }

    #[test]
    fn test_qualify_needs_every_tier_once() {
        let mut tables = ladder();
        tables.pop();
        assert_eq!(SuperCup::qualify("cup", &tables), Err(SuperCupError::MissingTier(LeagueTier::C)));

        let mut tables = ladder();
        tables.push(table_with_users(LeagueTier::A, 4));
        assert_eq!(SuperCup::qualify("cup", &tables), Err(SuperCupError::DuplicateTier(LeagueTier::A)));

        let mut tables = ladder();
        tables[1] = table_with_users(LeagueTier::B, 1);
        assert_eq!(
            SuperCup::qualify("cup", &tables),
            Err(SuperCupError::NotEnoughUsers { tier: LeagueTier::B, users: 1, needed: 2 })
        );
    }

    #[test]
    fn test_knockout_to_final() {
        let mut cup = SuperCup::qualify("cup", &ladder()).unwrap();

        let semi = cup.schedule_match(CupRound::Semifinal, "A1", "C2").unwrap().id.clone();
        let result = cup.record_result(&semi, 70.5, 81.0).unwrap();
        assert_eq!(result.result.as_ref().map(|r| r.winner.as_str()), Some("C2"));
        assert_eq!(cup.status, EventStatus::Active);

        let final_id = cup.schedule_match(CupRound::Final, "C2", "B1").unwrap().id.clone();
        cup.record_result(&final_id, 99.0, 98.5).unwrap();

        assert_eq!(cup.winner.as_deref(), Some("C2"));
        assert_eq!(cup.status, EventStatus::Completed);
    }

    #[test]
    fn test_knockout_rejects_bad_input() {
        let mut cup = SuperCup::qualify("cup", &ladder()).unwrap();

        assert_eq!(
            cup.schedule_match(CupRound::Semifinal, "A1", "A3").unwrap_err(),
            SuperCupError::UnknownParticipant("A3".to_string())
        );

        let id = cup.schedule_match(CupRound::ThirdPlace, "A2", "B2").unwrap().id.clone();
        assert_eq!(
            cup.record_result(&id, 60.0, 60.0).unwrap_err(),
            SuperCupError::Undecided { match_id: id.clone(), points: 60.0 }
        );

        cup.record_result(&id, 61.0, 60.0).unwrap();
        assert_eq!(cup.record_result(&id, 1.0, 0.0).unwrap_err(), SuperCupError::AlreadyCompleted(id.clone()));
        assert_eq!(cup.record_result("missing", 1.0, 0.0).unwrap_err(), SuperCupError::UnknownMatch("missing".to_string()));
        assert_eq!(cup.winner, None);
    }
}
