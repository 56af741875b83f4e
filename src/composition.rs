use serde::*;

use crate::data_loader::PlayerTier;

/// Shape limits for a fantasy roster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamCompositionRules {
    pub max_tier1: usize,
    pub max_tier2: usize,
    pub max_tier3: usize,
    pub max_from_same_team: usize,
    pub total_players: usize,
}

impl TeamCompositionRules {
    pub fn max_for_tier(&self, tier: PlayerTier) -> usize {
        match tier {
            PlayerTier::Tier1 => self.max_tier1,
            PlayerTier::Tier2 => self.max_tier2,
            PlayerTier::Tier3 => self.max_tier3,
        }
    }
}

impl Default for TeamCompositionRules {
    fn default() -> Self {
        Self {
            max_tier1: 2,
            max_tier2: 2,
            max_tier3: 1,
            max_from_same_team: 2,
            total_players: 5,
        }
    }
}

// One picked player, as far as the roster rules care
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterPick {
    pub tier: PlayerTier,
    pub team: String,
}

impl RosterPick {
    pub fn new(tier: PlayerTier, team: &str) -> Self {
        Self { tier, team: team.to_owned() }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CompositionReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

// Runs every check so all violations can be shown at once. Team messages come in order of first appearance.
pub fn validate_team_composition(players: &[RosterPick], rules: &TeamCompositionRules) -> CompositionReport {
    let mut errors = Vec::new();

    if players.len() != rules.total_players {
        errors.push(format!("Roster needs {} players, got {}", rules.total_players, players.len()));
    }

    for tier in PlayerTier::ALL {
        let count = players.iter().filter(|p| p.tier == tier).count();
        let cap = rules.max_for_tier(tier);

        if count > cap {
            errors.push(format!("At most {cap} {tier:?} players allowed, got {count}"));
        }
    }

    let mut team_counts: Vec<(&str, usize)> = Vec::new();
    for p in players {
        match team_counts.iter_mut().find(|(team, _)| *team == p.team) {
            Some(entry) => entry.1 += 1,
            None => team_counts.push((p.team.as_str(), 1)),
        }
    }

    for (team, count) in team_counts {
        if count > rules.max_from_same_team {
            errors.push(format!("At most {} players from {} allowed, got {}", rules.max_from_same_team, team, count));
        }
    }

    CompositionReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::PlayerTier::*;

    fn roster(picks: &[(PlayerTier, &str)]) -> Vec<RosterPick> {
        picks.iter().map(|(tier, team)| RosterPick::new(*tier, team)).collect()
    }

    #[test]
    fn test_valid_roster() {
        let players = roster(&[
            (Tier1, "Vitality"),
            (Tier1, "Spirit"),
            (Tier2, "Vitality"),
            (Tier2, "MOUZ"),
            (Tier3, "Spirit"),
        ]);

        let report = validate_team_composition(&players, &TeamCompositionRules::default());
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_too_many_tier1() {
        let players = roster(&[
            (Tier1, "Vitality"),
            (Tier1, "Spirit"),
            (Tier1, "MOUZ"),
            (Tier2, "FaZe"),
            (Tier3, "G2"),
        ]);

        let report = validate_team_composition(&players, &TeamCompositionRules::default());
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["At most 2 Tier1 players allowed, got 3".to_string()]);
    }

    #[test]
    fn test_all_violations_are_reported() {
        let players = roster(&[
            (Tier3, "NAVI"),
            (Tier3, "NAVI"),
            (Tier3, "NAVI"),
            (Tier2, "FaZe"),
        ]);

        let report = validate_team_composition(&players, &TeamCompositionRules::default());
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "Roster needs 5 players, got 4".to_string(),
                "At most 1 Tier3 players allowed, got 3".to_string(),
                "At most 2 players from NAVI allowed, got 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_team_messages_follow_first_appearance() {
        let players = roster(&[
            (Tier1, "Spirit"),
            (Tier2, "G2"),
            (Tier1, "G2"),
            (Tier2, "Spirit"),
            (Tier3, "G2"),
        ]);
        let rules = TeamCompositionRules { max_from_same_team: 1, ..Default::default() };

        let report = validate_team_composition(&players, &rules);
        assert_eq!(
            report.errors,
            vec![
                "At most 1 players from Spirit allowed, got 2".to_string(),
                "At most 1 players from G2 allowed, got 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_roster_size() {
        let players = roster(&[(Tier1, "Vitality"), (Tier2, "Spirit"), (Tier3, "MOUZ")]);
        let rules = TeamCompositionRules { total_players: 3, ..Default::default() };

        assert!(validate_team_composition(&players, &rules).valid);
    }
}
