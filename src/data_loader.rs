use serde::*;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::composition::RosterPick;
use crate::error::DataError;
use crate::fixtures::Fixture;
use crate::league::LeagueTable;
use crate::multi_kill::MultiKills;
use crate::scoring::FantasyPoints;

// Loads a matchday from the JSON file at file_path.
// Ids coming from scraped sources are sometimes strings, so every id goes through deserialize_number_from_string.
// Roles, tiers and league tiers are closed enums: an unknown value fails the whole load instead of being defaulted.
pub fn load_matchday(file_path: &Path) -> Result<Matchday, DataError> {
    let data = fs::read_to_string(file_path)?;
    let matchday: Matchday = serde_json::from_str(&data[..])?;

    log::info!(
        "Loaded matchday {} from {}: {} players, {} teams, {} performances, {} fixtures",
        matchday.date,
        file_path.display(),
        matchday.players.len(),
        matchday.teams.len(),
        matchday.performances.len(),
        matchday.fixtures.len(),
    );

    Ok(matchday)
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Matchday {
    pub date: String,
    #[serde(default)]
    pub players: Vec<PlayerInfo>,
    #[serde(default)]
    pub teams: Vec<FantasyTeam>,
    #[serde(default)]
    pub performances: Vec<MatchPerformance>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub leagues: Vec<LeagueTable>,
}

impl Matchday {
    pub fn directory(&self) -> PlayerDirectory {
        PlayerDirectory::new(self.players.clone())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    AWP,
    Entry,
    Rifler,
    Support,
    IGL,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerTier {
    Tier1,
    Tier2,
    Tier3,
}

impl PlayerTier {
    pub const ALL: [PlayerTier; 3] = [PlayerTier::Tier1, PlayerTier::Tier2, PlayerTier::Tier3];
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeagueTier {
    A,
    B,
    C,
}

impl LeagueTier {
    pub const ALL: [LeagueTier; 3] = [LeagueTier::A, LeagueTier::B, LeagueTier::C];
}

// Which side of the real match a player was on. Result flags are always reported from team 1's point of view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchSide {
    #[default]
    Team1,
    Team2,
}

// Multi-kills arrive either packed into one integer (see multi_kill.rs) or as explicit counts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum MultiKillInput {
    Packed(u32),
    Counts(MultiKills),
}

impl MultiKillInput {
    pub fn counts(&self) -> MultiKills {
        match self {
            MultiKillInput::Packed(encoded) => MultiKills::decode(*encoded),
            MultiKillInput::Counts(counts) => *counts,
        }
    }
}

impl Default for MultiKillInput {
    fn default() -> Self {
        MultiKillInput::Packed(0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPerformance {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub player_id: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub match_id: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
    pub adr: f64,
    #[serde(rename = "rating30")]
    pub rating: f64,
    pub kast: f64,
    pub first_kills: u32,
    pub first_deaths: u32,
    pub clutches_won: u32,
    pub clutches_lost: u32,
    #[serde(default)]
    pub multi_kills: MultiKillInput,
    pub utility_damage: f64,
    pub flash_assists: u32,
    pub team_rounds: u32,
    pub mvp_rounds: u32,
    pub player_role: PlayerRole,
    pub player_tier: PlayerTier,
    #[serde(default)]
    pub side: MatchSide,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub match_id: u32,
    pub team1_won: bool,
}

// A user's five picks. The array length is the roster-size invariant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FantasyTeam {
    pub user_id: String,
    pub team_name: String,
    pub players: [u32; 5],
    #[serde(default)]
    pub total_points: f64,
    #[serde(default)]
    pub player_points: Vec<FantasyPoints>,
}

impl FantasyTeam {
    pub fn new(user_id: &str, team_name: &str, players: [u32; 5]) -> Self {
        Self {
            user_id: user_id.to_owned(),
            team_name: team_name.to_owned(),
            players,
            total_points: 0.0,
            player_points: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub player_id: u32,
    pub nickname: String,
    pub role: PlayerRole,
    pub tier: PlayerTier,
    pub team: String,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<u32, PlayerInfo>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<PlayerInfo>) -> Self {
        let mut directory = Self::default();
        for p in players {
            directory.players.insert(p.player_id, p);
        }
        directory
    }

    pub fn get(&self, player_id: u32) -> Option<&PlayerInfo> {
        self.players.get(&player_id)
    }

    pub fn tier_of(&self, player_id: u32) -> Option<PlayerTier> {
        self.get(player_id).map(|p| p.tier)
    }

    // Unknown players are left out, which the validator then reports as a short roster.
    pub fn roster_picks(&self, player_ids: &[u32]) -> Vec<RosterPick> {
        let mut picks = Vec::new();
        for id in player_ids {
            match self.get(*id) {
                Some(p) => picks.push(RosterPick::new(p.tier, &p.team)),
                None => log::warn!("Player {id} is not in the directory, leaving them out of the roster check"),
            }
        }
        picks
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
