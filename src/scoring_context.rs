use serde::*;
use std::fs;
use std::path::Path;

use crate::composition::TeamCompositionRules;
use crate::data_loader::{PlayerRole, PlayerTier};
use crate::error::DataError;
use crate::league::ZoneRules;

/*
    Every tunable of the engine lives here. ScoringContext::default() is the live rule set;
    a JSON file can override any subset of it (missing sections and fields keep their defaults).
*/

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringContext {
    pub rates: ScoringRates,
    pub tier_multipliers: TierMultipliers,
    pub role_bonuses: RoleBonuses,
    pub tier_averages: TierAverages,
    pub league_points: LeaguePointAwards,
    pub composition: TeamCompositionRules,
    pub zones: ZoneRules,
}

impl ScoringContext {
    pub fn from_json_file(file_path: &Path) -> Result<Self, DataError> {
        let data = fs::read_to_string(file_path)?;
        let context: ScoringContext = serde_json::from_str(&data[..])?;
        log::info!("Loaded scoring context overrides from {}", file_path.display());
        Ok(context)
    }

    pub fn tier_multiplier(&self, tier: PlayerTier) -> f64 {
        self.tier_multipliers.get(tier)
    }

    pub fn role_bonus(&self, role: PlayerRole) -> &RoleBonus {
        self.role_bonuses.get(role)
    }
}

// Base points per unit of each stat, before role bonus and tier multiplier
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringRates {
    pub kill: f64,
    pub death: f64,
    pub assist: f64,
    pub headshot: f64,

    pub adr: f64,
    pub rating: f64,
    pub rating_baseline: f64,   // Rating above this earns points, below it costs them
    pub kast: f64,

    pub first_kill: f64,
    pub first_death: f64,
    pub clutch_won: f64,
    pub clutch_lost: f64,

    pub double_kill: f64,
    pub triple_kill: f64,
    pub quadra_kill: f64,
    pub ace: f64,

    pub utility_damage: f64,
    pub flash_assist: f64,
    pub mvp_round: f64,

    pub win_bonus: f64,
    pub loss_penalty: f64,
}

impl Default for ScoringRates {
    fn default() -> Self {
        Self {
            kill: 2.0,
            death: -1.0,
            assist: 1.0,
            headshot: 0.5,

            adr: 0.05,
            rating: 10.0,
            rating_baseline: 1.0,
            kast: 0.1,

            first_kill: 3.0,
            first_death: -2.0,
            clutch_won: 5.0,
            clutch_lost: -1.0,

            double_kill: 2.0,
            triple_kill: 5.0,
            quadra_kill: 10.0,
            ace: 20.0,

            utility_damage: 0.02,
            flash_assist: 1.0,
            mvp_round: 2.0,

            win_bonus: 5.0,
            loss_penalty: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TierMultipliers {
    pub tier1: f64,
    pub tier2: f64,
    pub tier3: f64,
}

impl TierMultipliers {
    pub fn get(&self, tier: PlayerTier) -> f64 {
        match tier {
            PlayerTier::Tier1 => self.tier1,
            PlayerTier::Tier2 => self.tier2,
            PlayerTier::Tier3 => self.tier3,
        }
    }
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self {
            tier1: 1.2,
            tier2: 1.0,
            tier3: 0.8,
        }
    }
}

/// Extra points a role earns on top of the base rates.
///
/// `kill`, `assist`, `first_kill`, `first_death`, `mvp_round` and `win_bonus`
/// are added per unit. `utility` and `flash_assist` are fractions of the base
/// rate (0.5 means +50%). `multi_kill` is added once per multi-kill round.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleBonus {
    pub kill: f64,
    pub assist: f64,
    pub first_kill: f64,
    pub first_death: f64,
    pub multi_kill: f64,
    pub utility: f64,
    pub flash_assist: f64,
    pub mvp_round: f64,
    pub win_bonus: f64,
}

// Overrides are merged field by field onto each role's defaults, see RoleBonusesOverride
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RoleBonusesOverride")]
pub struct RoleBonuses {
    #[serde(rename = "AWP")]
    pub awp: RoleBonus,
    #[serde(rename = "Entry")]
    pub entry: RoleBonus,
    #[serde(rename = "Rifler")]
    pub rifler: RoleBonus,
    #[serde(rename = "Support")]
    pub support: RoleBonus,
    #[serde(rename = "IGL")]
    pub igl: RoleBonus,
}

impl RoleBonuses {
    pub fn get(&self, role: PlayerRole) -> &RoleBonus {
        match role {
            PlayerRole::AWP => &self.awp,
            PlayerRole::Entry => &self.entry,
            PlayerRole::Rifler => &self.rifler,
            PlayerRole::Support => &self.support,
            PlayerRole::IGL => &self.igl,
        }
    }
}

impl Default for RoleBonuses {
    fn default() -> Self {
        Self {
            awp: RoleBonus { kill: 0.5, first_kill: 1.0, ..Default::default() },
            entry: RoleBonus { first_kill: 2.0, first_death: 1.0, ..Default::default() },
            rifler: RoleBonus { kill: 0.2, multi_kill: 1.0, ..Default::default() },
            support: RoleBonus { assist: 0.5, utility: 0.5, flash_assist: 0.5, ..Default::default() },
            igl: RoleBonus { mvp_round: 1.0, win_bonus: 2.0, ..Default::default() },
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
struct RoleBonusOverride {
    kill: Option<f64>,
    assist: Option<f64>,
    first_kill: Option<f64>,
    first_death: Option<f64>,
    multi_kill: Option<f64>,
    utility: Option<f64>,
    flash_assist: Option<f64>,
    mvp_round: Option<f64>,
    win_bonus: Option<f64>,
}

impl RoleBonusOverride {
    fn apply(self, base: &mut RoleBonus) {
        let fields = [
            (self.kill, &mut base.kill),
            (self.assist, &mut base.assist),
            (self.first_kill, &mut base.first_kill),
            (self.first_death, &mut base.first_death),
            (self.multi_kill, &mut base.multi_kill),
            (self.utility, &mut base.utility),
            (self.flash_assist, &mut base.flash_assist),
            (self.mvp_round, &mut base.mvp_round),
            (self.win_bonus, &mut base.win_bonus),
        ];
        for (value, field) in fields {
            if let Some(v) = value {
                *field = v;
            }
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
struct RoleBonusesOverride {
    #[serde(rename = "AWP")]
    awp: RoleBonusOverride,
    #[serde(rename = "Entry")]
    entry: RoleBonusOverride,
    #[serde(rename = "Rifler")]
    rifler: RoleBonusOverride,
    #[serde(rename = "Support")]
    support: RoleBonusOverride,
    #[serde(rename = "IGL")]
    igl: RoleBonusOverride,
}

impl From<RoleBonusesOverride> for RoleBonuses {
    fn from(o: RoleBonusesOverride) -> Self {
        let mut bonuses = RoleBonuses::default();
        o.awp.apply(&mut bonuses.awp);
        o.entry.apply(&mut bonuses.entry);
        o.rifler.apply(&mut bonuses.rifler);
        o.support.apply(&mut bonuses.support);
        o.igl.apply(&mut bonuses.igl);
        bonuses
    }
}

// Points credited to a player who did not play that day
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TierAverages {
    pub tier1: f64,
    pub tier2: f64,
    pub tier3: f64,
    pub opponent_playing_boost: f64,   // Tier2 and Tier3 only
}

impl TierAverages {
    pub fn get(&self, tier: PlayerTier) -> f64 {
        match tier {
            PlayerTier::Tier1 => self.tier1,
            PlayerTier::Tier2 => self.tier2,
            PlayerTier::Tier3 => self.tier3,
        }
    }
}

impl Default for TierAverages {
    fn default() -> Self {
        Self {
            tier1: 15.0,
            tier2: 12.0,
            tier3: 9.0,
            opponent_playing_boost: 1.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LeaguePointAwards {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for LeaguePointAwards {
    fn default() -> Self {
        Self { win: 3, draw: 1, loss: 0 }
    }
}
