use serde::*;

use crate::scoring_context::{RoleBonus, ScoringRates};

/// Rounds in which a player got 2, 3, 4 or 5 kills.
///
/// The packed wire form stores one decimal digit per category: units are
/// double kills, tens triples, hundreds quadras and thousands aces. A category
/// can therefore hold at most 9 rounds, and anything past the thousands digit
/// is ignored. Explicit counts have no such cap.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MultiKills {
    pub doubles: u32,
    pub triples: u32,
    pub quadras: u32,
    pub aces: u32,
}

impl MultiKills {
    pub fn decode(encoded: u32) -> Self {
        Self {
            doubles: encoded % 10,
            triples: (encoded / 10) % 10,
            quadras: (encoded / 100) % 10,
            aces: (encoded / 1000) % 10,
        }
    }

    /// Packs the counts back into the single-integer form, or `None` when a
    /// category does not fit in one digit.
    pub fn encode(&self) -> Option<u32> {
        if [self.doubles, self.triples, self.quadras, self.aces].iter().any(|&c| c > 9) {
            return None;
        }
        Some(self.doubles + 10 * self.triples + 100 * self.quadras + 1000 * self.aces)
    }

    /// Unscaled bonus points. The role's multi-kill bonus is added once per
    /// multi-kill round, whatever its size.
    pub fn bonus_points(&self, rates: &ScoringRates, role_bonus: &RoleBonus) -> f64 {
        let b = role_bonus.multi_kill;

        f64::from(self.doubles) * (rates.double_kill + b)
            + f64::from(self.triples) * (rates.triple_kill + b)
            + f64::from(self.quadras) * (rates.quadra_kill + b)
            + f64::from(self.aces) * (rates.ace + b)
    }
}
