use serde::*;

use crate::data_loader::MatchPerformance;
use crate::scoring_context::ScoringContext;
use crate::util::round_to_cents;

/// Per-stat contribution to a player's fantasy score. Every field is already
/// tier-scaled and keeps full precision.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub headshots: f64,
    pub adr: f64,
    pub rating: f64,
    pub kast: f64,
    pub first_kills: f64,
    pub first_deaths: f64,
    pub clutches: f64,
    pub multi_kills: f64,
    pub utility: f64,
    pub mvp: f64,
}

impl PointsBreakdown {
    pub fn sum(&self) -> f64 {
        self.kills
            + self.deaths
            + self.assists
            + self.headshots
            + self.adr
            + self.rating
            + self.kast
            + self.first_kills
            + self.first_deaths
            + self.clutches
            + self.multi_kills
            + self.utility
            + self.mvp
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FantasyPoints {
    pub player_id: u32,
    pub total_points: f64,
    pub breakdown: PointsBreakdown,
    /// Match-result bonus. Already included in `breakdown.mvp`, repeated here so
    /// it can be shown on its own.
    #[serde(default)]
    pub team_bonus: f64,
}

impl FantasyPoints {
    /// Stand-in for a player who did not play: the whole value sits in the
    /// `rating` slot.
    pub fn substitute(player_id: u32, points: f64) -> Self {
        Self {
            player_id,
            total_points: points,
            breakdown: PointsBreakdown { rating: points, ..Default::default() },
            team_bonus: 0.0,
        }
    }
}

// Every line is (base rate * count + role bonus * count) * tier multiplier.
// Utility and flash assists scale the base rate by (1 + role bonus) instead.
pub fn calculate_fantasy_points(p: &MatchPerformance, team_won: bool, ctx: &ScoringContext) -> FantasyPoints {
    let rates = &ctx.rates;
    let bonus = ctx.role_bonus(p.player_role);
    let tier = ctx.tier_multiplier(p.player_tier);

    let kills = f64::from(p.kills);
    let assists = f64::from(p.assists);
    let first_kills = f64::from(p.first_kills);
    let first_deaths = f64::from(p.first_deaths);
    let mvp_rounds = f64::from(p.mvp_rounds);

    let mut breakdown = PointsBreakdown {
        kills:        (kills * rates.kill + bonus.kill * kills) * tier,
        deaths:       f64::from(p.deaths) * rates.death * tier,
        assists:      (assists * rates.assist + bonus.assist * assists) * tier,
        headshots:    f64::from(p.headshots) * rates.headshot * tier,
        adr:          p.adr * rates.adr * tier,
        rating:       (p.rating - rates.rating_baseline) * rates.rating * tier,
        kast:         p.kast * rates.kast * tier,
        first_kills:  (first_kills * rates.first_kill + bonus.first_kill * first_kills) * tier,
        first_deaths: (first_deaths * rates.first_death + bonus.first_death * first_deaths) * tier,
        clutches:     (f64::from(p.clutches_won) * rates.clutch_won + f64::from(p.clutches_lost) * rates.clutch_lost) * tier,
        multi_kills:  p.multi_kills.counts().bonus_points(rates, bonus) * tier,
        utility:      (p.utility_damage * rates.utility_damage * (1.0 + bonus.utility)
                        + f64::from(p.flash_assists) * rates.flash_assist * (1.0 + bonus.flash_assist)) * tier,
        mvp:          (mvp_rounds * rates.mvp_round + bonus.mvp_round * mvp_rounds) * tier,
    };

    let team_bonus = if team_won {
        (rates.win_bonus + bonus.win_bonus) * tier
    } else {
        rates.loss_penalty
    };

    let total_points = round_to_cents(breakdown.sum() + team_bonus);

    // The result bonus is reported as part of the MVP line
    breakdown.mvp += team_bonus;

    log::debug!(
        "Player {} ({:?}, {:?}) in match {}: {:.2} points, team bonus {:.2}",
        p.player_id, p.player_role, p.player_tier, p.match_id, total_points, team_bonus
    );

    FantasyPoints {
        player_id: p.player_id,
        total_points,
        breakdown,
        team_bonus,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data_loader::{MatchSide, MultiKillInput, PlayerRole, PlayerTier};
    use crate::multi_kill::MultiKills;
    use proptest::prelude::*;

    // An empty stat line, rating at the baseline, so only the fields a test sets contribute
    pub(crate) fn blank_performance(player_id: u32, role: PlayerRole, tier: PlayerTier) -> MatchPerformance {
        MatchPerformance {
            player_id,
            match_id: 1,
            kills: 0,
            deaths: 0,
            assists: 0,
            headshots: 0,
            adr: 0.0,
            rating: 1.0,
            kast: 0.0,
            first_kills: 0,
            first_deaths: 0,
            clutches_won: 0,
            clutches_lost: 0,
            multi_kills: MultiKillInput::Packed(0),
            utility_damage: 0.0,
            flash_assists: 0,
            team_rounds: 24,
            mvp_rounds: 0,
            player_role: role,
            player_tier: tier,
            side: MatchSide::Team1,
        }
    }

    pub(crate) fn sample_performance(player_id: u32, role: PlayerRole, tier: PlayerTier) -> MatchPerformance {
        MatchPerformance {
            kills: 20,
            deaths: 15,
            assists: 5,
            headshots: 10,
            adr: 80.0,
            rating: 1.2,
            kast: 70.0,
            first_kills: 3,
            first_deaths: 2,
            clutches_won: 1,
            clutches_lost: 1,
            multi_kills: MultiKillInput::Packed(102),
            utility_damage: 50.0,
            flash_assists: 2,
            mvp_rounds: 2,
            ..blank_performance(player_id, role, tier)
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_rifler_tier2_breakdown() {
        let ctx = ScoringContext::default();
        let p = sample_performance(1, PlayerRole::Rifler, PlayerTier::Tier2);
        let fp = calculate_fantasy_points(&p, false, &ctx);
        let b = &fp.breakdown;

        assert_close(b.kills, 20.0 * 2.2);
        assert_close(b.deaths, -15.0);
        assert_close(b.assists, 5.0);
        assert_close(b.headshots, 5.0);
        assert_close(b.adr, 4.0);
        assert_close(b.rating, 2.0);
        assert_close(b.kast, 7.0);
        assert_close(b.first_kills, 9.0);
        assert_close(b.first_deaths, -4.0);
        assert_close(b.clutches, 4.0);
        // 2 doubles, 1 quadra, +1 each for the rifler
        assert_close(b.multi_kills, 2.0 * 3.0 + 11.0);
        assert_close(b.utility, 1.0 + 2.0);
        assert_close(b.mvp, 4.0);

        assert_eq!(fp.team_bonus, 0.0);
        assert_eq!(fp.total_points, 85.0);
    }

    #[test]
    fn test_win_bonus_is_folded_into_mvp() {
        let ctx = ScoringContext::default();
        let p = blank_performance(7, PlayerRole::IGL, PlayerTier::Tier1);

        let lost = calculate_fantasy_points(&p, false, &ctx);
        let won = calculate_fantasy_points(&p, true, &ctx);

        // (5 + 2 IGL bonus) * 1.2
        assert_close(won.team_bonus, 8.4);
        assert_close(won.breakdown.mvp - lost.breakdown.mvp, 8.4);
        assert_eq!(won.total_points, 8.4);
        assert_eq!(lost.total_points, 0.0);
        assert_close(won.breakdown.sum(), won.total_points);
    }

    #[test]
    fn test_entry_first_death_penalty_is_reduced() {
        let ctx = ScoringContext::default();
        let mut entry = blank_performance(1, PlayerRole::Entry, PlayerTier::Tier2);
        entry.first_deaths = 4;
        entry.first_kills = 2;
        let mut awp = entry.clone();
        awp.player_role = PlayerRole::AWP;

        let entry_points = calculate_fantasy_points(&entry, false, &ctx);
        let awp_points = calculate_fantasy_points(&awp, false, &ctx);

        assert_close(entry_points.breakdown.first_deaths, -4.0);
        assert_close(awp_points.breakdown.first_deaths, -8.0);
        assert_close(entry_points.breakdown.first_kills, 10.0);
        assert_close(awp_points.breakdown.first_kills, 8.0);
    }

    #[test]
    fn test_support_utility_bonus_scales_base_rate() {
        let ctx = ScoringContext::default();
        let mut p = blank_performance(1, PlayerRole::Support, PlayerTier::Tier3);
        p.utility_damage = 100.0;
        p.flash_assists = 4;
        p.assists = 6;

        let fp = calculate_fantasy_points(&p, false, &ctx);

        assert_close(fp.breakdown.utility, (100.0 * 0.02 * 1.5 + 4.0 * 1.5) * 0.8);
        assert_close(fp.breakdown.assists, 6.0 * 1.5 * 0.8);
    }

    #[test]
    fn test_below_baseline_rating_costs_points() {
        let ctx = ScoringContext::default();
        let mut p = blank_performance(1, PlayerRole::Rifler, PlayerTier::Tier2);
        p.rating = 0.75;

        let fp = calculate_fantasy_points(&p, false, &ctx);
        assert_close(fp.breakdown.rating, -2.5);
        assert_eq!(fp.total_points, -2.5);
    }

    #[test]
    fn test_total_is_rounded_but_fields_are_not() {
        let ctx = ScoringContext::default();
        let mut p = blank_performance(1, PlayerRole::Rifler, PlayerTier::Tier1);
        p.adr = 77.77;

        let fp = calculate_fantasy_points(&p, false, &ctx);
        assert_close(fp.breakdown.adr, 77.77 * 0.05 * 1.2);
        assert_eq!(fp.total_points, 4.67);
    }

    #[test]
    fn test_explicit_multi_kill_counts_are_not_capped() {
        let ctx = ScoringContext::default();
        let mut p = blank_performance(1, PlayerRole::Rifler, PlayerTier::Tier2);
        p.multi_kills = MultiKillInput::Counts(MultiKills { doubles: 12, triples: 1, ..Default::default() });

        let fp = calculate_fantasy_points(&p, false, &ctx);

        // 12 doubles at 2 + 1, one triple at 5 + 1
        assert_close(fp.breakdown.multi_kills, 12.0 * 3.0 + 6.0);
        assert_eq!(fp.total_points, 42.0);
    }

    #[test]
    fn test_substitute_fills_rating_slot_only() {
        let fp = FantasyPoints::substitute(3, 15.6);
        assert_eq!(fp.breakdown.rating, 15.6);
        assert_eq!(fp.breakdown.sum(), 15.6);
        assert_eq!(fp.total_points, 15.6);
    }

    fn arb_role() -> impl Strategy<Value = PlayerRole> {
        prop_oneof![
            Just(PlayerRole::AWP),
            Just(PlayerRole::Entry),
            Just(PlayerRole::Rifler),
            Just(PlayerRole::Support),
            Just(PlayerRole::IGL),
        ]
    }

    proptest! {
        #[test]
        fn prop_scoring_is_deterministic(
            role in arb_role(),
            kills in 0u32..40,
            deaths in 0u32..40,
            adr in 0.0f64..200.0,
            rating in 0.0f64..3.0,
            multi in 0u32..10_000,
            won in any::<bool>(),
        ) {
            let ctx = ScoringContext::default();
            let mut p = sample_performance(1, role, PlayerTier::Tier2);
            p.kills = kills;
            p.deaths = deaths;
            p.adr = adr;
            p.rating = rating;
            p.multi_kills = MultiKillInput::Packed(multi);

            let first = calculate_fantasy_points(&p, won, &ctx);
            let second = calculate_fantasy_points(&p, won, &ctx);
            prop_assert_eq!(first.total_points.to_bits(), second.total_points.to_bits());
            prop_assert_eq!(first, second);
        }

        // Only positive contributions, so the multiplier ordering carries straight through
        #[test]
        fn prop_higher_tier_scores_more(
            role in arb_role(),
            kills in 1u32..40,
            assists in 0u32..15,
            headshots in 0u32..30,
            adr in 1.0f64..200.0,
            first_kills in 0u32..10,
            multi in 0u32..10_000,
            won in any::<bool>(),
        ) {
            let ctx = ScoringContext::default();
            let mut p = blank_performance(1, role, PlayerTier::Tier1);
            p.kills = kills;
            p.assists = assists;
            p.headshots = headshots;
            p.adr = adr;
            p.first_kills = first_kills;
            p.multi_kills = MultiKillInput::Packed(multi);

            let mut tier2 = p.clone();
            tier2.player_tier = PlayerTier::Tier2;
            let mut tier3 = p.clone();
            tier3.player_tier = PlayerTier::Tier3;

            let t1 = calculate_fantasy_points(&p, won, &ctx).total_points;
            let t2 = calculate_fantasy_points(&tier2, won, &ctx).total_points;
            let t3 = calculate_fantasy_points(&tier3, won, &ctx).total_points;

            prop_assert!(t1 > t2, "Tier1 {} should beat Tier2 {}", t1, t2);
            prop_assert!(t2 > t3, "Tier2 {} should beat Tier3 {}", t2, t3);
        }
    }
}
