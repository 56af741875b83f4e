use crate::data_loader::{FantasyTeam, MatchPerformance, MatchResult, MatchSide, PlayerDirectory, PlayerTier};
use crate::scoring::{calculate_fantasy_points, FantasyPoints};
use crate::scoring_context::ScoringContext;
use crate::util::{round_to_cents, sum_vector};

// Tier used for a bench player the directory knows nothing about
const FALLBACK_TIER: PlayerTier = PlayerTier::Tier2;

// Value credited to a player who did not play. Tier2 and Tier3 players lose less when the opponent fields players that did.
pub fn average_points_for_non_playing(tier: PlayerTier, has_playing_opponents: bool, ctx: &ScoringContext) -> f64 {
    let mut points = ctx.tier_averages.get(tier);

    if has_playing_opponents && matches!(tier, PlayerTier::Tier2 | PlayerTier::Tier3) {
        points *= ctx.tier_averages.opponent_playing_boost;
    }

    round_to_cents(points)
}

// Results are reported from team 1's side; a player on team 2 won when team 1 did not.
// No recorded result counts as a loss.
pub fn team_won(performance: &MatchPerformance, results: &[MatchResult]) -> bool {
    let Some(result) = results.iter().find(|r| r.match_id == performance.match_id) else {
        return false;
    };

    match performance.side {
        MatchSide::Team1 => result.team1_won,
        MatchSide::Team2 => !result.team1_won,
    }
}

/*
    Scores every roster for the day. Each of the five slots takes the player's first performance of the day,
    or a tier-average stand-in when there is none.

    "Opponents" of a team are all the other teams passed in. For a league fixture that is the single opposing
    roster, which is how play_fixture calls this.
*/
pub fn calculate_daily_results(
    teams: &[FantasyTeam],
    performances: &[MatchPerformance],
    results: &[MatchResult],
    directory: &PlayerDirectory,
    ctx: &ScoringContext,
) -> Vec<FantasyTeam> {
    let find_performance = |player_id: u32| performances.iter().find(|p| p.player_id == player_id);

    let has_participants: Vec<bool> = teams
        .iter()
        .map(|t| t.players.iter().any(|&id| find_performance(id).is_some()))
        .collect();

    let mut out = Vec::with_capacity(teams.len());

    for (idx, team) in teams.iter().enumerate() {
        let has_playing_opponents = has_participants
            .iter()
            .enumerate()
            .any(|(other, &playing)| other != idx && playing);

        let mut player_points: Vec<FantasyPoints> = Vec::with_capacity(team.players.len());

        for &player_id in &team.players {
            let points = match find_performance(player_id) {
                Some(p) => calculate_fantasy_points(p, team_won(p, results), ctx),
                None => {
                    let tier = directory.tier_of(player_id).unwrap_or_else(|| {
                        log::warn!("Player {player_id} has no performance and no known tier, substituting as {FALLBACK_TIER:?}");
                        FALLBACK_TIER
                    });
                    FantasyPoints::substitute(
                        player_id,
                        average_points_for_non_playing(tier, has_playing_opponents, ctx),
                    )
                }
            };
            player_points.push(points);
        }

        let totals: Vec<f64> = player_points.iter().map(|p| p.total_points).collect();
        let total_points = round_to_cents(sum_vector(&totals));

        log::info!("{} ({}) scored {:.2} points", team.team_name, team.user_id, total_points);

        out.push(FantasyTeam {
            user_id: team.user_id.clone(),
            team_name: team.team_name.clone(),
            players: team.players,
            total_points,
            player_points,
        });
    }

    out
}
