use std::path::Path;

use crate::data_loader::LeagueTier;
use crate::error::DataError;
use crate::fixtures::FixtureOutcome;
use crate::league::{LeagueStandingEntry, Zone};
use crate::super_cup::SuperCup;

pub fn output_fixtures(outcomes: &[FixtureOutcome]) {
    for o in outcomes {
        println!("| {0:10} | {1:22} {2:7.2} - {3:<7.2} {4:22} | {5:?}/{6:?}",
            o.fixture_id,
            o.home.team_name,
            o.home.total_points,
            o.away.total_points,
            o.away.team_name,
            o.home_award.result,
            o.away_award.result,
        );
    }
}

pub fn output_report(tier: LeagueTier, entries: &[LeagueStandingEntry]) {
    println!("League {tier:?}");

    for e in entries {
        println!("|{0:3}. | {1:20} | {2:22} | {3:3} pts | {4:2}W {5:2}D {6:2}L | {7:8.2} | {8}",
            e.position,
            e.username,
            e.team_name,
            e.league_points,
            e.wins,
            e.draws,
            e.losses,
            e.total_fantasy_points,
            zone_marker(e.zone),
        )
    }
}

pub fn output_super_cup(cup: &SuperCup) {
    println!("Super Cup {} ({:?})", cup.id, cup.status);
    for (i, u) in cup.participants.iter().enumerate() {
        println!("|{0:3}. | {1:20} | League {2:?}", i + 1, u.username, u.current_league);
    }
}

fn zone_marker(zone: Zone) -> &'static str {
    match zone {
        Zone::Supercup => "SUPERCUP",
        Zone::Promotion => "PROMOTION",
        Zone::Relegation => "RELEGATION",
        Zone::Safe => "",
    }
}

pub fn write_standings_csv(file_path: &Path, entries: &[LeagueStandingEntry]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_path(file_path)?;
    for e in entries {
        writer.serialize(e)?;
    }
    writer.flush()?;

    log::info!("Wrote {} standings rows to {}", entries.len(), file_path.display());
    Ok(())
}
