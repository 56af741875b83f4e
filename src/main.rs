use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use fantasy_ladder::report::*;
use fantasy_ladder::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fantasy CS ladder: score a matchday and print the league tables")]
struct Cli {
    /// Matchday JSON file
    #[arg(short, long, default_value = "data/matchday_sample.json")]
    data: PathBuf,

    /// Optional JSON file overriding scoring tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the final standings of every tier to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    sensible_env_logger::init!();

    run(&Cli::parse()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = match &cli.config {
        Some(path) => ScoringContext::from_json_file(path)?,
        None => ScoringContext::default(),
    };

    let mut matchday = load_matchday(&cli.data)?;
    let directory = matchday.directory();

    for table in &matchday.leagues {
        table.validate()?;
    }

    // Illegal rosters still play; the violations are only reported
    for team in &matchday.teams {
        let report = validate_team_composition(&directory.roster_picks(&team.players), &ctx.composition);
        for err in &report.errors {
            log::warn!("{} ({}): {}", team.team_name, team.user_id, err);
        }
    }

    let outcomes = play_matchday(
        &matchday.fixtures,
        &matchday.teams,
        &matchday.performances,
        &matchday.results,
        &directory,
        &mut matchday.leagues,
        &ctx,
    )?;

    println!("Matchday {}", matchday.date);
    output_fixtures(&outcomes);

    let mut all_entries = Vec::new();
    for table in &matchday.leagues {
        let entries = table.standings_with_zones(&ctx.zones);
        output_report(table.tier, &entries);
        all_entries.extend(entries);
    }

    if let Some(path) = &cli.csv {
        write_standings_csv(path, &all_entries)?;
    }

    match SuperCup::qualify("supercup", &matchday.leagues) {
        Ok(cup) => output_super_cup(&cup),
        Err(e) => log::info!("No Super Cup line-up yet: {e}"),
    }

    Ok(())
}
