use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::{error, info, warn};

use pitlane::{
    DriverFilter, LapReport, PitlaneError, ResultsReport,
    data::DriverStanding,
    calendar::{RECENT_RACES, SeasonProgress, recent_completed},
    config::{AppConfig, Theme},
    format::{MISSING, format_optional, format_seconds},
    loader,
    results::rank_by_points,
    selection::{
        DEFAULT_COMPARISON, comparison_options, driver_options, reconcile_comparison,
        reconcile_driver_filter,
    },
    team_colors::{team_colors, team_css_vars},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Race pace, compound mix and stint efficiency from a race laps payload
    Laps {
        #[arg(short, long)]
        input: PathBuf,

        /// Driver code, or ALL for every driver
        #[arg(short, long, default_value = "ALL")]
        driver: DriverFilter,

        #[arg(long)]
        json: bool,
    },
    /// Finishing order from a race results payload
    Results {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Season progress from a races payload
    Calendar {
        #[arg(short, long)]
        input: PathBuf,

        /// Reference day, defaults to today
        #[arg(short, long)]
        today: Option<NaiveDate>,
    },
    /// Driver leaderboard from a standings payload
    Standings {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Head-to-head season totals for two drivers from a standings payload
    Compare {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long, default_value = DEFAULT_COMPARISON.0)]
        driver1: String,

        #[arg(long, default_value = DEFAULT_COMPARISON.1)]
        driver2: String,
    },
    /// Team palette lookup
    Team { name: String },
    /// Show or update saved preferences
    Config {
        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long, conflicts_with = "theme")]
        toggle_theme: bool,

        #[arg(long)]
        season: Option<i32>,
    },
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), PitlaneError> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| PitlaneError::ReportSerializeError { source: e })?;
    println!("{}", output);
    Ok(())
}

fn laps(input: &Path, requested: &DriverFilter, json: bool) -> Result<(), PitlaneError> {
    let laps = loader::load_laps(input)?;
    let filter = reconcile_driver_filter(requested, &driver_options(&laps));
    if &filter != requested {
        warn!("No laps for {}, showing all drivers", requested);
    }

    let report = LapReport::build(&laps, &filter);
    if json {
        return print_json(&report);
    }

    if report.summary.total_laps == 0 {
        println!("No lap data available for this race.");
        return Ok(());
    }

    println!("Race pace intelligence ({})", report.driver_filter);
    println!("  Total laps                 {}", report.summary.total_laps);
    println!("  Average lap time           {}", format_seconds(report.summary.average));
    println!("  Median lap time            {}", format_seconds(report.summary.median));
    println!("  Lap-time variability (σ)   {}", format_seconds(report.summary.std_dev));
    println!("  Fastest lap                {}", format_seconds(report.summary.fastest));

    println!();
    println!("Lap time distribution");
    let widest = report.histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bucket in &report.histogram {
        let bar = "#".repeat(bucket.count * 40 / widest);
        println!("  {:>14} {:<40} {}", bucket.label(), bar, bucket.count);
    }

    println!();
    println!("Compound mix");
    for compound in &report.compounds {
        println!(
            "  {:<12} {:>4} laps logged   {}",
            compound.compound,
            compound.count,
            format_seconds(compound.average)
        );
    }

    println!();
    println!("Stint efficiency");
    if report.stints.is_empty() {
        println!("  No stint data available.");
    }
    for stint in &report.stints {
        println!(
            "  {} · Stint {:<4} {:<12} {:>4} laps   {}",
            stint.driver,
            stint.stint,
            stint.compound,
            stint.laps,
            format_seconds(stint.average)
        );
    }
    Ok(())
}

fn results(input: &Path, json: bool) -> Result<(), PitlaneError> {
    let results = loader::load_results(input)?;
    let report = ResultsReport::build(&results);
    if json {
        return print_json(&report);
    }
    if report.results.is_empty() {
        println!("No results available for this race.");
        return Ok(());
    }

    println!("Winner: {}", report.winner.as_deref().unwrap_or(MISSING));
    println!("{:<5} {:<24} {:<5} {:<7} Status", "Pos", "Driver", "Grid", "Points");
    for result in &report.results {
        println!(
            "{:<5} {:<24} {:<5} {:<7} {}",
            format_optional(result.position.as_ref()),
            result.display_name(),
            format_optional(result.grid_position.as_ref()),
            result.points.unwrap_or(0.),
            result.status.as_deref().unwrap_or(MISSING)
        );
    }
    Ok(())
}

fn calendar(input: &Path, today: Option<NaiveDate>) -> Result<(), PitlaneError> {
    let races = loader::load_races(input)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let progress = SeasonProgress::compute(&races, today);

    println!(
        "Season progress: {}/{} races ({}%)",
        progress.completed,
        progress.total_races,
        format_optional(progress.progress_pct)
    );
    match (&progress.next_race, progress.countdown_days) {
        (Some(race), Some(days)) => {
            println!("Next race: {} at {} in {} days", race.name, race.venue(), days)
        }
        _ => println!("Next race: {}", MISSING),
    }
    println!(
        "Last race: {}",
        progress.last_race.as_ref().map_or(MISSING, |race| race.name.as_str())
    );

    println!();
    println!("Recent rounds");
    for race in recent_completed(&races, today, RECENT_RACES) {
        println!(
            "  {:<32} {:<20} {}",
            race.name,
            race.venue(),
            race.event_date().map_or_else(|| "Date TBC".to_string(), |d| d.to_string())
        );
    }
    Ok(())
}

fn standings(input: &Path) -> Result<(), PitlaneError> {
    let standings = rank_by_points(&loader::load_standings(input)?);
    println!(
        "{:<4} {:<24} {:<20} {:>7} {:>10} {:>6}",
        "Code", "Driver", "Team", "Points", "Avg finish", "Races"
    );
    for driver in &standings {
        println!(
            "{:<4} {:<24} {:<20} {:>7} {:>10} {:>6}",
            driver.code,
            driver.name.as_deref().unwrap_or(MISSING),
            driver.team.as_deref().unwrap_or(MISSING),
            driver.points.unwrap_or(0.),
            format_optional(driver.average_finish),
            format_optional(driver.races)
        );
    }
    Ok(())
}

fn compare(input: &Path, driver1: &str, driver2: &str) -> Result<(), PitlaneError> {
    let drivers = loader::load_standings(input)?;
    let options = comparison_options(&drivers);
    let (first, second) = reconcile_comparison((driver1, driver2), &options);
    for (requested, picked) in [(driver1, &first), (driver2, &second)] {
        if requested != picked.as_str() {
            warn!("{} is not in this season, comparing {} instead", requested, picked);
        }
    }

    let lookup = |code: &str| options.iter().find(|driver| driver.code == code).copied();
    let (left, right) = (lookup(&first), lookup(&second));
    let name = |driver: Option<&DriverStanding>| {
        driver
            .and_then(|d| d.name.clone())
            .unwrap_or_else(|| MISSING.to_string())
    };

    println!("{:<16} {:>24} {:>24}", "", first, second);
    println!("{:<16} {:>24} {:>24}", "Driver", name(left), name(right));
    println!(
        "{:<16} {:>24} {:>24}",
        "Points",
        format_optional(left.and_then(|d| d.points)),
        format_optional(right.and_then(|d| d.points))
    );
    println!(
        "{:<16} {:>24} {:>24}",
        "Avg finish",
        format_optional(left.and_then(|d| d.average_finish)),
        format_optional(right.and_then(|d| d.average_finish))
    );
    println!(
        "{:<16} {:>24} {:>24}",
        "Races",
        format_optional(left.and_then(|d| d.races)),
        format_optional(right.and_then(|d| d.races))
    );
    Ok(())
}

fn team(name: &str) {
    let colors = team_colors(name);
    println!("{}", colors.name);
    for (var, value) in team_css_vars(name) {
        println!("  {}: {}", var, value);
    }
}

fn config(
    theme: Option<Theme>,
    toggle_theme: bool,
    season: Option<i32>,
) -> Result<(), PitlaneError> {
    let mut app_config = AppConfig::from_local_file()?.unwrap_or_default();
    let changed = theme.is_some() || toggle_theme || season.is_some();

    if let Some(theme) = theme {
        app_config.theme = theme;
    }
    if toggle_theme {
        app_config.theme = app_config.theme.toggled();
    }
    if let Some(season) = season {
        app_config.season = season;
    }
    if changed {
        app_config.save()?;
        info!("Saved preferences to {:?}", AppConfig::default_path()?);
    }

    println!("theme  = {}", app_config.theme);
    println!("season = {}", app_config.season);
    Ok(())
}

fn main() {
    colog::init();

    let cli = Args::parse();
    let outcome = match &cli.command {
        Commands::Laps {
            input,
            driver,
            json,
        } => laps(input, driver, *json),
        Commands::Results { input, json } => results(input, *json),
        Commands::Calendar { input, today } => calendar(input, *today),
        Commands::Standings { input } => standings(input),
        Commands::Compare {
            input,
            driver1,
            driver2,
        } => compare(input, driver1, driver2),
        Commands::Team { name } => {
            team(name);
            Ok(())
        }
        Commands::Config {
            theme,
            toggle_theme,
            season,
        } => config(*theme, *toggle_theme, *season),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        std::process::exit(1);
    }
}
