mod logging;
mod output;
mod zodiac;

use chrono::{DateTime, Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use log::debug;
use sol_core::{Observer, SolarTimes, equation_of_time_approx, year_series};
use sol_math::hours_to_hms_rounded;
use sol_time::{CalendarDate, DayOffset};

use crate::output::{OutputOptions, render_graph, render_report};

#[derive(Parser)]
#[command(name = "sol", about = "Low-precision solar ephemeris and equation of time")]
struct Cli {
    /// Print debug output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun position and solar times for a date, or for now
    Sun(SunArgs),
    /// Equation of Time for 366 consecutive days, comma-separated
    Graph {
        /// Year to start on 1 January of (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Use the orbit-and-tilt approximation instead of the Almanac model
        #[arg(long)]
        approx: bool,
    },
    /// Split decimal hours into hours, minutes and seconds
    Hms {
        /// Time in decimal hours
        hours: f64,
    },
}

#[derive(Args)]
struct SunArgs {
    /// UTC date (YYYY-MM-DD, 1950-2049); default: now
    #[arg(long)]
    date: Option<String>,
    /// UTC time of day (hh:mm or hh:mm:ss); default 00:00 with --date
    #[arg(long, requires = "date")]
    time: Option<String>,
    /// Use 00:00 UTC of the day instead of the current time
    #[arg(long)]
    midnight: bool,
    /// Observer longitude in degrees, east positive
    #[arg(long, env = "SOL_LONGITUDE", default_value = "0.0", allow_hyphen_values = true)]
    longitude: f64,
    /// Also print distance, ecliptic longitude and all hour angles/times
    #[arg(long)]
    all: bool,
    /// Print the day offset from 2000-01-01
    #[arg(long)]
    day: bool,
    /// Print the Julian Date
    #[arg(long)]
    julian: bool,
    /// Print the zodiac sign of the Sun's ecliptic longitude
    #[arg(long)]
    zodiac: bool,
    /// Show seconds
    #[arg(long)]
    exact: bool,
}

/// Options for the Equation of Time batch output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GraphConfig {
    year: i32,
    approx: bool,
}

fn parse_date(s: &str) -> Result<CalendarDate, String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    let date = CalendarDate::new(year, month, day).map_err(|e| e.to_string())?;
    date.check_supported_year().map_err(|e| e.to_string())?;
    Ok(date)
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(format!("expected hh:mm or hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = match parts.get(2) {
        Some(p) => p.parse().map_err(|e| format!("{e}"))?,
        None => 0.0,
    };
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(format!("time of day out of range: {s}"));
    }
    Ok((hour, minute, second))
}

/// Day offset of a wall-clock reading, after checking its year.
fn offset_from_clock(now: DateTime<Utc>) -> Result<DayOffset, String> {
    let date = CalendarDate {
        year: now.year(),
        month: now.month(),
        day: now.day(),
    };
    date.check_supported_year().map_err(|e| e.to_string())?;
    let seconds = now.timestamp() as f64 + now.timestamp_subsec_nanos() as f64 * 1e-9;
    Ok(DayOffset::from_unix_seconds(seconds))
}

fn resolve_offset(args: &SunArgs) -> Result<DayOffset, String> {
    let offset = match &args.date {
        Some(s) => {
            let date = parse_date(s)?;
            let (hour, minute, second) = match &args.time {
                Some(t) => parse_time(t)?,
                None => (0, 0, 0.0),
            };
            DayOffset::from_date_time(&date, hour, minute, second)
        }
        None => offset_from_clock(Utc::now())?,
    };
    Ok(if args.midnight { offset.midnight() } else { offset })
}

/// Output of the `hms` subcommand, seconds rounded to hundredths.
fn hms_line(hours: f64) -> String {
    let t = hours_to_hms_rounded(hours, 2);
    format!("{} h {} min {:.2} sec", t.hours, t.minutes, t.seconds)
}

/// One Equation of Time value per day of `config.year`, 1 January first.
fn graph_values(config: GraphConfig) -> Result<Vec<f64>, String> {
    let jan1 = CalendarDate::new(config.year, 1, 1).map_err(|e| e.to_string())?;
    jan1.check_supported_year().map_err(|e| e.to_string())?;
    let dec31 = CalendarDate::new(config.year, 12, 31).map_err(|e| e.to_string())?;
    let days = dec31.day_of_year();

    if config.approx {
        return (0..days)
            .map(|doy| equation_of_time_approx(doy).map_err(|e| e.to_string()))
            .collect();
    }
    let series =
        year_series(DayOffset::from_date(&jan1), days as usize).map_err(|e| e.to_string())?;
    Ok(series.iter().map(|s| s.equation_of_time_min).collect())
}

fn run_sun(args: &SunArgs) -> Result<Vec<String>, String> {
    let offset = resolve_offset(args)?;
    let observer = Observer::new(args.longitude).map_err(|e| e.to_string())?;
    debug!("sun at {offset} for longitude {}", observer.longitude_deg);
    let (sun, times) = SolarTimes::at(offset, &observer).map_err(|e| e.to_string())?;
    let opts = OutputOptions {
        all: args.all,
        day: args.day,
        julian: args.julian,
        zodiac: args.zodiac,
        exact: args.exact,
    };
    Ok(render_report(offset, &sun, &times, &observer, opts))
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Commands::Sun(args) => {
            let lines = run_sun(&args).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            for line in lines {
                println!("{line}");
            }
        }

        Commands::Graph { year, approx } => {
            let config = GraphConfig {
                year: year.unwrap_or_else(|| Utc::now().year()),
                approx,
            };
            let values = graph_values(config).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!("{}", render_graph(&values));
        }

        Commands::Hms { hours } => {
            println!("{}", hms_line(hours));
        }
    }
}
