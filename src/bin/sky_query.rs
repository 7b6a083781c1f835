//! Sky Query Tool
//!
//! Prints every star, planet and the Moon above the horizon for an observer,
//! brightest first, along with the current lunar phase.
//!
//! Usage:
//!   cargo run --bin sky_query -- --lat 51.48 --lon 0.0 [--time 2024-03-20T21:00:00Z] [--json]

use clap::{ArgAction, Parser};
use serde::Serialize;

use skyglass::catalogs::constellations;
use skyglass::phase::{moon_phase, MoonPhase};
use skyglass::{BrightStarCatalog, GeoPosition, Instant, SkyObject, SkyQuery};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky Query Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Lists the stars, planets and Moon above the horizon for a place and time",
    long_about = None
)]
struct Args {
    /// Observer latitude in degrees, positive north
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in degrees, positive east
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// UTC time in RFC 3339 format (defaults to now)
    #[arg(short, long, conflicts_with = "unix_ms")]
    time: Option<String>,

    /// Time as milliseconds since the Unix epoch
    #[arg(long, allow_negative_numbers = true)]
    unix_ms: Option<f64>,

    /// Hide objects fainter than this magnitude
    #[arg(short, long, allow_negative_numbers = true)]
    mag_limit: Option<f64>,

    /// Also list constellation segments with both stars visible
    #[arg(short, long, action = ArgAction::SetTrue)]
    constellations: bool,

    /// Emit JSON instead of a table
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

/// Everything printed for one query
#[derive(Serialize)]
struct Report<'a> {
    julian_date: f64,
    observer: GeoPosition,
    moon: MoonPhase,
    objects: &'a [SkyObject],
    constellations: Vec<VisibleFigure>,
}

/// Constellation segments whose endpoints are both above the horizon
#[derive(Serialize)]
struct VisibleFigure {
    name: &'static str,
    segments: Vec<(&'static str, &'static str)>,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn resolve_instant(args: &Args) -> Result<Instant> {
    let instant = match (&args.time, args.unix_ms) {
        (Some(text), _) => Instant::parse_rfc3339(text)?,
        (None, Some(ms)) => Instant::from_unix_millis(ms)?,
        (None, None) => Instant::now(),
    };
    Ok(instant)
}

/// Collect constellation segments whose stars are both in `objects`
fn visible_figures(objects: &[SkyObject]) -> Result<Vec<VisibleFigure>> {
    let catalog = BrightStarCatalog::new();
    let visible: Vec<usize> = objects
        .iter()
        .filter_map(|object| object.body.catalog_index())
        .collect();

    let mut figures = Vec::new();
    for figure in constellations::all() {
        let segments: Vec<(&'static str, &'static str)> = figure
            .lines
            .iter()
            .zip(figure.segments(&catalog)?)
            .filter(|((from, to), _)| visible.contains(from) && visible.contains(to))
            .map(|(_, (from, to))| (from.name, to.name))
            .collect();

        if !segments.is_empty() {
            figures.push(VisibleFigure {
                name: figure.name,
                segments,
            });
        }
    }
    Ok(figures)
}

fn print_table(report: &Report) {
    print_section_header("Observer");
    println!(
        "lat {:.4}  lon {:.4}  JD {:.6}",
        report.observer.latitude, report.observer.longitude, report.julian_date
    );

    print_section_header("Moon");
    println!(
        "{} ({:.1}% illuminated, {})",
        report.moon.name,
        report.moon.illumination * 100.0,
        if report.moon.waxing { "waxing" } else { "waning" }
    );

    print_section_header("Visible objects");
    println!(
        "{:<20} {:>6} {:>9} {:>9} {:>4}",
        "Name", "Mag", "Alt", "Az", ""
    );
    for object in report.objects {
        println!(
            "{:<20} {:>6.2} {:>9.3} {:>9.3} {:>4}",
            object.name(),
            object.magnitude(),
            object.altitude(),
            object.azimuth(),
            object.horizontal.compass_point()
        );
    }

    if !report.constellations.is_empty() {
        print_section_header("Constellations");
        for figure in &report.constellations {
            let lines: Vec<String> = figure
                .segments
                .iter()
                .map(|(from, to)| format!("{}-{}", from, to))
                .collect();
            println!("{}: {}", figure.name, lines.join(", "));
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let observer = GeoPosition::new(args.lat, args.lon)?;
    let instant = resolve_instant(&args)?;
    log::info!("querying sky at {} for {:?}", instant, observer);

    let mut query = SkyQuery::new();
    if let Some(limit) = args.mag_limit {
        query = query.with_magnitude_limit(limit);
    }
    let objects = query.query(&instant, &observer);

    let constellations = if args.constellations {
        visible_figures(&objects)?
    } else {
        Vec::new()
    };

    let report = Report {
        julian_date: instant.jd(),
        observer,
        moon: moon_phase(instant.jd()),
        objects: &objects,
        constellations,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    Ok(())
}
