use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use song_recommender::catalog::Catalog;
use song_recommender::client::OpenWeatherClient;
use song_recommender::config::load_config;
use song_recommender::recommend::{Recommendation, RecommendationEngine, WeatherClassifier};

#[derive(Parser)]
#[command(name = "song-recommender")]
#[command(about = "Recommends a song of the day based on the weather and holidays")]
#[command(version)]
struct Args {
    /// Path to the music library CSV file
    #[arg(short = 'c', long = "catalog", default_value = "Music_Library.csv")]
    catalog_file: String,

    /// City to fetch the current weather for
    #[arg(long = "city")]
    city: Option<String>,

    /// Recommend for this date (YYYY-MM-DD) instead of today
    #[arg(long = "date")]
    date: Option<NaiveDate>,

    /// Print the loaded library before recommending
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Never prompt for a city
    #[arg(long = "no-prompt")]
    no_prompt: bool,

    /// Quiet mode - only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();
}

/// Ask for a city on an interactive terminal; blank input means none
fn prompt_for_city() -> Option<String> {
    if !std::io::stdin().is_terminal() {
        return None;
    }

    print!("Enter the city for weather analysis: ");
    std::io::stdout().flush().ok()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok()?;
    let city = line.trim();
    (!city.is_empty()).then(|| city.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let config = load_config()?;

    let catalog = Catalog::load_or_empty(&args.catalog_file);
    if catalog.is_empty() {
        warn!("The library is empty; no song can be recommended");
    }
    if args.list {
        println!("Library ({} songs):", catalog.len());
        for line in catalog.display() {
            println!("- {line}");
        }
        println!();
    }

    let city = match args.city {
        Some(city) => Some(city),
        None if !args.no_prompt => prompt_for_city(),
        None => None,
    };

    let client = OpenWeatherClient::new(config.weather);
    let engine = RecommendationEngine::new(
        &catalog,
        client,
        WeatherClassifier::new(config.warm_split),
    );

    let recommendation = match args.date {
        Some(date) => engine.recommend_on(city.as_deref(), date, &mut rand::thread_rng()),
        None => engine.recommend(city.as_deref()),
    };

    match recommendation {
        Recommendation::Pick { track, source } => {
            let holiday = track
                .holiday
                .map(|h| h.tag())
                .unwrap_or("No Association");
            println!(
                "Recommended Song of the Day: {} by {} with BPM: {} ({}) with Holiday Association: {}",
                track.title,
                track.artist,
                track.tempo,
                track.tempo_band(),
                holiday
            );
            println!("Chosen by the {source} rule.");
        }
        Recommendation::NoMatch => {
            println!("No recommendation today: no song matches the weather or the date.");
        }
    }

    Ok(())
}
