use std::env;
use std::process::ExitCode;

use fuel_finder::favorites::FavoriteStore;
use fuel_finder::geocode::{GeocodeClient, GeocodeConfig};
use fuel_finder::opendata::{OpendataClient, OpendataConfig};
use fuel_finder::query::{QueryError, QueryOutcome, StationFinder};

/// Favorites live next to the binary, as a flat JSON array of ids.
const FAVORITES_FILE: &str = "favorites.json";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["all"] => report(build_finder().fetch_stations_online().await),
        ["city", city] => report(build_finder().fetch_stations_by_city(city).await),
        ["itinerary", start, end] => {
            report(build_finder().fetch_stations_by_itinerary(start, end).await)
        }
        ["fav", rest @ ..] => run_favorites(rest),
        _ => usage(),
    }
}

/// Wire the real HTTP clients into the query facade.
fn build_finder() -> StationFinder<OpendataClient, GeocodeClient> {
    let source =
        OpendataClient::new(OpendataConfig::default()).expect("failed to create opendata client");
    let locator =
        GeocodeClient::new(GeocodeConfig::default()).expect("failed to create geocode client");
    StationFinder::new(source, locator)
}

/// Print a query outcome, or the usage error for invalid input.
fn report(result: Result<QueryOutcome, QueryError>) -> ExitCode {
    match result {
        Ok(outcome) => {
            print_stations(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run_favorites(args: &[&str]) -> ExitCode {
    let mut store = match FavoriteStore::load(FAVORITES_FILE) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match args {
        ["list"] => {
            if store.is_empty() {
                println!("No favorites yet.");
            }
            for id in store.ids() {
                println!("{id}");
            }
            return ExitCode::SUCCESS;
        }
        ["add", id] => store.add(id).map(|changed| {
            if changed {
                println!("Added '{id}' to favorites.");
            } else {
                println!("'{id}' is already a favorite.");
            }
        }),
        ["remove", id] => store.remove(id).map(|changed| {
            if changed {
                println!("Removed '{id}' from favorites.");
            } else {
                println!("'{id}' is not a favorite.");
            }
        }),
        _ => return usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn print_stations(outcome: &QueryOutcome) {
    if let Some(notice) = &outcome.notice {
        println!("{notice}");
        return;
    }

    println!(
        "{:<10} {:<22} {:<32} {:>8} {:>8} {:>8}  {}",
        "ID", "Ville", "Carburants", "Gazole", "SP95", "SP98", "Marque"
    );
    for station in &outcome.stations {
        println!(
            "{:<10} {:<22} {:<32} {:>8} {:>8} {:>8}  {}",
            station.id,
            station.city,
            station.fuel_types,
            format_price(station.price_gazole),
            format_price(station.price_sp95),
            format_price(station.price_sp98),
            station.brand,
        );
    }
    println!("{} station(s)", outcome.stations.len());
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.3}"),
        None => "N/A".to_string(),
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage:");
    eprintln!("  fuel-finder all                      Fetch every station");
    eprintln!("  fuel-finder city <name>              Stations in a city");
    eprintln!("  fuel-finder itinerary <from> <to>    Stations between two cities");
    eprintln!("  fuel-finder fav list                 List favorite station ids");
    eprintln!("  fuel-finder fav add <id>             Add a favorite");
    eprintln!("  fuel-finder fav remove <id>          Remove a favorite");
    ExitCode::from(2)
}
