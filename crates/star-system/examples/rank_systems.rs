//! Rank the star systems of a planet catalog by mean habitability
//!
//! Usage: cargo run -p star-system --example rank_systems -- planets.json [model.toml]
//!
//! Output: CSV on stdout, one row per star system, most habitable first.
//! Set RUST_LOG=debug to see load and aggregation logging.

use std::error::Error;

use catalog::load_planets_from_path;
use habitability::HabitabilityModel;
use star_system::{aggregate_with, encode_systems, rank_by_habitability};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let catalog_path = args
        .next()
        .ok_or("usage: rank_systems <planets.json> [model.toml]")?;

    let model = match args.next() {
        Some(path) => HabitabilityModel::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => HabitabilityModel::default(),
    };

    let planets = load_planets_from_path(&catalog_path)?;
    let mut systems = aggregate_with(&model, &planets);
    rank_by_habitability(&mut systems);

    println!("star,star_type,planets,mean_habitability,max_radius_earth,color,marker_radius_px");
    for (system, encoding) in systems.iter().zip(encode_systems(&systems)) {
        println!(
            "{},{},{},{:.4},{:.2},{},{:.1}",
            system.name,
            system.star_type.as_deref().unwrap_or(""),
            system.planet_count(),
            system.mean_habitability,
            system.max_radius,
            encoding.color,
            encoding.marker_radius,
        );
    }

    eprintln!(
        "Ranked {} star systems from {} planets",
        systems.len(),
        planets.len()
    );
    Ok(())
}
