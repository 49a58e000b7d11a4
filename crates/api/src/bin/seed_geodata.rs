//! One-shot seeder for the geography reference tables.
//!
//! Reads a restcountries v3.1 dump and a geonames cities dump and upserts
//! both tables, so re-running against fresher dumps refreshes rows in place.
//!
//! ```text
//! seed-geodata <countries.json> <cities.json>
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayplan_core::types::DbId;
use wayplan_db::models::city::CreateCity;
use wayplan_db::models::country::CreateCountry;
use wayplan_db::repositories::{CityRepo, CountryRepo};

/// One entry of the restcountries dump (https://restcountries.com/v3.1/all).
#[derive(Debug, Deserialize)]
struct CountryRecord {
    cca2: String,
    cca3: String,
    ccn3: Option<String>,
    name: CountryName,
    region: String,
    subregion: Option<String>,
    flags: CountryFlags,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
    official: String,
}

#[derive(Debug, Deserialize)]
struct CountryFlags {
    png: Option<String>,
}

/// One entry of the geonames "all cities with a population > 1000" dump.
#[derive(Debug, Deserialize)]
struct CityRecord {
    geoname_id: DbId,
    name: String,
    country_code: String,
    admin1_code: Option<String>,
    admin2_code: Option<String>,
    admin3_code: Option<String>,
    admin4_code: Option<String>,
    population: i64,
    coordinates: CityCoordinates,
    alternate_names: Option<Vec<String>>,
    modification_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CityCoordinates {
    lat: f64,
    lon: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_geodata=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(countries_path), Some(cities_path)) = (args.next(), args.next()) else {
        bail!("usage: seed-geodata <countries.json> <cities.json>");
    };

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = wayplan_db::create_pool(&database_url)
        .await
        .context("connecting to database")?;
    wayplan_db::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let countries = load_json::<Vec<CountryRecord>>(Path::new(&countries_path))?;
    tracing::info!(count = countries.len(), "loaded country records");
    for record in countries {
        let input = CreateCountry {
            cca2: record.cca2,
            cca3: record.cca3,
            ccn3: record.ccn3,
            name_common: record.name.common,
            name_official: record.name.official,
            region: record.region,
            subregion: record.subregion,
            flag_png: record.flags.png,
        };
        CountryRepo::upsert(&pool, &input)
            .await
            .with_context(|| format!("upserting country {}", input.cca2))?;
    }
    tracing::info!("country seeding complete");

    let cities = load_json::<Vec<CityRecord>>(Path::new(&cities_path))?;
    let total = cities.len();
    tracing::info!(count = total, "loaded city records");
    for (index, record) in cities.into_iter().enumerate() {
        let modified_on = record
            .modification_date
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .with_context(|| format!("bad modification_date {raw:?}"))
            })
            .transpose()?;

        let input = CreateCity {
            id: record.geoname_id,
            name: record.name,
            country_code: record.country_code,
            admin1_code: record.admin1_code,
            admin2_code: record.admin2_code,
            admin3_code: record.admin3_code,
            admin4_code: record.admin4_code,
            population: record.population,
            latitude: record.coordinates.lat,
            longitude: record.coordinates.lon,
            alternate_names: record.alternate_names.map(|names| names.join("|")),
            modified_on,
        };
        CityRepo::upsert(&pool, &input)
            .await
            .with_context(|| format!("upserting city {}", input.id))?;

        let seeded = index + 1;
        if seeded % 10_000 == 0 {
            tracing::info!(seeded, total, "city seeding progress");
        }
    }
    tracing::info!("city seeding complete");

    Ok(())
}

/// Read and deserialize a JSON dump, naming the file in any error.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
