use std::sync::Arc;
use std::time::Duration;

use wayplan_directions::DirectionsClient;
use wayplan_export::StaticMapClient;

use crate::config::AppConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wayplan_db::DbPool,
    /// Server configuration.
    pub config: Arc<AppConfig>,
    /// Shared outbound HTTP client, used directly by the scrape handlers.
    pub http: reqwest::Client,
    /// Routing API client.
    pub directions: DirectionsClient,
    /// Static map image client.
    pub static_maps: StaticMapClient,
}

impl AppState {
    /// Assemble the state from a pool and configuration.
    ///
    /// All upstream clients share one HTTP client so the user agent and
    /// timeout are applied uniformly.
    pub fn build(pool: wayplan_db::DbPool, config: AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wayplan/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        let directions = DirectionsClient::new(
            http.clone(),
            config.openroute_base_url.clone(),
            config.openroute_secret.clone(),
        );
        let static_maps = StaticMapClient::new(
            http.clone(),
            config.mapbox_base_url.clone(),
            config.mapbox_secret.clone(),
        );

        Self {
            pool,
            config: Arc::new(config),
            http,
            directions,
            static_maps,
        }
    }
}
