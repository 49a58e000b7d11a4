use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields except the upstream API secrets have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for outbound calls to routing/map/scraped sites (default: `30`).
    pub upstream_timeout_secs: u64,
    /// API key for the routing service.
    pub openroute_secret: String,
    /// Routing service base URL; overridable so tests can point at a double.
    pub openroute_base_url: String,
    /// API key for the static map provider.
    pub mapbox_secret: String,
    /// Static map provider base URL; overridable so tests can point at a double.
    pub mapbox_base_url: String,
    /// Directory exported PDFs are written to.
    pub export_dir: PathBuf,
    /// Directory holding the NotoSans TTF files used by the PDF renderer.
    pub font_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                           |
    /// |-------------------------|-----------------------------------|
    /// | `HOST`                  | `0.0.0.0`                         |
    /// | `PORT`                  | `3000`                            |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`           |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                              |
    /// | `UPSTREAM_TIMEOUT_SECS` | `30`                              |
    /// | `OPENROUTE_SECRET`      | (required)                        |
    /// | `OPENROUTE_BASE_URL`    | `https://api.openrouteservice.org`|
    /// | `MAPBOX_SECRET`         | (required)                        |
    /// | `MAPBOX_BASE_URL`       | `https://api.mapbox.com`          |
    /// | `EXPORT_DIR`            | `exports`                         |
    /// | `FONT_DIR`              | `assets/fonts`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let openroute_secret =
            std::env::var("OPENROUTE_SECRET").expect("OPENROUTE_SECRET must be set");
        let openroute_base_url = std::env::var("OPENROUTE_BASE_URL")
            .unwrap_or_else(|_| "https://api.openrouteservice.org".into());

        let mapbox_secret = std::env::var("MAPBOX_SECRET").expect("MAPBOX_SECRET must be set");
        let mapbox_base_url =
            std::env::var("MAPBOX_BASE_URL").unwrap_or_else(|_| "https://api.mapbox.com".into());

        let export_dir = PathBuf::from(std::env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".into()));
        let font_dir =
            PathBuf::from(std::env::var("FONT_DIR").unwrap_or_else(|_| "assets/fonts".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_timeout_secs,
            openroute_secret,
            openroute_base_url,
            mapbox_secret,
            mapbox_base_url,
            export_dir,
            font_dir,
        }
    }
}
