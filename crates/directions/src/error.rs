use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectionsError {
    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("route payload is not valid GeoJSON: {0}")]
    Payload(#[from] geojson::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
