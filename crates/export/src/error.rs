use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("itinerary has no places to map")]
    EmptyItinerary,

    #[error("static map request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not embed static map image: {0}")]
    Image(String),

    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
