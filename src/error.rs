use reqwest::StatusCode;
use thiserror::Error;

/// Rejected user input. Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please add at least one location.")]
    NoLocations,
    #[error("You can compare up to {max} locations. Clear locations to add new ones.")]
    SelectionFull { max: usize },
    #[error("Please select start and end dates.")]
    MissingDates,
    #[error("Invalid date '{0}', expected YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Start date must be before end date.")]
    StartAfterEnd,
    #[error("Invalid threshold '{0}', expected a number.")]
    InvalidThreshold(String),
    #[error("Invalid coordinates '{0}', expected 'lat,lon' within range.")]
    InvalidCoordinates(String),
}

/// The mandatory weather series could not be obtained or understood.
#[derive(Debug, Error)]
pub enum UpstreamDataError {
    #[error("weather request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("weather request returned status {0}")]
    Status(StatusCode),
    #[error("invalid data returned from POWER API: {0}")]
    Malformed(String),
}

/// Why a comparison run produced no report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("location {location}: {source}")]
    Upstream {
        location: usize,
        #[source]
        source: UpstreamDataError,
    },
}
