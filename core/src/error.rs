use thiserror::Error;

/// Feil fra import-limet (sammendragsdata og konfig). Selve `PowerSummary` feiler aldri.
#[derive(Debug, Error)]
pub enum PowerError {
    #[error("ugyldig JSON ved '{}': {}", .0.path(), .0.inner())]
    Json(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("I/O-feil: {0}")]
    Io(#[from] std::io::Error),

    #[error("{field}: verdien er ikke endelig")]
    NonFinite { field: &'static str },

    #[error("{field}: {value} W er utenfor gyldig watt-område")]
    OutOfRange { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, PowerError>;
