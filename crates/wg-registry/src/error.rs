use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("mover {label:?} has {waypoints} waypoint(s); a route needs at least 2")]
    RouteTooShort { label: String, waypoints: usize },

    #[error("mover {label:?} has invalid speed {speed}; expected a finite value >= 0")]
    InvalidSpeed { label: String, speed: f64 },

    #[error("watch-point {label:?} has population 0")]
    InvalidPopulation { label: String },

    #[error("{what} {label:?} has an out-of-range coordinate")]
    InvalidCoordinate { what: &'static str, label: String },

    #[error("duplicate {what} label {label:?}")]
    DuplicateLabel { what: &'static str, label: String },

    #[error("registry has more entries than ids can address")]
    TooManyEntries,

    #[error("registry parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
