use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Missing {group} parameter: '{key}'")]
    MissingParameter { group: &'static str, key: String },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Malformed parameter entry: {0}")]
    MalformedInput(String),

    #[error("Numeric error: {0}")]
    NumericDegeneracy(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

impl SimulationError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SimulationError::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
