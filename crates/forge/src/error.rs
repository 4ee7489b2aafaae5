use std::fmt;

use planetary::CompositionClassError;
use stellar::SpectralTypeError;

/// Failures while configuring or running the generator.
#[derive(Debug)]
pub enum GenerationError {
    /// A spectral or composition class label that names no known class.
    InvalidCategory(String),
    /// A configuration value that would make generation meaningless.
    InvalidConfig { field: &'static str, reason: String },
    /// Numbering the children of `parent` would overflow a `u64` id.
    IdOverflow { parent: u64 },
    ConfigParse(toml::de::Error),
    ConfigRead(std::io::Error),
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenerationError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidCategory(message) => write!(f, "invalid category: {}", message),
            GenerationError::InvalidConfig { field, reason } => {
                write!(f, "invalid generator config `{}`: {}", field, reason)
            }
            GenerationError::IdOverflow { parent } => {
                write!(f, "body ids below #{} do not fit in 64 bits", parent)
            }
            GenerationError::ConfigParse(err) => write!(f, "could not parse generator config: {}", err),
            GenerationError::ConfigRead(err) => write!(f, "could not read generator config: {}", err),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::ConfigParse(err) => Some(err),
            GenerationError::ConfigRead(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpectralTypeError> for GenerationError {
    fn from(err: SpectralTypeError) -> Self {
        GenerationError::InvalidCategory(err.to_string())
    }
}

impl From<CompositionClassError> for GenerationError {
    fn from(err: CompositionClassError) -> Self {
        GenerationError::InvalidCategory(err.to_string())
    }
}

impl From<toml::de::Error> for GenerationError {
    fn from(err: toml::de::Error) -> Self {
        GenerationError::ConfigParse(err)
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        GenerationError::ConfigRead(err)
    }
}
