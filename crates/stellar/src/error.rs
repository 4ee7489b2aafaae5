use std::fmt;

/// Returned when a spectral class label is not one of O, B, A, F, G, K, M.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectralTypeError {
    pub label: String,
}

impl fmt::Display for SpectralTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown spectral class '{}'", self.label)
    }
}

impl std::error::Error for SpectralTypeError {}
