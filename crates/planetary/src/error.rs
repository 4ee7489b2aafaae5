use std::fmt;

/// Returned when a composition class label does not name one of the known classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionClassError {
    pub label: String,
}

impl fmt::Display for CompositionClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown composition class '{}'", self.label)
    }
}

impl std::error::Error for CompositionClassError {}
