use std::fmt;

#[derive(Debug)]
pub enum OrbitError {
    /// An angle was requested against a zero-length vector.
    DegenerateGeometry,
    /// Orbit tree JSON could not be parsed.
    MalformedInput(serde_json::Error),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitError::DegenerateGeometry => {
                write!(f, "angle is undefined for a zero-length vector")
            }
            OrbitError::MalformedInput(e) => write!(f, "malformed orbit data: {}", e),
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrbitError::MalformedInput(e) => Some(e),
            OrbitError::DegenerateGeometry => None,
        }
    }
}

impl From<serde_json::Error> for OrbitError {
    fn from(e: serde_json::Error) -> Self {
        OrbitError::MalformedInput(e)
    }
}
