use std::fmt;

#[derive(Debug)]
pub enum SystemError {
    /// No body with this name exists in the system.
    UnknownBody(String),
    /// No system with this name exists in the universe.
    UnknownSystem(String),
    /// The named body exists but is not a ship.
    NotAShip(String),
    /// The named body has no surface to scan (stars and ships).
    NotScannable(String),
    /// A universe snapshot could not be written or read.
    Snapshot(serde_json::Error),
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::UnknownBody(name) => write!(f, "no body named '{}'", name),
            SystemError::UnknownSystem(name) => write!(f, "no system named '{}'", name),
            SystemError::NotAShip(name) => write!(f, "'{}' is not a ship", name),
            SystemError::NotScannable(name) => write!(f, "'{}' has no surface to scan", name),
            SystemError::Snapshot(e) => write!(f, "snapshot error: {}", e),
        }
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SystemError::Snapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SystemError {
    fn from(e: serde_json::Error) -> Self {
        SystemError::Snapshot(e)
    }
}
