//! Terminal display color for stars.

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use serde::{Deserialize, Serialize};

use crate::spectral::SpectralType;

/// A color from the 256-entry ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StellarColor(pub u8);

impl StellarColor {
    /// Fixed palette entry per spectral class, blue for hot stars through red for cool ones.
    pub fn from_spectral_type(spectral_type: SpectralType) -> Self {
        let code = match spectral_type {
            SpectralType::O => 21,
            SpectralType::B => 27,
            SpectralType::A => 45,
            SpectralType::F => 226,
            SpectralType::G => 220,
            SpectralType::K => 208,
            SpectralType::M => 196,
        };
        StellarColor(code)
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    /// Wraps `text` in a foreground escape for this color followed by a reset.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", SetForegroundColor(Color::AnsiValue(self.0)), text, ResetColor)
    }
}
