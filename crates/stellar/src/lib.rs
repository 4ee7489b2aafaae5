//! Stellar types and sampling functions.

pub mod error;
pub mod sampling;
pub mod spectral;
pub mod star;
pub mod stellar_color;


pub use error::SpectralTypeError;

// Re-export spectral types
pub use spectral::{SpectralType, StellarProfile};

// Re-export color
pub use stellar_color::StellarColor;

pub use star::Star;

// Re-export generation functions
pub use sampling::{sample_spectral_type, sample_star, sample_uniform};
