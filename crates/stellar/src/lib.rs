//! Host star classification and display colors.

pub mod spectral;
pub mod stellar_color;

#[cfg(test)]
mod spectral_test;

pub use spectral::SpectralClass;
pub use stellar_color::{ParseColorError, StellarColor};
