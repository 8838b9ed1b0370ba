//! Spectral bands identified by their central wavelength

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, Error, Result};

/// A spectral band, identified by its central wavelength in micrometers.
///
/// Whether a wavelength lies in the range a radiative-transfer model
/// supports is decided by that model, not here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SpectralBand(f64);

impl SpectralBand {
    /// Blue (0.49 µm)
    pub const BLUE: SpectralBand = SpectralBand(0.49);
    /// Green (0.56 µm)
    pub const GREEN: SpectralBand = SpectralBand(0.56);
    /// Red (0.665 µm)
    pub const RED: SpectralBand = SpectralBand(0.665);
    /// Near-infrared (0.842 µm)
    pub const NIR: SpectralBand = SpectralBand(0.842);

    /// Create a band from a wavelength in micrometers. Must be finite and positive.
    pub fn new(wavelength_um: f64) -> Result<Self> {
        let wavelength_um = require_finite("wavelength_um", wavelength_um)?;
        if wavelength_um <= 0.0 {
            return Err(Error::invalid_input("wavelength_um", wavelength_um, "must be positive"));
        }
        Ok(Self(wavelength_um))
    }

    pub fn wavelength_um(&self) -> f64 {
        self.0
    }
}

impl Default for SpectralBand {
    fn default() -> Self {
        Self::GREEN
    }
}

impl TryFrom<f64> for SpectralBand {
    type Error = Error;

    fn try_from(wavelength_um: f64) -> Result<Self> {
        SpectralBand::new(wavelength_um)
    }
}

impl From<SpectralBand> for f64 {
    fn from(band: SpectralBand) -> f64 {
        band.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_validation() {
        assert_eq!(SpectralBand::new(0.56).unwrap(), SpectralBand::GREEN);
        assert!(SpectralBand::new(0.0).is_err());
        assert!(SpectralBand::new(-0.4).is_err());
        assert!(SpectralBand::new(f64::NAN).is_err());
    }

    #[test]
    fn test_band_serde() {
        let json = serde_json::to_string(&SpectralBand::RED).unwrap();
        assert_eq!(json, "0.665");
        let back: SpectralBand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SpectralBand::RED);
        assert!(serde_json::from_str::<SpectralBand>("-1.0").is_err());
    }
}
