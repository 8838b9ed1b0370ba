//! Capabilities the correction pipeline delegates to
//!
//! Solar position and radiative transfer are heavyweight physical models
//! living outside this crate. The pipeline only sees them through the two
//! narrow traits below.

use serde::{Deserialize, Serialize};
use evapolux_core::{GeoPoint, Result, SolarGeometry, Timestamp};

/// Computes the sun position for a location and instant.
///
/// Implementations fail with [`evapolux_core::Error::GeometryUnavailable`]
/// when no position can be computed.
pub trait SolarGeometryProvider: Send + Sync {
    fn solar_geometry(&self, point: &GeoPoint, time: &Timestamp) -> Result<SolarGeometry>;
}

/// Radiative-transfer atmospheric correction for a single band.
///
/// Implementations fail with [`evapolux_core::Error::AtmosphericModel`] on
/// an unsupported wavelength or when the model does not converge.
pub trait AtmosphericCorrectionEngine: Send + Sync {
    fn correct_reflectance(&self, request: &AtmosphericRequest) -> Result<f64>;
}

impl<T: SolarGeometryProvider + ?Sized> SolarGeometryProvider for &T {
    fn solar_geometry(&self, point: &GeoPoint, time: &Timestamp) -> Result<SolarGeometry> {
        (**self).solar_geometry(point, time)
    }
}

impl<T: SolarGeometryProvider + ?Sized> SolarGeometryProvider for Box<T> {
    fn solar_geometry(&self, point: &GeoPoint, time: &Timestamp) -> Result<SolarGeometry> {
        (**self).solar_geometry(point, time)
    }
}

impl<T: AtmosphericCorrectionEngine + ?Sized> AtmosphericCorrectionEngine for &T {
    fn correct_reflectance(&self, request: &AtmosphericRequest) -> Result<f64> {
        (**self).correct_reflectance(request)
    }
}

impl<T: AtmosphericCorrectionEngine + ?Sized> AtmosphericCorrectionEngine for Box<T> {
    fn correct_reflectance(&self, request: &AtmosphericRequest) -> Result<f64> {
        (**self).correct_reflectance(request)
    }
}

/// Standard atmosphere used by the radiative-transfer model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtmosphereProfile {
    Tropical,
    #[default]
    MidlatitudeSummer,
    MidlatitudeWinter,
    SubarcticSummer,
    SubarcticWinter,
    UsStandard1962,
}

/// Aerosol model used by the radiative-transfer model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AerosolProfile {
    NoAerosols,
    Continental,
    #[default]
    Maritime,
    Urban,
    Desert,
    BiomassBurning,
}

/// One atmospheric correction request. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericRequest {
    pub solar_zenith_deg: f64,
    pub solar_azimuth_deg: f64,
    pub view_zenith_deg: f64,
    pub view_azimuth_deg: f64,
    pub wavelength_um: f64,
    pub atmosphere: AtmosphereProfile,
    pub aerosol: AerosolProfile,
}

/// Provider returning a precomputed sun position, e.g. the sun angles
/// shipped in a scene's metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSolarGeometry(pub SolarGeometry);

impl SolarGeometryProvider for FixedSolarGeometry {
    fn solar_geometry(&self, _point: &GeoPoint, _time: &Timestamp) -> Result<SolarGeometry> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        assert_eq!(AtmosphereProfile::default(), AtmosphereProfile::MidlatitudeSummer);
        assert_eq!(AerosolProfile::default(), AerosolProfile::Maritime);
    }

    #[test]
    fn test_profile_serde_names() {
        let json = serde_json::to_string(&AtmosphereProfile::UsStandard1962).unwrap();
        assert_eq!(json, "\"us_standard1962\"");
        let aerosol: AerosolProfile = serde_json::from_str("\"biomass_burning\"").unwrap();
        assert_eq!(aerosol, AerosolProfile::BiomassBurning);
    }

    #[test]
    fn test_fixed_geometry() {
        let provider = FixedSolarGeometry(SolarGeometry::new(42.0, 15.0));
        let point = GeoPoint::new(0.0, 0.0).unwrap();
        let time = evapolux_core::parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(
            provider.solar_geometry(&point, &time).unwrap(),
            SolarGeometry::new(42.0, 15.0)
        );

        let boxed: Box<dyn SolarGeometryProvider> = Box::new(provider);
        assert_eq!(boxed.solar_geometry(&point, &time).unwrap().elevation_deg, 42.0);
    }
}
