//! Daily meteorological observations

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, Error, Result};

/// Daily meteorological observation for one site.
///
/// All fields are plain values; [`MeteorologicalObservation::validate`]
/// checks their physical domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeteorologicalObservation {
    /// Mean daily air temperature (°C)
    pub tmean: f64,
    /// Maximum daily air temperature (°C)
    pub tmax: f64,
    /// Minimum daily air temperature (°C)
    pub tmin: f64,
    /// Mean relative humidity (%), in [0, 100]
    pub rh_mean: f64,
    /// Wind speed at 2 m height (m/s)
    pub wind_speed_2m: f64,
    /// Incoming solar radiation (MJ/m²/day)
    pub solar_radiation: f64,
    /// Site elevation above sea level (m)
    pub elevation_m: f64,
}

/// Temperatures at or below this value (°C) hit the pole of the Magnus
/// vapour-pressure expression `T + 237.3`.
pub const MAGNUS_POLE_C: f64 = -237.3;

/// Elevation (m) at which the FAO-56 pressure model `(293 - 0.0065 z) / 293`
/// reaches zero.
pub const MAX_ELEVATION_M: f64 = 293.0 / 0.0065;

/// Absolute zero in the rounded form used by the Penman-Monteith wind term (°C)
pub const ABSOLUTE_ZERO_C: f64 = -273.0;

impl MeteorologicalObservation {
    /// Check every field against its physical domain.
    pub fn validate(&self) -> Result<()> {
        let tmean = require_finite("tmean", self.tmean)?;
        require_finite("tmax", self.tmax)?;
        require_finite("tmin", self.tmin)?;
        require_finite("rh_mean", self.rh_mean)?;
        require_finite("wind_speed_2m", self.wind_speed_2m)?;
        require_finite("solar_radiation", self.solar_radiation)?;
        require_finite("elevation_m", self.elevation_m)?;

        if tmean == ABSOLUTE_ZERO_C {
            return Err(Error::invalid_input("tmean", tmean, "absolute zero"));
        }
        for (name, t) in [("tmean", tmean), ("tmax", self.tmax), ("tmin", self.tmin)] {
            if t <= MAGNUS_POLE_C {
                return Err(Error::invalid_input(name, t, "temperature below physical range"));
            }
        }
        if self.elevation_m >= MAX_ELEVATION_M {
            return Err(Error::invalid_input(
                "elevation_m",
                self.elevation_m,
                "above the range of the standard atmosphere",
            ));
        }
        if !(0.0..=100.0).contains(&self.rh_mean) {
            return Err(Error::invalid_input("rh_mean", self.rh_mean, "must be within [0, 100]"));
        }
        if self.wind_speed_2m < 0.0 {
            return Err(Error::invalid_input("wind_speed_2m", self.wind_speed_2m, "must be non-negative"));
        }
        if self.solar_radiation < 0.0 {
            return Err(Error::invalid_input(
                "solar_radiation",
                self.solar_radiation,
                "must be non-negative",
            ));
        }
        Ok(())
    }
}
