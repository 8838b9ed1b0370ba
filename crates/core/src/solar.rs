//! Sun position relative to a ground point

use serde::{Deserialize, Serialize};

/// Solar elevation and azimuth for one (location, instant) pair.
///
/// Produced by a solar geometry provider on every request and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarGeometry {
    /// Angle of the sun above the horizon in degrees. Negative below the horizon.
    pub elevation_deg: f64,
    /// Sun azimuth in degrees (0 = North, clockwise), in [0, 360)
    pub azimuth_deg: f64,
}

impl SolarGeometry {
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            elevation_deg,
            azimuth_deg,
        }
    }

    /// Solar zenith angle in degrees (`90 - elevation`)
    pub fn zenith_deg(&self) -> f64 {
        90.0 - self.elevation_deg
    }
}

/// Sensor view direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewGeometry {
    pub zenith_deg: f64,
    pub azimuth_deg: f64,
}

impl ViewGeometry {
    /// Nadir-looking sensor
    pub const NADIR: ViewGeometry = ViewGeometry {
        zenith_deg: 0.0,
        azimuth_deg: 0.0,
    };
}

impl Default for ViewGeometry {
    fn default() -> Self {
        Self::NADIR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zenith() {
        assert_relative_eq!(SolarGeometry::new(30.0, 0.0).zenith_deg(), 60.0);
        assert_relative_eq!(SolarGeometry::new(-5.0, 270.0).zenith_deg(), 95.0);
    }
}
