//! Atmospheric and vapour-pressure parameters (FAO-56, chapter 3)
//!
//! Every function here is pure. Temperatures in °C, pressures in kPa,
//! elevation in meters.

/// Atmospheric pressure at a site elevation (kPa), FAO-56 eq. 7.
pub fn atmospheric_pressure(elevation_m: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26)
}

/// Psychrometric constant γ (kPa/°C), FAO-56 eq. 8.
pub fn psychrometric_constant(elevation_m: f64) -> f64 {
    0.665e-3 * atmospheric_pressure(elevation_m)
}

/// Saturation vapour pressure e°(T) at air temperature `t` (kPa), FAO-56 eq. 11.
pub fn saturation_vapor_pressure(t: f64) -> f64 {
    0.6108 * ((17.27 * t) / (t + 237.3)).exp()
}

/// Mean saturation vapour pressure es from daily extremes (kPa), FAO-56 eq. 12.
pub fn mean_saturation_vapor_pressure(tmax: f64, tmin: f64) -> f64 {
    (saturation_vapor_pressure(tmax) + saturation_vapor_pressure(tmin)) / 2.0
}

/// Slope Δ of the saturation vapour-pressure curve at `tmean` (kPa/°C), FAO-56 eq. 13.
pub fn vapor_pressure_slope(tmean: f64) -> f64 {
    (4098.0 * saturation_vapor_pressure(tmean)) / (tmean + 237.3).powi(2)
}

/// Actual vapour pressure ea from mean relative humidity (kPa).
pub fn actual_vapor_pressure(es: f64, rh_mean: f64) -> f64 {
    es * rh_mean / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Reference values from FAO-56 Annex 2, Table 2.2 / 2.4
    #[test]
    fn test_saturation_vapor_pressure_table() {
        assert_relative_eq!(saturation_vapor_pressure(20.0), 2.338, epsilon = 1e-3);
        assert_relative_eq!(saturation_vapor_pressure(25.0), 3.168, epsilon = 1e-3);
        assert_relative_eq!(saturation_vapor_pressure(0.0), 0.6108, epsilon = 1e-12);
    }

    #[test]
    fn test_slope_table() {
        assert_relative_eq!(vapor_pressure_slope(25.0), 0.189, epsilon = 1e-3);
        assert_relative_eq!(vapor_pressure_slope(10.0), 0.082, epsilon = 1e-3);
    }

    #[test]
    fn test_pressure_and_gamma() {
        // FAO-56 example 2: z = 1800 m -> P = 81.8 kPa, gamma = 0.054
        assert_relative_eq!(atmospheric_pressure(1800.0), 81.8, epsilon = 0.05);
        assert_relative_eq!(psychrometric_constant(1800.0), 0.054, epsilon = 5e-4);
        assert_relative_eq!(atmospheric_pressure(0.0), 101.3, epsilon = 1e-12);
    }

    #[test]
    fn test_gamma_decreases_with_elevation() {
        assert!(psychrometric_constant(0.0) > psychrometric_constant(500.0));
        assert!(psychrometric_constant(500.0) > psychrometric_constant(3000.0));
    }

    #[test]
    fn test_mean_saturation() {
        let es = mean_saturation_vapor_pressure(30.0, 20.0);
        assert_relative_eq!(es, 3.2906731648432297, epsilon = 1e-12);
        assert_relative_eq!(
            mean_saturation_vapor_pressure(18.0, 18.0),
            saturation_vapor_pressure(18.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_actual_vapor_pressure() {
        assert_relative_eq!(actual_vapor_pressure(3.0, 100.0), 3.0);
        assert_relative_eq!(actual_vapor_pressure(3.0, 50.0), 1.5);
        assert_relative_eq!(actual_vapor_pressure(3.0, 0.0), 0.0);
    }
}
