//! FAO Penman-Monteith reference evapotranspiration
//!
//! Daily reference ET (ET₀) for a hypothetical grass reference crop,
//! following Allen et al. (1998), FAO Irrigation and Drainage Paper 56, eq. 6.

use crate::maybe_rayon::*;
use evapolux_core::{Algorithm, Error, MeteorologicalObservation, Result};
use tracing::{debug, trace};

use super::vapour::{
    actual_vapor_pressure, mean_saturation_vapor_pressure, psychrometric_constant,
    vapor_pressure_slope,
};

/// Soil heat flux density G for a daily time step (MJ/m²/day)
pub const DAILY_SOIL_HEAT_FLUX: f64 = 0.0;

/// Reference evapotranspiration algorithm
#[derive(Debug, Clone, Default)]
pub struct ReferenceEvapotranspiration;

impl Algorithm for ReferenceEvapotranspiration {
    type Input = MeteorologicalObservation;
    type Output = f64;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ReferenceEvapotranspiration"
    }

    fn description(&self) -> &'static str {
        "Daily reference evapotranspiration (FAO-56 Penman-Monteith)"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        reference_et(&input)
    }
}

/// Compute daily reference evapotranspiration in mm/day.
///
/// ```text
///        0.408 Δ (Rs - G) + γ (900 / (T + 273)) u2 (es - ea)
/// ET₀ = -----------------------------------------------------
///                  Δ + γ (1 + 0.34 u2)
/// ```
///
/// with G = 0 for a daily step. Negative results (condensation) are returned
/// as-is.
///
/// # Errors
/// [`Error::InvalidInput`] when any field of `obs` is outside its physical
/// domain, see [`MeteorologicalObservation::validate`].
pub fn reference_et(obs: &MeteorologicalObservation) -> Result<f64> {
    obs.validate()?;

    let g = DAILY_SOIL_HEAT_FLUX;
    let gamma = psychrometric_constant(obs.elevation_m);
    let delta = vapor_pressure_slope(obs.tmean);
    let es = mean_saturation_vapor_pressure(obs.tmax, obs.tmin);
    let ea = actual_vapor_pressure(es, obs.rh_mean);
    let u2 = obs.wind_speed_2m;

    let radiation_term = 0.408 * delta * (obs.solar_radiation - g);
    let aerodynamic_term = gamma * (900.0 / (obs.tmean + 273.0)) * u2 * (es - ea);
    let et = (radiation_term + aerodynamic_term) / (delta + gamma * (1.0 + 0.34 * u2));

    trace!(gamma, delta, es, ea, et, "reference ET");
    Ok(et)
}

/// Compute reference ET for a series of daily observations.
///
/// Days are independent and evaluated in parallel. Any invalid observation
/// fails the whole series with that observation's error.
pub fn reference_et_series(observations: &[MeteorologicalObservation]) -> Result<Vec<f64>> {
    observations
        .par_iter()
        .enumerate()
        .map(|(day, obs)| {
            reference_et(obs).inspect_err(|e| debug!(day, error = %e, "rejected observation"))
        })
        .collect()
}
