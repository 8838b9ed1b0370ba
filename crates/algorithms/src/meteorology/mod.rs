//! Agro-meteorological algorithms
//!
//! - Vapour pressure, psychrometric constant and atmospheric pressure (FAO-56)
//! - Reference evapotranspiration: FAO Penman-Monteith, daily step

mod reference_et;
mod vapour;

pub use reference_et::{
    reference_et, reference_et_series, ReferenceEvapotranspiration, DAILY_SOIL_HEAT_FLUX,
};
pub use vapour::{
    actual_vapor_pressure, atmospheric_pressure, mean_saturation_vapor_pressure,
    psychrometric_constant, saturation_vapor_pressure, vapor_pressure_slope,
};
