//! Imagery correction algorithms
//!
//! Corrections applied to surface reflectance after atmospheric correction:
//! - Illumination: cosine-law normalization to an overhead sun

mod illumination;

pub use illumination::{
    illumination_correction, illumination_correction_grid, IlluminationCorrection,
    IlluminationParams,
};
