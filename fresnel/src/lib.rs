//! First-Fresnel-zone geometry for point-to-point radio links.
//!
//! Given two towers and an operating frequency, this crate models the
//! first Fresnel zone of the direct path: its footprint for map
//! rendering and, when an elevation profile is supplied, the per-point
//! clearance between the zone's lower boundary and the terrain.

mod ellipse;
mod error;
mod obstruction;
mod zone;

pub use crate::{
    ellipse::polygonize,
    error::FresnelError,
    obstruction::{is_obstructed, min_clearance_m},
    zone::{fresnel_radius_m, wavelength_m, ElevationPoint, FresnelZone, FresnelZoneBuilder},
};
pub use {elevation, geo, geomath};

/// Speed of light in m/s (conventional 3×10⁸ approximation).
const SPEED_OF_LIGHT_M_S: f64 = 3e8;
