//! Spherical-earth geometry primitives for point-to-point radio links.
//!
//! All functions assume a spherical earth of radius
//! [`MEAN_EARTH_RADIUS`] and geographic coordinates in degrees, with
//! `x` = longitude and `y` = latitude per [`geo`]'s convention.

mod bearing;
mod haversine;
mod linspace;

pub use crate::{
    bearing::bearing_rad,
    haversine::distance_m,
    linspace::{linspace, LinearPathIter},
};
pub use geo;

/// Mean earth radius in meters.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;
