//! Elevation profiles along a point-to-point radio path.
//!
//! Sampling is the one suspending operation in the link-analysis
//! pipeline: building a [`Profile`] issues a single request to an
//! external [`ElevationSource`] and falls back to tagged synthetic
//! values when the source fails, times out, or returns a malformed
//! response. Everything downstream of the lookup is pure computation.

mod error;
mod open_elevation;
mod profile;
mod source;
mod stale;
mod synthetic;

pub use crate::{
    error::ElevationError,
    open_elevation::{OpenElevation, DEFAULT_BASE_URL},
    profile::{
        Profile, ProfileBuilder, ProfilePoint, Provenance, DEFAULT_SAMPLES, DEFAULT_TIMEOUT,
    },
    source::ElevationSource,
    stale::{Generation, Generations},
    synthetic::{SYNTHETIC_MAX_M, SYNTHETIC_MIN_M},
};
pub use geo;
