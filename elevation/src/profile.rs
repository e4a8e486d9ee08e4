use crate::{
    stale::{Generation, Generations},
    synthetic::synthetic_elevations,
    ElevationError, ElevationSource,
};
use geo::{Coord, Point};
use geomath::{distance_m, linspace, LinearPathIter};
use log::{debug, warn};
use std::time::Duration;

/// Default number of path segments between the two endpoints.
pub const DEFAULT_SAMPLES: usize = 10;

/// Default bound on how long a single elevation lookup may take
/// before the synthetic fallback kicks in.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An elevation profile along the straight path between two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Total path distance in meters.
    pub distance_m: f64,

    /// Sampled points, ordered from start to end. Their distances are
    /// non-decreasing and span `[0, distance_m]`.
    pub points: Vec<ProfilePoint>,

    /// Whether the elevations were measured or synthesized.
    pub provenance: Provenance,
}

/// One sample of a [`Profile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePoint {
    /// Location of this sample (x = longitude, y = latitude).
    pub location: Point<f64>,

    /// Distance from the start of the path, in meters.
    pub distance_m: f64,

    /// Terrain elevation, in meters above the reference datum.
    pub elevation_m: f64,
}

/// Origin of a profile's elevation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Returned by the elevation source.
    Measured,

    /// Drawn from the synthetic band after a failed lookup. Carries
    /// no geographic truth.
    Synthetic,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            start: None,
            end: None,
            samples: DEFAULT_SAMPLES,
            timeout: DEFAULT_TIMEOUT,
            guard: None,
        }
    }
}

pub struct ProfileBuilder {
    start: Option<Coord<f64>>,

    end: Option<Coord<f64>>,

    /// Number of path segments between the endpoints.
    samples: usize,

    /// Bound on the elevation lookup.
    timeout: Duration,

    /// Stale-lookup guard, if registered.
    guard: Option<(Generations, Generation)>,
}

impl ProfileBuilder {
    /// Start point of the path (required).
    #[must_use]
    pub fn start(mut self, coord: Coord<f64>) -> Self {
        self.start = Some(coord);
        self
    }

    /// End point of the path (required).
    #[must_use]
    pub fn end(mut self, coord: Coord<f64>) -> Self {
        self.end = Some(coord);
        self
    }

    /// Number of path segments between the endpoints; the profile has
    /// `samples + 1` points. Must be at least 1. Defaults to
    /// [`DEFAULT_SAMPLES`].
    #[must_use]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Bound on how long the elevation lookup may take before the
    /// synthetic fallback kicks in. Defaults to [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Registers this lookup with `generations`.
    ///
    /// Calling [`Generations::next`] afterwards (normally for a newer
    /// lookup) supersedes this one: `build` then returns
    /// [`ElevationError::Superseded`] instead of a stale profile.
    #[must_use]
    pub fn supersedable(mut self, generations: &Generations) -> Self {
        let generation = generations.next();
        self.guard = Some((generations.clone(), generation));
        self
    }

    /// Samples the path and looks up elevations through `source`.
    ///
    /// Source failures, malformed responses, and timeouts are never
    /// fatal: the profile comes back with synthetic elevations and
    /// [`Provenance::Synthetic`] instead.
    pub async fn build<S>(&self, source: &S) -> Result<Profile, ElevationError>
    where
        S: ElevationSource,
    {
        let start = self.start.ok_or(ElevationError::Builder("start"))?;
        let end = self.end.ok_or(ElevationError::Builder("end"))?;
        if self.samples == 0 {
            return Err(ElevationError::Builder("samples"));
        }

        let start_point = Point::from(start);
        let end_point = Point::from(end);
        let total_distance_m = distance_m(start_point, end_point);

        let path: Vec<Point<f64>> =
            LinearPathIter::new(start_point, end_point, self.samples).collect();
        let distances_m: Vec<f64> = linspace(0.0, total_distance_m, self.samples + 1).collect();

        let lookup = tokio::time::timeout(self.timeout, source.elevations(&path)).await;
        let (elevations, provenance) = match lookup {
            Ok(Ok(elevations)) if elevations.len() == path.len() => {
                (elevations, Provenance::Measured)
            }
            Ok(Ok(elevations)) => {
                warn!(
                    "elevation source returned {} elevations for {} locations; \
                     falling back to synthetic profile",
                    elevations.len(),
                    path.len()
                );
                (synthetic_elevations(path.len()), Provenance::Synthetic)
            }
            Ok(Err(e)) => {
                warn!("elevation lookup failed: {e}; falling back to synthetic profile");
                (synthetic_elevations(path.len()), Provenance::Synthetic)
            }
            Err(_elapsed) => {
                warn!(
                    "elevation lookup exceeded {:?}; falling back to synthetic profile",
                    self.timeout
                );
                (synthetic_elevations(path.len()), Provenance::Synthetic)
            }
        };

        if let Some((generations, generation)) = &self.guard {
            if !generations.is_current(*generation) {
                return Err(ElevationError::Superseded);
            }
        }

        debug!(
            "profile; len: {}, distance_m: {:.1}, provenance: {:?}",
            path.len(),
            total_distance_m,
            provenance
        );

        let points = path
            .into_iter()
            .zip(distances_m)
            .zip(elevations)
            .map(|((location, distance_m), elevation_m)| ProfilePoint {
                location,
                distance_m,
                elevation_m,
            })
            .collect();

        Ok(Profile {
            distance_m: total_distance_m,
            points,
            provenance,
        })
    }
}
