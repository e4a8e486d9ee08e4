use crate::ElevationError;
use geo::Point;
use std::future::Future;

/// An external source of terrain elevations.
///
/// Implementations receive an ordered list of locations and must
/// return one elevation, in meters, per location, in the same order.
/// Any transport or decoding problem is an [`ElevationError`]; the
/// profile builder absorbs those by substituting a synthetic profile.
pub trait ElevationSource {
    fn elevations(
        &self,
        locations: &[Point<f64>],
    ) -> impl Future<Output = Result<Vec<f64>, ElevationError>> + Send;
}
