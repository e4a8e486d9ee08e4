use crate::MEAN_EARTH_RADIUS;
use geo::{CoordFloat, Point};
use num_traits::FromPrimitive;

/// Returns the haversine distance, in meters, between `a` and `b`.
///
/// Symmetric in its arguments and zero for coincident points.
pub fn distance_m<T>(a: Point<T>, b: Point<T>) -> T
where
    T: CoordFloat + FromPrimitive,
{
    let two = T::one() + T::one();

    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lng = (b.x() - a.x()).to_radians();

    let h = (delta_lat / two).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / two).sin().powi(2);
    let central_angle = two * h.sqrt().atan2((T::one() - h).sqrt());

    T::from(MEAN_EARTH_RADIUS).unwrap() * central_angle
}
