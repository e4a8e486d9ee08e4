use geo::{CoordFloat, Point};

/// Returns the initial bearing, in radians, of the great-circle route
/// from `a` to `b`.
///
/// The bearing is measured from north via `atan2` and falls in
/// (−π, π]. Coincident points have no defined bearing; this function
/// returns exactly 0 in that case.
pub fn bearing_rad<T>(a: Point<T>, b: Point<T>) -> T
where
    T: CoordFloat,
{
    if a == b {
        return T::zero();
    }

    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let delta_lng = (b.x() - a.x()).to_radians();

    let y = delta_lng.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * delta_lng.cos();

    y.atan2(x)
}

#[cfg(test)]
mod tests {
    use super::bearing_rad;
    use approx::assert_relative_eq;
    use geo::point;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_cardinal_bearings_at_equator() {
        let origin = point!(x: 0.0, y: 0.0);
        assert_relative_eq!(bearing_rad(origin, point!(x: 0.0, y: 1.0)), 0.0);
        assert_relative_eq!(bearing_rad(origin, point!(x: 1.0, y: 0.0)), FRAC_PI_2);
        assert_relative_eq!(bearing_rad(origin, point!(x: 0.0, y: -1.0)), PI);
        assert_relative_eq!(bearing_rad(origin, point!(x: -1.0, y: 0.0)), -FRAC_PI_2);
    }

    #[test]
    fn test_coincident_points_bear_zero() {
        let a = point!(x: -71.3083, y: 44.2831);
        assert_eq!(bearing_rad(a, a), 0.0);
    }

    #[test]
    fn test_bearing_stays_in_range() {
        let a = point!(x: 12.5, y: 41.9);
        for (x, y) in [(151.2, -33.9), (-122.4, 37.8), (18.4, -33.9), (139.7, 35.7)] {
            let bearing = bearing_rad(a, point!(x: x, y: y));
            assert!(bearing > -PI && bearing <= PI);
        }
    }
}
