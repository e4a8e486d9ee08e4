use crate::{FresnelError, FresnelZone};
use geo::{coord, LineString, Polygon};
use std::f64::consts::TAU;

/// Number of segments approximating the ellipse.
const SEGMENTS: usize = 50;

/// Meters per degree of latitude (and of longitude at the equator)
/// under the equirectangular approximation.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Highest center latitude, in degrees, at which the projection is
/// still accepted. Beyond it, meters-per-degree-of-longitude vanishes.
const MAX_CENTER_LAT_DEG: f64 = 89.5;

/// Converts `zone` into a closed polygon in geographic coordinates
/// for overlay rendering.
///
/// The ellipse has semi-major axis `width_m / 2` and semi-minor axis
/// `height_m / 2`, is rotated by `rotation_rad`, translated to the
/// zone center, and projected from planar meter offsets to lat/lng
/// with a flat-earth approximation. The exterior ring has 51 points;
/// the first is repeated, exactly, as the last.
///
/// Zones centered near a pole are rejected with
/// [`FresnelError::ProjectionSingularity`], zero-width zones with
/// [`FresnelError::InvalidPath`].
pub fn polygonize(zone: &FresnelZone) -> Result<Polygon<f64>, FresnelError> {
    let center_lat_deg = zone.center.y();
    if center_lat_deg.abs() > MAX_CENTER_LAT_DEG {
        return Err(FresnelError::ProjectionSingularity(center_lat_deg));
    }
    if zone.width_m <= 0.0 {
        return Err(FresnelError::InvalidPath);
    }

    let semi_major_m = zone.width_m / 2.0;
    let semi_minor_m = zone.height_m / 2.0;
    let (rot_sin, rot_cos) = zone.rotation_rad.sin_cos();
    let meters_per_degree_lng = METERS_PER_DEGREE * center_lat_deg.to_radians().cos();

    let mut exterior = Vec::with_capacity(SEGMENTS + 1);
    for n in 0..SEGMENTS {
        let theta = TAU * n as f64 / SEGMENTS as f64;
        let x_m = semi_major_m * theta.cos();
        let y_m = semi_minor_m * theta.sin();

        let rotated_x_m = x_m * rot_cos - y_m * rot_sin;
        let rotated_y_m = x_m * rot_sin + y_m * rot_cos;

        exterior.push(coord! {
            x: zone.center.x() + rotated_x_m / meters_per_degree_lng,
            y: zone.center.y() + rotated_y_m / METERS_PER_DEGREE,
        });
    }
    exterior.push(exterior[0]);

    Ok(Polygon::new(LineString::from(exterior), vec![]))
}
