use crate::{FresnelError, SPEED_OF_LIGHT_M_S};
use elevation::Profile;
use geo::{Coord, Point};
use geomath::{bearing_rad, distance_m};

/// Returns the wavelength, in meters, of a carrier at `freq_ghz`.
///
/// Frequencies that are not finite and positive are rejected rather
/// than propagated as Infinity/NaN.
pub fn wavelength_m(freq_ghz: f64) -> Result<f64, FresnelError> {
    if !freq_ghz.is_finite() || freq_ghz <= 0.0 {
        return Err(FresnelError::InvalidFrequency(freq_ghz));
    }
    Ok(SPEED_OF_LIGHT_M_S / (freq_ghz * 1e9))
}

/// Returns the first-Fresnel-zone radius, in meters, at a point
/// `d1_m` from one end of a path of length `d1_m + d2_m`.
///
/// The radius of a zero-length path is defined as 0 rather than the
/// 0/0 the formula would produce.
pub fn fresnel_radius_m(wavelength_m: f64, d1_m: f64, d2_m: f64) -> f64 {
    let total_m = d1_m + d2_m;
    if total_m <= 0.0 {
        return 0.0;
    }
    (wavelength_m * d1_m * d2_m / total_m).sqrt()
}

/// One point of a processed elevation profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationPoint {
    /// Distance from the first tower, in meters.
    pub distance_m: f64,

    /// Terrain elevation, in meters above the reference datum.
    pub elevation_m: f64,

    /// First-Fresnel-zone radius at this distance, in meters.
    pub fresnel_radius_m: f64,

    /// Vertical gap between the zone's lower boundary and the
    /// terrain; negative means the terrain intrudes into the zone.
    /// `None` until the zone builder has attached clearances.
    pub clearance_m: Option<f64>,
}

/// First-Fresnel-zone descriptor for a point-to-point link.
///
/// The sight line runs straight between the terrain elevations at the
/// two towers; antenna heights and earth-curvature bulge over long
/// paths are not modeled.
#[derive(Debug, Clone)]
pub struct FresnelZone {
    /// Arithmetic midpoint of the two towers (x = longitude,
    /// y = latitude). Not the geodesic midpoint.
    pub center: Point<f64>,

    /// Total path distance, in meters.
    pub width_m: f64,

    /// Maximum zone diameter, in meters (twice the midpoint radius).
    pub height_m: f64,

    /// Bearing from the first tower to the second, in radians.
    pub rotation_rad: f64,

    /// Processed profile, when one was supplied to the builder.
    pub profile: Option<Vec<ElevationPoint>>,
}

impl FresnelZone {
    pub fn builder() -> FresnelZoneBuilder {
        FresnelZoneBuilder {
            freq_ghz: None,
            start: None,
            end: None,
            profile: None,
        }
    }

    /// Returns whether any profile point's terrain intrudes into the
    /// zone. Zones built without a profile are never obstructed.
    pub fn is_obstructed(&self) -> bool {
        self.profile.as_deref().is_some_and(crate::is_obstructed)
    }
}

pub struct FresnelZoneBuilder {
    /// Link frequency in GHz (required).
    freq_ghz: Option<f64>,

    /// First tower of the link (required).
    start: Option<Coord<f64>>,

    /// Second tower of the link (required).
    end: Option<Coord<f64>>,

    /// Raw elevation profile to attach clearances to (optional).
    profile: Option<Profile>,
}

impl FresnelZoneBuilder {
    /// Link frequency in GHz (required).
    #[must_use]
    pub fn freq_ghz(mut self, freq_ghz: f64) -> Self {
        self.freq_ghz = Some(freq_ghz);
        self
    }

    /// First tower of the link (required).
    #[must_use]
    pub fn start(mut self, coord: Coord<f64>) -> Self {
        self.start = Some(coord);
        self
    }

    /// Second tower of the link (required).
    #[must_use]
    pub fn end(mut self, coord: Coord<f64>) -> Self {
        self.end = Some(coord);
        self
    }

    /// Raw elevation profile to attach clearances to (optional).
    #[must_use]
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn build(self) -> Result<FresnelZone, FresnelError> {
        let freq_ghz = self.freq_ghz.ok_or(FresnelError::Builder("freq_ghz"))?;
        let start = self.start.ok_or(FresnelError::Builder("start"))?;
        let end = self.end.ok_or(FresnelError::Builder("end"))?;

        let wavelen_m = wavelength_m(freq_ghz)?;
        let start_point = Point::from(start);
        let end_point = Point::from(end);

        let width_m = distance_m(start_point, end_point);
        // The radius curve of a symmetric split peaks at the midpoint.
        let height_m = 2.0 * fresnel_radius_m(wavelen_m, width_m / 2.0, width_m / 2.0);
        let center = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        let rotation_rad = bearing_rad(start_point, end_point);

        let profile = self
            .profile
            .as_ref()
            .map(|profile| attach_clearances(profile, wavelen_m, width_m));

        Ok(FresnelZone {
            center,
            width_m,
            height_m,
            rotation_rad,
            profile,
        })
    }
}

/// Reshapes a raw elevation profile into zone points carrying the
/// per-point radius and clearance. The input profile is left
/// untouched.
fn attach_clearances(
    profile: &Profile,
    wavelen_m: f64,
    total_distance_m: f64,
) -> Vec<ElevationPoint> {
    let start_elev_m = profile.points.first().map_or(0.0, |point| point.elevation_m);
    let end_elev_m = profile.points.last().map_or(0.0, |point| point.elevation_m);

    profile
        .points
        .iter()
        .map(|point| {
            let d1_m = point.distance_m;
            let d2_m = total_distance_m - d1_m;
            let fresnel_radius_m = fresnel_radius_m(wavelen_m, d1_m, d2_m);

            let fraction = if total_distance_m > 0.0 {
                d1_m / total_distance_m
            } else {
                0.0
            };
            let los_elev_m = start_elev_m + (end_elev_m - start_elev_m) * fraction;
            let clearance_m = los_elev_m - point.elevation_m - fresnel_radius_m;

            ElevationPoint {
                distance_m: d1_m,
                elevation_m: point.elevation_m,
                fresnel_radius_m,
                clearance_m: Some(clearance_m),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{fresnel_radius_m, wavelength_m, FresnelZone};
    use crate::FresnelError;
    use approx::assert_relative_eq;
    use elevation::{Profile, ProfilePoint, Provenance};
    use geo::{coord, point};
    use std::f64::consts::FRAC_PI_2;

    fn profile_from(distance_m: f64, elevations_m: &[f64]) -> Profile {
        let segments = (elevations_m.len() - 1) as f64;
        let points = elevations_m
            .iter()
            .enumerate()
            .map(|(n, &elevation_m)| ProfilePoint {
                location: point!(x: 0.0, y: 0.0),
                distance_m: distance_m * n as f64 / segments,
                elevation_m,
            })
            .collect();
        Profile {
            distance_m,
            points,
            provenance: Provenance::Measured,
        }
    }

    #[test]
    fn test_wavelength_of_5_ghz() {
        assert_relative_eq!(wavelength_m(5.0).unwrap(), 0.06);
    }

    #[test]
    fn test_nonpositive_frequency_is_rejected() {
        assert!(matches!(
            wavelength_m(0.0),
            Err(FresnelError::InvalidFrequency(_))
        ));
        assert!(matches!(
            wavelength_m(-2.4),
            Err(FresnelError::InvalidFrequency(_))
        ));
        assert!(matches!(
            wavelength_m(f64::NAN),
            Err(FresnelError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn test_radius_peaks_at_symmetric_midpoint() {
        let wavelength = 0.06;
        let half = 5_000.0;
        assert_relative_eq!(
            fresnel_radius_m(wavelength, half, half),
            (wavelength * half / 2.0).sqrt()
        );
    }

    #[test]
    fn test_radius_is_zero_at_either_tower() {
        assert_eq!(fresnel_radius_m(0.06, 0.0, 10_000.0), 0.0);
        assert_eq!(fresnel_radius_m(0.06, 10_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_radius_of_zero_length_path_is_zero() {
        assert_eq!(fresnel_radius_m(0.06, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_builder_requires_frequency() {
        let result = FresnelZone::builder()
            .start(coord! { x: 0.0, y: 0.0 })
            .end(coord! { x: 0.1, y: 0.0 })
            .build();
        assert!(matches!(result, Err(FresnelError::Builder("freq_ghz"))));
    }

    #[test]
    fn test_zone_of_coincident_towers_is_degenerate() {
        let tower = coord! { x: 8.54, y: 47.37 };
        let zone = FresnelZone::builder()
            .freq_ghz(5.0)
            .start(tower)
            .end(tower)
            .build()
            .unwrap();
        assert_eq!(zone.width_m, 0.0);
        assert_eq!(zone.height_m, 0.0);
        assert_eq!(zone.rotation_rad, 0.0);
    }

    #[test]
    fn test_known_equatorial_link() {
        let zone = FresnelZone::builder()
            .freq_ghz(5.0)
            .start(coord! { x: 0.0, y: 0.0 })
            .end(coord! { x: 0.1, y: 0.0 })
            .build()
            .unwrap();

        assert_relative_eq!(zone.width_m, 11_119.49, epsilon = 1e-1);
        assert_relative_eq!(zone.height_m / 2.0, 12.91, epsilon = 1e-2);
        assert_relative_eq!(zone.center.x(), 0.05);
        assert_relative_eq!(zone.center.y(), 0.0);
        assert_relative_eq!(zone.rotation_rad, FRAC_PI_2);
        assert!(zone.profile.is_none());
    }

    #[test]
    fn test_clearance_follows_sight_line() {
        let start = coord! { x: 0.0, y: 0.0 };
        let end = coord! { x: 0.09, y: 0.0 };
        let distance_m = geomath::distance_m(start.into(), end.into());
        let zone = FresnelZone::builder()
            .freq_ghz(5.0)
            .start(start)
            .end(end)
            .profile(profile_from(distance_m, &[100.0, 160.0, 200.0]))
            .build()
            .unwrap();

        let points = zone.profile.as_deref().unwrap();
        assert_eq!(points.len(), 3);
        assert_relative_eq!(zone.width_m, distance_m);

        // Sight line rises linearly from 100 m to 200 m, so it passes
        // 150 m at the path midpoint.
        let mid = &points[1];
        let expected_radius = fresnel_radius_m(0.06, mid.distance_m, zone.width_m - mid.distance_m);
        assert_relative_eq!(mid.fresnel_radius_m, expected_radius);
        assert_relative_eq!(
            mid.clearance_m.unwrap(),
            150.0 - 160.0 - expected_radius,
            epsilon = 1e-6
        );

        // Tower points sit on the sight line with zero radius.
        assert_relative_eq!(points[0].clearance_m.unwrap(), 0.0);
        assert_relative_eq!(points[2].clearance_m.unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_input_profile_is_not_mutated() {
        let raw = profile_from(10_000.0, &[100.0, 130.0, 100.0]);
        let zone = FresnelZone::builder()
            .freq_ghz(5.0)
            .start(coord! { x: 0.0, y: 0.0 })
            .end(coord! { x: 0.09, y: 0.0 })
            .profile(raw.clone())
            .build()
            .unwrap();

        let points = zone.profile.as_deref().unwrap();
        for (zone_point, raw_point) in points.iter().zip(&raw.points) {
            assert_eq!(zone_point.elevation_m, raw_point.elevation_m);
            assert!(zone_point.clearance_m.is_some());
        }
    }
}
