use crate::ElevationPoint;

/// Returns whether any point of `profile` has negative clearance.
///
/// Points whose clearance has not been computed never count as
/// obstructed.
pub fn is_obstructed(profile: &[ElevationPoint]) -> bool {
    profile
        .iter()
        .any(|point| point.clearance_m.is_some_and(|clearance| clearance < 0.0))
}

/// Returns the smallest clearance in `profile`, or `None` when no
/// point has a computed clearance.
pub fn min_clearance_m(profile: &[ElevationPoint]) -> Option<f64> {
    profile
        .iter()
        .filter_map(|point| point.clearance_m)
        .reduce(f64::min)
}
