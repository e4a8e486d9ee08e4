use rand::Rng;

/// Lower bound, in meters, of the synthetic elevation band.
pub const SYNTHETIC_MIN_M: f64 = 100.0;

/// Upper bound (exclusive), in meters, of the synthetic elevation band.
pub const SYNTHETIC_MAX_M: f64 = 150.0;

/// Returns `len` placeholder elevations drawn uniformly from the
/// synthetic band.
///
/// Synthetic values carry no geographic truth; they only keep the
/// downstream pipeline exercisable when no real readings are
/// available. Profiles built from them are tagged
/// [`Provenance::Synthetic`](crate::Provenance::Synthetic).
pub(crate) fn synthetic_elevations(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| rng.gen_range(SYNTHETIC_MIN_M..SYNTHETIC_MAX_M))
        .collect()
}
