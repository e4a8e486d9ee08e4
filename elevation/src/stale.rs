use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Tracks which elevation lookup is the most recent one.
///
/// The consuming application inspects a single link at a time, so a
/// newly requested lookup supersedes any lookup still in flight. No
/// request is aborted; a superseded lookup simply has its result
/// discarded when it eventually resolves, which keeps stale terrain
/// data from overwriting a newer selection.
#[derive(Clone, Debug, Default)]
pub struct Generations {
    current: Arc<AtomicU64>,
}

/// A token identifying one lookup registered with [`Generations`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new lookup generation, superseding all earlier ones.
    pub fn next(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns whether `generation` is still the latest.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.load(Ordering::SeqCst) == generation.0
    }
}
