//! Pick the fastest of several closures.

use std::time::{Duration, Instant};

use tracing::debug;

/// Index of the closure with the lowest total wall time over `iterations`
/// runs each. Ties go to the earlier closure; an empty slice gives `None`.
pub fn most_performant(fns: &mut [&mut dyn FnMut()], iterations: usize) -> Option<usize> {
    let timings: Vec<Duration> = fns
        .iter_mut()
        .map(|f| {
            let before = Instant::now();
            for _ in 0..iterations {
                f();
            }
            before.elapsed()
        })
        .collect();
    let fastest = timings
        .iter()
        .enumerate()
        .min_by_key(|(_, elapsed)| **elapsed)
        .map(|(index, _)| index);
    debug!(?timings, ?fastest, iterations, "most_performant");
    fastest
}
