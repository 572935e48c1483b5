use std::time::{Duration, Instant};

use tracing::debug;

/// Times one shortest-path run.
pub(crate) struct Stopwatch {
    start_time: Instant,
    algorithm: &'static str,
}

impl Stopwatch {
    pub fn start(algorithm: &'static str) -> Self {
        Self {
            start_time: Instant::now(),
            algorithm,
        }
    }

    /// Logs and returns the time elapsed since the start.
    pub fn stop(self) -> Duration {
        let elapsed = self.start_time.elapsed();
        debug!(algorithm = self.algorithm, ?elapsed, "run finished");
        elapsed
    }
}
