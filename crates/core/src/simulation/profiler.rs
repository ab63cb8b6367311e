/// Tick timing helpers.
///
/// Provides an RAII-style scope that reports its duration to `tracing` and a
/// holder for the last tick time.
use std::time::Instant;
use tracing::trace;

/// A profiling scope that measures elapsed time using RAII.
///
/// Emits a `trace` event with the elapsed time when dropped.
pub struct ProfilerScope {
    start: Instant,
    name: &'static str,
}

impl ProfilerScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Gets elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ProfilerScope {
    fn drop(&mut self) {
        trace!(scope = self.name, elapsed_ms = self.elapsed_ms(), "scope finished");
    }
}

/// Last recorded tick duration
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    last_frame_time_ms: f64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records frame time in milliseconds.
    pub fn record(&mut self, time_ms: f64) {
        self.last_frame_time_ms = time_ms;
    }

    pub fn last_frame_time_ms(&self) -> f64 {
        self.last_frame_time_ms
    }
}
