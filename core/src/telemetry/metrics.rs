use std::sync::Mutex;

/// Run counters accumulated across waveform builds.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    samples_built: usize,
    bytes_written: usize,
    failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                samples_built: 0,
                bytes_written: 0,
                failures: 0,
            }),
        }
    }

    pub fn record_samples(&self, count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.samples_built += count;
        }
    }

    pub fn record_bytes(&self, count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.bytes_written += count;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    /// Returns `(samples_built, bytes_written, failures)`.
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (
                metrics.samples_built,
                metrics.bytes_written,
                metrics.failures,
            )
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
