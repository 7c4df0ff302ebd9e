use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals for one handler instance.
///
/// Counters only grow and may be read from any thread. Rejected
/// requests are not counted.
#[derive(Debug, Default)]
pub struct HandlerStats {
    requests: AtomicU64,
    series_filled: AtomicU64,
    samples_imputed: AtomicU64,
}

impl HandlerStats {
    pub(crate) fn record(&self, series: u64, samples_imputed: u64) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.series_filled.fetch_add(series, Ordering::Relaxed);
        self.samples_imputed
            .fetch_add(samples_imputed, Ordering::Relaxed);
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn series_filled(&self) -> u64 {
        self.series_filled.load(Ordering::Relaxed)
    }

    pub fn samples_imputed(&self) -> u64 {
        self.samples_imputed.load(Ordering::Relaxed)
    }
}
