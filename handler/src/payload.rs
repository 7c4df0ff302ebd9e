use serde::{Deserialize, Serialize};

use gapfill_engine::Series;

/// Body of an imputation request: the batch of series to fill.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImputeRequest {
    pub series: Vec<Series>,
}

impl ImputeRequest {
    pub fn new(series: Vec<Series>) -> Self {
        ImputeRequest { series }
    }

    /// Total number of samples across the batch.
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(|s| s.len()).sum()
    }
}

/// Body of a successful response.
///
/// `answer` holds one filled series per input series, in input order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImputeResponse {
    pub answer: Vec<Series>,
}
