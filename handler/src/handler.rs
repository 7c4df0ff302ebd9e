use tracing::{field, trace_span};

use gapfill_engine::impute_batch;

use crate::config::HandlerConfig;
use crate::error::{HandlerError, HandlerResult};
use crate::payload::{ImputeRequest, ImputeResponse};
use crate::stats::HandlerStats;

/// Stateful boundary around the engine: holds the limits and the
/// counters shared by every request it serves.
#[derive(Debug, Default)]
pub struct ImputeHandler {
    config: HandlerConfig,
    stats: HandlerStats,
}

impl ImputeHandler {
    pub fn new(config: HandlerConfig) -> Self {
        Self {
            config,
            stats: HandlerStats::default(),
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn stats(&self) -> &HandlerStats {
        &self.stats
    }

    /// Validates and fills one batch.
    ///
    /// A validation failure returns a client error and leaves the
    /// engine untouched. On success the response holds one filled
    /// series per input series, in input order.
    pub fn handle(&self, request: &ImputeRequest) -> HandlerResult<ImputeResponse> {
        self.validate(request)?;

        let span = trace_span!(
            "impute",
            series = request.series.len(),
            points = request.sample_count(),
            filled = field::Empty,
        )
        .entered();

        let missing_before: usize = request.series.iter().map(|s| s.missing_count()).sum();

        let answer = impute_batch(&request.series);

        let missing_after: usize = answer.iter().map(|s| s.missing_count()).sum();
        let filled = missing_before - missing_after;
        span.record("filled", filled);

        self.stats.record(answer.len() as u64, filled as u64);

        Ok(ImputeResponse { answer })
    }

    fn validate(&self, request: &ImputeRequest) -> HandlerResult<()> {
        if let Some(limit) = self.config.max_batch_len {
            if request.series.len() > limit {
                return Err(HandlerError::BatchTooLarge {
                    given: request.series.len(),
                    limit,
                });
            }
        }

        for (index, series) in request.series.iter().enumerate() {
            if let Some(limit) = self.config.max_series_len {
                if series.len() > limit {
                    return Err(HandlerError::SeriesTooLong {
                        index,
                        given: series.len(),
                        limit,
                    });
                }
            }

            if self.config.require_finite {
                let bad = series
                    .samples
                    .iter()
                    .position(|s| s.value().is_some_and(|v| !v.is_finite()));
                if let Some(pos) = bad {
                    return Err(HandlerError::invalid_payload(format!(
                        "series {index} has a non-finite value at position {pos}"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// One-shot convenience over [`ImputeHandler`] with the default config.
pub fn handle_impute(request: &ImputeRequest) -> HandlerResult<ImputeResponse> {
    ImputeHandler::default().handle(request)
}
