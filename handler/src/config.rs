/// Boundary limits applied before any series reaches the engine.
///
/// Size limits are off by default. `require_finite` is on by default:
/// JSON cannot carry NaN or infinities, but programmatic callers can,
/// and such values must not become interpolation anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlerConfig {
    /// Maximum number of series accepted in one request.
    pub max_batch_len: Option<usize>,
    /// Maximum number of samples accepted per series.
    pub max_series_len: Option<usize>,
    /// Reject sample values that are NaN or infinite.
    pub require_finite: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            max_batch_len: None,
            max_series_len: None,
            require_finite: true,
        }
    }
}
