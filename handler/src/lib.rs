mod config;
mod error;
mod handler;
mod payload;
mod stats;

pub use config::HandlerConfig;
pub use error::{HandlerError, HandlerResult};
pub use handler::{handle_impute, ImputeHandler};
pub use payload::{ImputeRequest, ImputeResponse};
pub use stats::HandlerStats;

/// Route the transport mounts [`ImputeHandler::handle`] behind (POST).
pub const IMPUTE_ROUTE: &str = "/blanketyblanks";
