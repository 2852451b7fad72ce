use thiserror::Error;

use crate::route::RouteId;

/// Errors raised by catalog lookups and configuration checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuardianError {
    #[error("unknown route: {0}")]
    UnknownRoute(RouteId),

    #[error("unknown hazard id: {0}")]
    UnknownHazard(u32),

    #[error("invalid demo config: {0}")]
    InvalidConfig(String),
}
