use thiserror::Error;

/// Errors raised while parsing user-supplied values into domain types.
///
/// The progress engine itself never fails; these only surface at the
/// boundary where strings become goals, logs and query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown goal type: {0}")]
    UnknownGoalType(String),

    #[error("Unknown goal status: {0}")]
    UnknownGoalStatus(String),

    #[error("Unknown chart bucket: {0} (expected daily or weekly)")]
    UnknownChartBucket(String),

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Invalid month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
}

pub type Result<T> = std::result::Result<T, Error>;
