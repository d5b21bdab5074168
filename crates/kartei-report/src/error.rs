use thiserror::Error;

/// Errors raised by the read-only projections.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Date argument was neither `YYYY-MM-DD` nor `<N>d`.
    #[error("invalid date '{0}' (expected YYYY-MM-DD or e.g. 3d)")]
    InvalidDate(String),

    /// The studied-on query only looks backwards.
    #[error("{0} is in the future")]
    FutureDate(chrono::NaiveDate),

    /// Record store failure underneath a projection.
    #[error(transparent)]
    Store(#[from] kartei_store::StoreError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
