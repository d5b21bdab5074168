use thiserror::Error;

/// Errors raised by the scheduling engine.
///
/// The first two are user errors scoped to a single response; the caller
/// reports them and lets the rest of the batch proceed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Row index outside the current review table.
    #[error("{0} is not an active row")]
    UnknownRow(usize),

    /// `Bury` only applies to cards that were due.
    #[error("can't bury new cards")]
    BuryNew,

    /// Record store failure underneath an engine operation.
    #[error(transparent)]
    Store(#[from] kartei_store::StoreError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
