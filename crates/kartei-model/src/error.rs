use thiserror::Error;

/// Errors raised while validating or parsing model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Deck or card name contains a path separator or is empty.
    #[error("illegal character '{character}' in '{name}'")]
    IllegalName { name: String, character: char },

    /// Name was empty after trimming.
    #[error("empty name")]
    EmptyName,

    /// Response token did not match any known grade or `<N>d` form.
    #[error("unrecognized response '{0}' (expected Hard, Good, Easy, Bury, Cycle, Suspend or e.g. 3d)")]
    UnknownResponse(String),

    /// Date string was not `YYYY-MM-DD`.
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
