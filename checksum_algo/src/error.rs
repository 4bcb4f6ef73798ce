use thiserror::Error;

/// Returned when a name does not match any supported algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {name:?}")]
pub struct UnknownAlgorithm {
    pub name: String,
}
