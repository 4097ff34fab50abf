use thiserror::Error;

/// Errors raised by queries on a cell space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The query needs at least one live cell.
    #[error("pattern has no live cells")]
    EmptyPattern,
}
