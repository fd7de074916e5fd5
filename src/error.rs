#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// Node is not registered on the ring.
    #[error("Unknown node: {0}")]
    UnknownNode(String),
}

pub type RingResult<T> = Result<T, RingError>;
