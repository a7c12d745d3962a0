use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid size must be positive")]
    InvalidSize,

    #[error("trial count must be positive")]
    InvalidTrials,

    #[error("site ({row}, {col}) is outside the {n}x{n} grid")]
    OutOfBounds { row: usize, col: usize, n: usize },

    #[error("element {index} is out of range for {len} elements")]
    OutOfRange { index: usize, len: usize },

    #[error("deque is empty")]
    EmptyDeque,
}

pub type Result<T> = std::result::Result<T, Error>;
