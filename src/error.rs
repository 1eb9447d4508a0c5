use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by the cyclic types.
///
/// Every fallible operation either completes and keeps its receiver normalized, or fails with one
/// of these before touching any observable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error("left bound {left} must be less than right bound {right}")]
    InvalidInterval { left: i128, right: i128 },
    #[error("a wrapping integer only accepts plain integers as operand")]
    InvalidOperand,
    #[error("value cannot be interpreted as an integer index")]
    InvalidIndexType,
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: i128, len: usize },
    #[error("pop from empty list")]
    EmptyContainer,
    #[error("range {start}..{end} out of range for list of length {len}")]
    SliceOutOfRange { start: usize, end: usize, len: usize },
    #[error("key is used by more than one variant")]
    DuplicateKey,
    #[error("key does not name any variant")]
    UnknownKey,
}
