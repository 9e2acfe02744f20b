use derive_more::Display;

/// Largest element count a single `Vector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension of a `TriMat`.
pub const MAX_MATRIX_SIZE: usize = 10_000;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    #[display("invalid size {size}, must be in 1..={max}")]
    InvalidSize { size: usize, max: usize },

    #[display("invalid start index {start}, window end {start} + {size} overflows")]
    InvalidStartIndex { start: usize, size: usize },

    #[display("index {index} out of range {lower}..{upper}")]
    IndexOutOfRange { index: usize, lower: usize, upper: usize },

    #[display("size mismatch, {lhs} vs {rhs}")]
    SizeMismatch { lhs: usize, rhs: usize },
}

impl std::error::Error for Error {}

pub(crate) fn check_size(size: usize, max: usize) -> Result<()> {
    if size == 0 || size > max {
        Err(Error::InvalidSize { size, max })
    } else {
        Ok(())
    }
}
