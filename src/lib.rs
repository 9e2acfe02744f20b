//! Bounds-checked numeric containers: a window-offset vector and an
//! upper-triangular square matrix stored as shrinking row vectors.

mod base;
mod vector;
mod triang;

pub use base::{Error, Result, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use triang::TriMat;
pub use vector::Vector;
