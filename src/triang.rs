use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::zip_eq;
use log::trace;
use num_traits::Zero;

use crate::base::{check_size, Error, Result, MAX_MATRIX_SIZE};
use crate::vector::Vector;

/// Upper-triangular square matrix. Row `i` is stored as a [`Vector`] of
/// `size - i` elements with window start `i`, so only columns `i ..= size - 1`
/// are representable and below-diagonal access fails the row's own bounds
/// check. The row shape is fixed at construction and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriMat<R> {
    rows: Vec<Vector<R>>,
}

impl<R> TriMat<R> {
    pub fn zero(size: usize) -> Result<Self>
    where R: Zero {
        check_size(size, MAX_MATRIX_SIZE)?;
        let rows = (0..size)
            .map(|i| Vector::with_start(size - i, i))
            .collect::<Result<_>>()?;
        Ok(Self { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, i: usize) -> Result<&Vector<R>> {
        let n = self.rows.len();
        self.rows
            .get(i)
            .ok_or(Error::IndexOutOfRange { index: i, lower: 0, upper: n })
    }

    pub fn row_mut(&mut self, i: usize) -> Result<&mut Vector<R>> {
        let n = self.rows.len();
        self.rows
            .get_mut(i)
            .ok_or(Error::IndexOutOfRange { index: i, lower: 0, upper: n })
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&R> {
        self.row(i)?.get(j)
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut R> {
        self.row_mut(i)?.get_mut(j)
    }

    pub fn set(&mut self, i: usize, j: usize, value: R) -> Result<()> {
        self.row_mut(i)?.set(j, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |(j, a)| (i, j, a)))
    }

    fn compat(&self, rhs: &Self) -> Result<()> {
        if self.size() == rhs.size() {
            Ok(())
        } else {
            trace!("rejecting matrix op, dims {} vs {}", self.size(), rhs.size());
            Err(Error::SizeMismatch { lhs: self.size(), rhs: rhs.size() })
        }
    }

    /// Elementwise sum, delegated row by row to [`Vector::checked_add`].
    pub fn checked_add(&self, rhs: &Self) -> Result<Self>
    where R: Clone + for<'r> AddAssign<&'r R> {
        self.compat(rhs)?;
        let rows = zip_eq(self.rows.iter(), rhs.rows.iter())
            .map(|(a, b)| a.checked_add(b))
            .collect::<Result<_>>()?;
        Ok(Self { rows })
    }

    /// Elementwise difference, delegated row by row to [`Vector::checked_sub`].
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self>
    where R: Clone + for<'r> SubAssign<&'r R> {
        self.compat(rhs)?;
        let rows = zip_eq(self.rows.iter(), rhs.rows.iter())
            .map(|(a, b)| a.checked_sub(b))
            .collect::<Result<_>>()?;
        Ok(Self { rows })
    }
}

impl<R> Index<usize> for TriMat<R> {
    type Output = Vector<R>;
    delegate! {
        to self.rows {
            fn index(&self, i: usize) -> &Vector<R>;
        }
    }
}

impl<R> IndexMut<usize> for TriMat<R> {
    delegate! {
        to self.rows {
            fn index_mut(&mut self, i: usize) -> &mut Self::Output;
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        #[auto_ops]
        impl<'a, 'b, R> $trait<&'b TriMat<R>> for &'a TriMat<R>
        where R: Clone + for<'r> AddAssign<&'r R> + for<'r> SubAssign<&'r R> {
            type Output = TriMat<R>;
            fn $method(self, rhs: &'b TriMat<R>) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(res) => res,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

impl_binop!(Add, add, checked_add);
impl_binop!(Sub, sub, checked_sub);

impl<R> Display for TriMat<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}{}", "  ".repeat(row.start()), row)?;
        }
        Ok(())
    }
}
