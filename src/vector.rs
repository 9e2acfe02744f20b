use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Range, Sub, SubAssign};

use auto_impl_ops::auto_ops;
use itertools::{zip_eq, Itertools};
use log::trace;
use num_traits::Zero;

use crate::base::{check_size, Error, Result, MAX_VECTOR_SIZE};

/// A fixed-size vector addressable through the window `start .. start + size`.
///
/// The window offset exists for `TriMat`, which stores row `i` as a vector
/// addressable from column `i` upward. Indices below `start` are out of range,
/// same as indices past the window end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector<R> {
    start: usize,
    data: Vec<R>,
}

impl<R> Vector<R> {
    fn validate(size: usize, start: usize) -> Result<()> {
        check_size(size, MAX_VECTOR_SIZE)?;
        if start.checked_add(size).is_none() {
            return Err(Error::InvalidStartIndex { start, size });
        }
        Ok(())
    }

    pub fn zero(size: usize) -> Result<Self>
    where R: Zero {
        Self::with_start(size, 0)
    }

    pub fn with_start(size: usize, start: usize) -> Result<Self>
    where R: Zero {
        Self::validate(size, start)?;
        let data = (0..size).map(|_| R::zero()).collect();
        Ok(Self { start, data })
    }

    pub fn from_vec(data: Vec<R>) -> Result<Self> {
        Self::from_vec_with_start(data, 0)
    }

    pub fn from_vec_with_start(data: Vec<R>, start: usize) -> Result<Self> {
        Self::validate(data.len(), start)?;
        Ok(Self { start, data })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn window(&self) -> Range<usize> {
        self.start..self.start + self.size()
    }

    pub fn in_range(&self, i: usize) -> bool {
        self.window().contains(&i)
    }

    fn offset(&self, i: usize) -> Result<usize> {
        if self.in_range(i) {
            Ok(i - self.start)
        } else {
            let Range { start, end } = self.window();
            Err(Error::IndexOutOfRange { index: i, lower: start, upper: end })
        }
    }

    pub fn get(&self, i: usize) -> Result<&R> {
        let k = self.offset(i)?;
        Ok(&self.data[k])
    }

    pub fn get_mut(&mut self, i: usize) -> Result<&mut R> {
        let k = self.offset(i)?;
        Ok(&mut self.data[k])
    }

    pub fn set(&mut self, i: usize, value: R) -> Result<()> {
        *self.get_mut(i)? = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &R)> {
        let start = self.start;
        self.data.iter().enumerate().map(move |(k, a)| (start + k, a))
    }

    fn compat(&self, rhs: &Self) -> Result<()> {
        if self.size() == rhs.size() {
            Ok(())
        } else {
            trace!("rejecting vector op, sizes {} vs {}", self.size(), rhs.size());
            Err(Error::SizeMismatch { lhs: self.size(), rhs: rhs.size() })
        }
    }

    /// Elementwise sum. Elements pair by position within each window; the
    /// start offsets themselves are not compared. The result keeps `self`'s
    /// window.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self>
    where R: Clone + for<'r> AddAssign<&'r R> {
        self.compat(rhs)?;
        let mut res = self.clone();
        for (a, b) in zip_eq(res.data.iter_mut(), rhs.data.iter()) {
            *a += b;
        }
        Ok(res)
    }

    /// Elementwise difference, same pairing rule as [`Self::checked_add`].
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self>
    where R: Clone + for<'r> SubAssign<&'r R> {
        self.compat(rhs)?;
        let mut res = self.clone();
        for (a, b) in zip_eq(res.data.iter_mut(), rhs.data.iter()) {
            *a -= b;
        }
        Ok(res)
    }

    /// Scalar dot product, pairing by position.
    pub fn dot(&self, rhs: &Self) -> Result<R>
    where R: Clone + Zero + Mul<Output = R> {
        self.compat(rhs)?;
        let sum = zip_eq(self.data.iter(), rhs.data.iter())
            .map(|(a, b)| a.clone() * b.clone())
            .fold(R::zero(), |acc, x| acc + x);
        Ok(sum)
    }
}

impl<R> Index<usize> for Vector<R> {
    type Output = R;
    fn index(&self, i: usize) -> &R {
        match self.get(i) {
            Ok(a) => a,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R> IndexMut<usize> for Vector<R> {
    fn index_mut(&mut self, i: usize) -> &mut R {
        match self.get_mut(i) {
            Ok(a) => a,
            Err(e) => panic!("{e}"),
        }
    }
}

#[auto_ops]
impl<R> AddAssign<&R> for Vector<R>
where R: Clone + for<'r> AddAssign<&'r R> {
    fn add_assign(&mut self, rhs: &R) {
        for a in self.data.iter_mut() {
            *a += rhs;
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&R> for Vector<R>
where R: Clone + for<'r> SubAssign<&'r R> {
    fn sub_assign(&mut self, rhs: &R) {
        for a in self.data.iter_mut() {
            *a -= rhs;
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Vector<R>
where R: Clone + for<'r> MulAssign<&'r R> {
    fn mul_assign(&mut self, rhs: &R) {
        for a in self.data.iter_mut() {
            *a *= rhs;
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        #[auto_ops]
        impl<'a, 'b, R> $trait<&'b Vector<R>> for &'a Vector<R>
        where R: Clone + for<'r> AddAssign<&'r R> + for<'r> SubAssign<&'r R> {
            type Output = Vector<R>;
            fn $method(self, rhs: &'b Vector<R>) -> Self::Output {
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

// Vector * Vector is the dot product.
#[auto_ops(ref_ref, ref_val, val_ref, val_val)]
impl<'a, 'b, R> Mul<&'b Vector<R>> for &'a Vector<R>
where R: Clone + Zero + Mul<Output = R> {
    type Output = R;
    fn mul(self, rhs: &'b Vector<R>) -> Self::Output {
        match self.dot(rhs) {
            Ok(res) => res,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R> Display for Vector<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}
