//! Implementations of `std::ops`.
//!
//! The checked methods on [`SquareMatrix`] report contract violations as
//! [`Error`] values; the operators below delegate to them and panic instead,
//! the same way slice indexing does. Binary operators accept owned and
//! borrowed operands in any combination.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::{Error, Number, Result, SquareMatrix};

#[track_caller]
fn ok_or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        ok_or_panic(self.at(row, col))
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        ok_or_panic(self.at_mut(row, col))
    }
}

/// Matrices compare by the sum of their cells, and by nothing else.
///
/// Two matrices are equal iff their cell sums are equal, *even when their
/// sizes differ*; the relational operators compare the same sums. This is a
/// deliberate property of the type, not an approximation of cell-wise
/// equality: distinct matrices, including matrices of different shapes, can
/// compare equal.
///
/// ```
/// # use sqmat::*;
/// let a = SquareMat::from_diagonal(&[1.0, 2.0])?; // size 2, sum 3
/// let mut b = SquareMat::new(3)?; // size 3
/// b[(2, 0)] = 3.0; // sum 3
/// assert_eq!(a, b);
/// # Ok::<_, sqmat::Error>(())
/// ```
impl<T: Number> PartialEq for SquareMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cell_sum() == other.cell_sum()
    }
}

/// Matrices are ordered by the sum of their cells; see the [`PartialEq`]
/// impl.
impl<T: Number> PartialOrd for SquareMatrix<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cell_sum().partial_cmp(&other.cell_sum())
    }
}

/// Cell-wise negation.
impl<T: Number> Neg for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn neg(self) -> SquareMatrix<T> {
        self.map(|c| -c)
    }
}

/// Cell-wise negation.
impl<T: Number> Neg for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn neg(self) -> SquareMatrix<T> {
        -&self
    }
}

/// Cell-wise addition.
///
/// # Panics
///
/// Panics when the operand sizes differ. [`SquareMatrix::checked_add`]
/// reports [`Error::SizeMismatch`] instead.
impl<T: Number> Add for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn add(self, rhs: Self) -> SquareMatrix<T> {
        ok_or_panic(self.checked_add(rhs))
    }
}

/// Cell-wise subtraction.
///
/// # Panics
///
/// Panics when the operand sizes differ. [`SquareMatrix::checked_sub`]
/// reports [`Error::SizeMismatch`] instead.
impl<T: Number> Sub for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn sub(self, rhs: Self) -> SquareMatrix<T> {
        ok_or_panic(self.checked_sub(rhs))
    }
}

/// Matrix * matrix multiplication.
///
/// # Panics
///
/// Panics when the operand sizes differ. [`SquareMatrix::checked_mul`]
/// reports [`Error::SizeMismatch`] instead.
impl<T: Number> Mul for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: Self) -> SquareMatrix<T> {
        ok_or_panic(self.checked_mul(rhs))
    }
}

macro_rules! forward_owned_binop {
    ($(impl $imp:ident, $method:ident;)+) => {
        $(
            impl<T: Number> $imp<SquareMatrix<T>> for SquareMatrix<T> {
                type Output = SquareMatrix<T>;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
                    $imp::$method(&self, &rhs)
                }
            }

            impl<T: Number> $imp<&SquareMatrix<T>> for SquareMatrix<T> {
                type Output = SquareMatrix<T>;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: &SquareMatrix<T>) -> SquareMatrix<T> {
                    $imp::$method(&self, rhs)
                }
            }

            impl<T: Number> $imp<SquareMatrix<T>> for &SquareMatrix<T> {
                type Output = SquareMatrix<T>;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: SquareMatrix<T>) -> SquareMatrix<T> {
                    $imp::$method(self, &rhs)
                }
            }
        )+
    };
}
forward_owned_binop! {
    impl Add, add;
    impl Sub, sub;
    impl Mul, mul;
}

/// Matrix * scalar multiplication (cell-wise).
impl<T: Number> Mul<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: T) -> SquareMatrix<T> {
        self.scale(rhs)
    }
}

/// Matrix * scalar multiplication (cell-wise).
impl<T: Number> Mul<T> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: T) -> SquareMatrix<T> {
        self.scale(rhs)
    }
}

// Scalar * matrix with the scalar on the left cannot be implemented for a
// generic cell type, so it is provided for the concrete float types.
macro_rules! scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            /// Scalar * matrix multiplication; identical to matrix * scalar.
            impl Mul<&SquareMatrix<$scalar>> for $scalar {
                type Output = SquareMatrix<$scalar>;

                fn mul(self, rhs: &SquareMatrix<$scalar>) -> SquareMatrix<$scalar> {
                    rhs.scale(self)
                }
            }

            /// Scalar * matrix multiplication; identical to matrix * scalar.
            impl Mul<SquareMatrix<$scalar>> for $scalar {
                type Output = SquareMatrix<$scalar>;

                fn mul(self, rhs: SquareMatrix<$scalar>) -> SquareMatrix<$scalar> {
                    rhs.scale(self)
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);

/// Cell-wise division by a scalar.
///
/// # Panics
///
/// Panics when `rhs` is exactly zero. [`SquareMatrix::checked_div`] reports
/// [`Error::DivisionByZero`] instead.
impl<T: Number> Div<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    #[track_caller]
    fn div(self, rhs: T) -> SquareMatrix<T> {
        ok_or_panic(self.checked_div(rhs))
    }
}

/// Cell-wise division by a scalar.
///
/// # Panics
///
/// Panics when `rhs` is exactly zero.
impl<T: Number> Div<T> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    #[track_caller]
    fn div(self, rhs: T) -> SquareMatrix<T> {
        ok_or_panic(self.checked_div(rhs))
    }
}

/// Cell-wise remainder by a scalar; see [`SquareMatrix::elementwise_rem`].
impl<T: Number> Rem<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn rem(self, rhs: T) -> SquareMatrix<T> {
        self.elementwise_rem(rhs)
    }
}

/// Cell-wise remainder by a scalar; see [`SquareMatrix::elementwise_rem`].
impl<T: Number> Rem<T> for SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn rem(self, rhs: T) -> SquareMatrix<T> {
        self.elementwise_rem(rhs)
    }
}

/// Cell-wise addition; replaces `self` with the sum.
///
/// # Panics
///
/// Panics when the operand sizes differ; `self` is left unchanged in that
/// case.
impl<T: Number> AddAssign<&SquareMatrix<T>> for SquareMatrix<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: &SquareMatrix<T>) {
        *self = ok_or_panic(self.checked_add(rhs));
    }
}

impl<T: Number> AddAssign<SquareMatrix<T>> for SquareMatrix<T> {
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, rhs: SquareMatrix<T>) {
        *self += &rhs;
    }
}

/// Cell-wise subtraction; replaces `self` with the difference.
///
/// # Panics
///
/// Panics when the operand sizes differ; `self` is left unchanged in that
/// case.
impl<T: Number> SubAssign<&SquareMatrix<T>> for SquareMatrix<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &SquareMatrix<T>) {
        *self = ok_or_panic(self.checked_sub(rhs));
    }
}

impl<T: Number> SubAssign<SquareMatrix<T>> for SquareMatrix<T> {
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, rhs: SquareMatrix<T>) {
        *self -= &rhs;
    }
}

/// Matrix multiplication; replaces `self` with the product.
///
/// # Panics
///
/// Panics when the operand sizes differ; `self` is left unchanged in that
/// case.
impl<T: Number> MulAssign<&SquareMatrix<T>> for SquareMatrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: &SquareMatrix<T>) {
        *self = ok_or_panic(self.checked_mul(rhs));
    }
}

impl<T: Number> MulAssign<SquareMatrix<T>> for SquareMatrix<T> {
    #[inline]
    #[track_caller]
    fn mul_assign(&mut self, rhs: SquareMatrix<T>) {
        *self *= &rhs;
    }
}

/// Cell-wise multiplication by a scalar, in place.
impl<T: Number> MulAssign<T> for SquareMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for cell in &mut self.cells {
            *cell = *cell * rhs;
        }
    }
}

/// Cell-wise division by a scalar, in place.
///
/// # Panics
///
/// Panics when `rhs` is exactly zero; `self` is left unchanged in that case.
impl<T: Number> DivAssign<T> for SquareMatrix<T> {
    #[track_caller]
    fn div_assign(&mut self, rhs: T) {
        if rhs == T::ZERO {
            panic!("{}", Error::DivisionByZero);
        }
        for cell in &mut self.cells {
            *cell = *cell / rhs;
        }
    }
}

/// Cell-wise remainder by a scalar, in place; see
/// [`SquareMatrix::elementwise_rem`].
impl<T: Number> RemAssign<T> for SquareMatrix<T> {
    fn rem_assign(&mut self, rhs: T) {
        for cell in &mut self.cells {
            *cell = *cell % rhs;
        }
    }
}
