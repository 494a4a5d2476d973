use std::fmt;

use crate::{Error, Number, Result};

mod ops;

/// A square matrix with [`f64`] cells.
pub type SquareMat = SquareMatrix<f64>;

/// A dense square matrix whose size is chosen at runtime.
///
/// The matrix owns a single contiguous, row-major buffer of `size * size`
/// cells. Cloning performs a deep copy of that buffer, so no two live
/// matrices ever share storage.
///
/// # Construction
///
/// There are several ways to create a [`SquareMatrix`]:
///
/// - [`SquareMatrix::new`] creates a zero-filled matrix of a given size.
/// - [`SquareMatrix::identity`] creates an identity matrix of a given size.
/// - [`SquareMatrix::from_rows`] fills a matrix from an array of row arrays.
/// - [`SquareMatrix::from_fn`] will create each cell by invoking a closure
///   with its row and column.
/// - [`SquareMatrix::from_diagonal`] creates a matrix with a specified
///   diagonal and zero outside of it.
///
/// Every constructor rejects a size of zero with [`Error::InvalidSize`];
/// `size >= 1` holds for the lifetime of the matrix.
///
/// # Cell Access
///
/// [`SquareMatrix`] implements the [`Index`] and [`IndexMut`] traits for
/// tuples of `(usize, usize)`. The first element of the tuple is the *row*,
/// the second is the *column*, matching common mathematical notation. Indices
/// are 0-based.
///
/// ```
/// # use sqmat::*;
/// let mut mat = SquareMat::new(2)?;
/// mat[(0, 1)] = 4.0;
/// assert_eq!(mat[(0, 1)], 4.0);
/// assert_eq!(mat[(1, 1)], 0.0);
/// # Ok::<_, sqmat::Error>(())
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for
/// slices. [`SquareMatrix::at`] and [`SquareMatrix::at_mut`] report
/// [`Error::IndexOutOfRange`] instead and can be used for checked access.
///
/// # Comparison
///
/// Equality and ordering of matrices are **not** element-wise: two matrices
/// compare by the sum of all of their cells, and nothing else. Matrices of
/// *different* sizes can therefore compare equal. See the [`PartialEq`]
/// impl for details.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone)]
pub struct SquareMatrix<T = f64> {
    size: usize,
    cells: Vec<T>,
}

impl<T> SquareMatrix<T> {
    /// Returns the number of rows (and columns) of this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Creates a [`SquareMatrix`] from an array of row arrays.
    ///
    /// The argument is square by construction; only a zero-length array is
    /// rejected, with [`Error::InvalidSize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ])?;
    /// assert_eq!(mat[(1, 0)], 2.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn from_rows<const N: usize>(rows: [[T; N]; N]) -> Result<Self> {
        if N == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self {
            size: N,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a [`SquareMatrix`] by invoking a closure with the position
    /// (row and column) of each cell.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMatrix::from_fn(2, |row, col| (row * 10 + col) as f64)?;
    /// assert_eq!(mat[(0, 1)], 1.0);
    /// assert_eq!(mat[(1, 0)], 10.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn from_fn<F>(size: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self::build(size, cb))
    }

    /// Builds a matrix without validating `size`. Callers must pass a size
    /// of at least 1.
    fn build<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        debug_assert_ne!(size, 0);
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    fn idx(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Returns a reference to the cell at `(row, col)`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when either index is outside of
    /// `[0, size)`. Indices are [`usize`], so a negative index cannot be
    /// expressed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::identity(2)?;
    /// assert_eq!(mat.at(1, 1), Ok(&1.0));
    /// assert!(mat.at(2, 0).is_err());
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        Ok(&self.cells[self.idx(row, col)?])
    }

    /// Returns a mutable reference to the cell at `(row, col)`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when either index is outside of
    /// `[0, size)`. This is the write path used to fill a matrix cell by
    /// cell.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.idx(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Applies a closure to each cell, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::identity(2)?;
    /// let mat = mat.map(|c| c * 3.0);
    /// assert_eq!(mat[(0, 0)], 3.0);
    /// assert_eq!(mat[(0, 1)], 0.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn map<F, U>(&self, f: F) -> SquareMatrix<U>
    where
        T: Copy,
        F: FnMut(T) -> U,
    {
        SquareMatrix {
            size: self.size,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }
}

impl<T: Number> SquareMatrix<T> {
    /// Creates a zero-filled matrix with `size` rows and columns.
    ///
    /// Fails with [`Error::InvalidSize`] when `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::new(3)?;
    /// assert_eq!(mat.size(), 3);
    /// assert_eq!(mat[(2, 2)], 0.0);
    ///
    /// assert_eq!(SquareMat::new(0), Err(Error::InvalidSize));
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![T::ZERO; size * size],
        })
    }

    /// Creates an identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying any matrix with the identity matrix of the same size
    /// returns the matrix unchanged.
    pub fn identity(size: usize) -> Result<Self> {
        let mut mat = Self::new(size)?;
        for i in 0..size {
            mat.cells[i * size + i] = T::ONE;
        }
        Ok(mat)
    }

    /// Creates a matrix with `diag` on its diagonal and zero outside of it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::from_diagonal(&[1.0, 2.0])?;
    /// assert_eq!(mat[(0, 0)], 1.0);
    /// assert_eq!(mat[(1, 1)], 2.0);
    /// assert_eq!(mat[(0, 1)], 0.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn from_diagonal(diag: &[T]) -> Result<Self> {
        let mut mat = Self::new(diag.len())?;
        for (i, &d) in diag.iter().enumerate() {
            mat.cells[i * mat.size + i] = d;
        }
        Ok(mat)
    }

    /// Combines two same-size matrices cell by cell into a fresh matrix.
    fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.size != other.size {
            return Err(Error::SizeMismatch {
                lhs: self.size,
                rhs: other.size,
            });
        }
        Ok(Self {
            size: self.size,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Cell-wise sum of `self` and `other` into a fresh matrix.
    ///
    /// Fails with [`Error::SizeMismatch`] when the operand sizes differ; in
    /// that case no result is allocated. The `+` operator delegates here and
    /// panics instead.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Cell-wise difference of `self` and `other` into a fresh matrix.
    ///
    /// Fails with [`Error::SizeMismatch`] when the operand sizes differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Matrix product of `self` and `other`.
    ///
    /// Both operands must be of the same size, which is also the size of the
    /// result; otherwise fails with [`Error::SizeMismatch`]. Cost is cubic in
    /// the size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let a = SquareMat::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ])?;
    /// let id = SquareMat::identity(2)?;
    /// let prod = a.checked_mul(&id)?;
    /// assert_eq!(prod[(1, 0)], 3.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.size != other.size {
            return Err(Error::SizeMismatch {
                lhs: self.size,
                rhs: other.size,
            });
        }
        let n = self.size;
        Ok(Self::build(n, |i, j| {
            (0..n).fold(T::ZERO, |acc, k| acc + self[(i, k)] * other[(k, j)])
        }))
    }

    /// Cell-wise product of two same-size matrices (the Hadamard product).
    ///
    /// Fails with [`Error::SizeMismatch`] when the operand sizes differ.
    /// This is a named method rather than an operator: `%` in Rust means
    /// remainder, and `*` is the matrix product.
    pub fn elementwise_mul(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a * b)
    }

    /// Replaces `self` with the cell-wise product of `self` and `other`.
    ///
    /// Fails with [`Error::SizeMismatch`] when the operand sizes differ,
    /// leaving `self` unchanged.
    pub fn elementwise_mul_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.elementwise_mul(other)?;
        Ok(())
    }

    /// Computes the remainder of each cell divided by `modulus`.
    ///
    /// The remainder follows the convention of Rust's `%` operator (`fmod`
    /// for floats): the result has the same sign as the dividend, not the
    /// modulus. A modulus of zero yields NaN cells for float matrices, the
    /// same way `%` does on floats.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::from_rows([
    ///     [6.0, -6.0],
    ///     [2.5, 0.0],
    /// ])?;
    /// let rem = mat.elementwise_rem(4.0);
    /// assert_eq!(rem[(0, 0)], 2.0);
    /// assert_eq!(rem[(0, 1)], -2.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn elementwise_rem(&self, modulus: T) -> Self {
        self.map(|c| c % modulus)
    }

    /// Cell-wise product with a scalar.
    ///
    /// The `*` operator supports the scalar on either side; both orderings
    /// produce identical results.
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|c| c * scalar)
    }

    /// Cell-wise division by a scalar.
    ///
    /// Fails with [`Error::DivisionByZero`] when `scalar` is exactly zero;
    /// no result is allocated in that case. Any other finite scalar divides
    /// normally.
    pub fn checked_div(&self, scalar: T) -> Result<Self> {
        if scalar == T::ZERO {
            return Err(Error::DivisionByZero);
        }
        Ok(self.map(|c| c / scalar))
    }

    /// Swaps the rows and columns of this matrix, returning a fresh one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ])?;
    /// let t = mat.transpose();
    /// assert_eq!(t[(0, 1)], 2.0);
    /// assert_eq!(t[(1, 0)], 1.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn transpose(&self) -> Self {
        Self::build(self.size, |row, col| self[(col, row)])
    }

    /// Returns the sum of all cells.
    ///
    /// This scalar is what matrix equality and ordering are defined over.
    pub fn cell_sum(&self) -> T {
        self.cells.iter().fold(T::ZERO, |acc, &c| acc + c)
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Computed by recursive cofactor expansion along the first row, exactly
    /// following the textbook definition: no pivoting and no numeric
    /// conditioning, so results for the same input match bit for bit across
    /// runs. Cost grows factorially with the size; callers are responsible
    /// for keeping sizes reasonable.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ])?;
    /// assert_eq!(mat.determinant(), 1.0 * 4.0 - 2.0 * 3.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn determinant(&self) -> T {
        match self.size {
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            n => {
                let mut det = T::ZERO;
                for k in 0..n {
                    let cofactor = self[(0, k)] * self.minor(0, k).determinant();
                    // Sign alternates by column: even +, odd -.
                    det = if k % 2 == 0 {
                        det + cofactor
                    } else {
                        det - cofactor
                    };
                }
                det
            }
        }
    }

    /// Returns the submatrix obtained by deleting `row` and `col`.
    ///
    /// Only called with `size >= 2`, so the result is a valid matrix.
    fn minor(&self, row: usize, col: usize) -> Self {
        Self::build(self.size - 1, |i, j| {
            let r = if i < row { i } else { i + 1 };
            let c = if j < col { j } else { j + 1 };
            self[(r, c)]
        })
    }

    /// Raises the matrix to a non-negative integer power.
    ///
    /// Fails with [`Error::NegativePower`] when `power` is negative. A power
    /// of zero yields the identity matrix of the same size. Positive powers
    /// are computed by binary exponentiation (square and multiply), taking
    /// `O(log power)` matrix products.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mat = SquareMat::from_rows([
    ///     [1.0, 1.0],
    ///     [0.0, 1.0],
    /// ])?;
    /// let cubed = mat.pow(3)?;
    /// assert_eq!(cubed[(0, 1)], 3.0);
    ///
    /// assert_eq!(mat.pow(-1), Err(Error::NegativePower(-1)));
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn pow(&self, power: i32) -> Result<Self> {
        if power < 0 {
            return Err(Error::NegativePower(power));
        }
        let mut result = Self::identity(self.size)?;
        let mut base = self.clone();
        let mut power = power;
        while power != 0 {
            if power % 2 != 0 {
                result = result.checked_mul(&base)?;
            }
            base = base.checked_mul(&base)?;
            power /= 2;
        }
        Ok(result)
    }

    /// Adds 1 to every cell in place and returns the mutated matrix.
    pub fn increment(&mut self) -> &mut Self {
        for cell in &mut self.cells {
            *cell = *cell + T::ONE;
        }
        self
    }

    /// Adds 1 to every cell in place, returning a copy of the *previous*
    /// state.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqmat::*;
    /// let mut mat = SquareMat::new(2)?;
    /// let before = mat.post_increment();
    /// assert_eq!(before[(0, 0)], 0.0);
    /// assert_eq!(mat[(0, 0)], 1.0);
    /// # Ok::<_, sqmat::Error>(())
    /// ```
    pub fn post_increment(&mut self) -> Self {
        let snapshot = self.clone();
        self.increment();
        snapshot
    }

    /// Subtracts 1 from every cell in place and returns the mutated matrix.
    pub fn decrement(&mut self) -> &mut Self {
        for cell in &mut self.cells {
            *cell = *cell - T::ONE;
        }
        self
    }

    /// Subtracts 1 from every cell in place, returning a copy of the
    /// *previous* state.
    pub fn post_decrement(&mut self) -> Self {
        let snapshot = self.clone();
        self.decrement();
        snapshot
    }
}

/// Renders the matrix with one row per line, cells separated by a single
/// space.
///
/// This is a human-readable rendering for display and logging, not a
/// serialization format; nothing parses it back.
impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row != 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.size {
                if col != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self[(row, col)])?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a SquareMatrix<T>, usize);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..self.0.size {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.size {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_same_cells(a: &SquareMat, b: &SquareMat) {
        assert_eq!(a.size(), b.size());
        for row in 0..a.size() {
            for col in 0..a.size() {
                assert_eq!(a[(row, col)], b[(row, col)], "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn new_is_zero_filled() {
        for size in 1..5 {
            let mat = SquareMat::new(size).unwrap();
            assert_eq!(mat.size(), size);
            for row in 0..size {
                for col in 0..size {
                    assert_eq!(mat[(row, col)], 0.0);
                }
            }
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(SquareMat::new(0), Err(Error::InvalidSize));
        assert_eq!(SquareMat::from_rows::<0>([]), Err(Error::InvalidSize));
        assert_eq!(SquareMat::from_fn(0, |_, _| 0.0), Err(Error::InvalidSize));
        assert_eq!(SquareMat::from_diagonal(&[]), Err(Error::InvalidSize));
    }

    #[test]
    fn from_rows_is_row_major() {
        let mat = SquareMat::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(mat[(0, 0)], 1.0);
        assert_eq!(mat[(0, 1)], 2.0);
        assert_eq!(mat[(1, 0)], 3.0);
        assert_eq!(mat[(1, 1)], 4.0);
    }

    #[test]
    fn diagonal() {
        let mat = SquareMat::from_diagonal(&[1.0, 2.0]).unwrap();
        let expected = SquareMat::from_rows([[1.0, 0.0], [0.0, 2.0]]).unwrap();
        assert_same_cells(&mat, &expected);
    }

    #[test]
    fn checked_access_reports_position() {
        let mut mat = SquareMat::new(2).unwrap();
        assert_eq!(mat.at(0, 1), Ok(&0.0));
        assert_eq!(
            mat.at(2, 0),
            Err(Error::IndexOutOfRange {
                row: 2,
                col: 0,
                size: 2
            })
        );
        assert_eq!(
            mat.at_mut(0, 5).err(),
            Some(Error::IndexOutOfRange {
                row: 0,
                col: 5,
                size: 2
            })
        );

        *mat.at_mut(1, 1).unwrap() = 7.0;
        assert_eq!(mat[(1, 1)], 7.0);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut a = SquareMat::new(2).unwrap();
        a[(0, 0)] = 5.0;
        let b = a.clone();
        a[(0, 0)] = 10.0;
        assert_eq!(b[(0, 0)], 5.0);
    }

    #[test]
    fn transpose_is_involutive() {
        let mat = SquareMat::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]])
            .unwrap();
        let t = mat.transpose();
        assert_eq!(t[(1, 0)], mat[(0, 1)]);
        assert_eq!(t[(0, 2)], mat[(2, 0)]);
        assert_same_cells(&t.transpose(), &mat);
    }

    #[test]
    fn determinant() {
        assert_eq!(SquareMat::new(1).unwrap().determinant(), 0.0);
        assert_eq!(SquareMat::new(3).unwrap().determinant(), 0.0);
        assert_eq!(SquareMat::identity(3).unwrap().determinant(), 1.0);

        let single = SquareMat::from_rows([[4.5]]).unwrap();
        assert_eq!(single.determinant(), 4.5);

        let two = SquareMat::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(two.determinant(), 1.0 * 4.0 - 2.0 * 3.0);

        #[rustfmt::skip]
        let three = SquareMat::from_rows([
            [6.0,  1.0, 1.0],
            [4.0, -2.0, 5.0],
            [2.0,  8.0, 7.0],
        ])
        .unwrap();
        assert_eq!(three.determinant(), -306.0);
        assert_eq!(three.transpose().determinant(), -306.0);

        #[rustfmt::skip]
        let four = SquareMat::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 0.0, 0.0, 4.0],
        ])
        .unwrap();
        assert_eq!(four.determinant(), 24.0);
    }

    #[test]
    fn pow() {
        let mat = SquareMat::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]])
            .unwrap();

        let id = mat.pow(0).unwrap();
        assert_same_cells(&id, &SquareMat::identity(3).unwrap());

        assert_same_cells(&mat.pow(1).unwrap(), &mat);

        let squared = mat.checked_mul(&mat).unwrap();
        assert_same_cells(&mat.pow(2).unwrap(), &squared);

        let cubed = squared.checked_mul(&mat).unwrap();
        assert_same_cells(&mat.pow(3).unwrap(), &cubed);

        assert_eq!(mat.pow(-3), Err(Error::NegativePower(-3)));
    }

    #[test]
    fn pow_does_not_mutate_the_base() {
        let mat = SquareMat::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let copy = mat.clone();
        mat.pow(5).unwrap();
        assert_same_cells(&mat, &copy);
    }

    #[test]
    fn increment_and_decrement() {
        let mut mat = SquareMat::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();

        mat.increment();
        assert_eq!(mat[(0, 0)], 2.0);
        assert_eq!(mat[(1, 1)], 5.0);

        let before = mat.post_increment();
        assert_eq!(before[(0, 0)], 2.0);
        assert_eq!(mat[(0, 0)], 3.0);

        mat.decrement();
        let before = mat.post_decrement();
        assert_eq!(before[(0, 0)], 2.0);
        assert_eq!(mat[(0, 0)], 1.0);
        assert_eq!(mat[(1, 1)], 4.0);
    }

    #[test]
    fn cell_sum() {
        let mat = SquareMat::from_rows([[1.0, 2.0], [3.0, -4.0]]).unwrap();
        assert_eq!(mat.cell_sum(), 2.0);
        assert_eq!(SquareMat::new(4).unwrap().cell_sum(), 0.0);
    }

    #[test]
    fn display() {
        let mat = SquareMat::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(format!("{mat}"), "1 2\n3 4");

        let single = SquareMat::from_rows([[7.5]]).unwrap();
        assert_eq!(format!("{single}"), "7.5");
    }

    #[test]
    fn debug() {
        let mat = SquareMat::from_rows([[0.0, 1.0], [2.0, 3.0]]).unwrap();

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");

        // `#` modifier prints each row in its own line, but not each
        // individual cell.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );
    }
}
