use crate::ShapeError;
use ::dmat_assert_close::{CheckClose, CheckCloseError, Tolerances};
use ::serde::de::{self, Deserialize, Deserializer};
use ::serde::ser::{Serialize, Serializer};
use ::std::fmt;
use ::std::ops::{Index, IndexMut};

/// Number of rows (`m`) and columns (`n`) of a matrix.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub m: usize,
    pub n: usize,
}

impl From<(usize, usize)> for Dimension {
    fn from((m, n): (usize, usize)) -> Self { Dimension { m, n } }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "{}x{}", self.m, self.n) }
}

/// Owned matrix type with C layout.
///
/// The default value is the empty `0x0` matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: dim.m * dim.n == data.len()
    dim: Dimension,
}

impl Matrix {
    /// A zero-filled matrix.
    pub fn zeros<D: Into<Dimension>>(dim: D) -> Self {
        let dim = dim.into();
        Matrix { data: vec![0.0; dim.m * dim.n], dim }
    }

    pub fn eye(n: usize) -> Self {
        let mut out = Matrix::zeros((n, n));
        for k in 0..n {
            out[(k, k)] = 1.0;
        }
        out
    }

    pub fn from_row_major_data<D: Into<Dimension>>(dim: D, data: Vec<f64>) -> Self {
        let dim = dim.into();
        assert_eq!(data.len(), dim.m * dim.n);
        Matrix { data, dim }
    }

    /// Build a matrix from a list of rows.
    ///
    /// The column count is taken from the first row.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self
    { crate::error::fatal(Matrix::try_from_rows(rows)) }

    pub fn try_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |row| row.as_ref().len());

        let mut data = Vec::with_capacity(m * n);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n {
                return Err(ShapeError::RaggedRows { row, expected: n, found: values.len() });
            }
            data.extend_from_slice(values);
        }
        Ok(Matrix { data, dim: Dimension { m, n } })
    }
}

impl Matrix {
    pub fn dimension(&self) -> Dimension { self.dim }
    pub fn num_rows(&self) -> usize { self.dim.m }
    pub fn num_cols(&self) -> usize { self.dim.n }
    pub fn is_square(&self) -> bool { self.dim.m == self.dim.n }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn into_row_major_data(self) -> Vec<f64> { self.data }

    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        match r < self.dim.m && c < self.dim.n {
            true => Some(self.data[r * self.dim.n + c]),
            false => None,
        }
    }

    pub fn row(&self, r: usize) -> &[f64] {
        let n = self.dim.n;
        &self.data[r * n..(r + 1) * n]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.dim.m).map(move |r| self.row(r))
    }

    /// Mutable rows.  Like [`Matrix::rows`], this yields `m` slices even when `n == 0`.
    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [f64]> + '_ {
        let (m, n) = (self.dim.m, self.dim.n);
        let mut rest = &mut self.data[..];
        (0..m).map(move |_| {
            let (row, tail) = ::std::mem::take(&mut rest).split_at_mut(n);
            rest = tail;
            row
        })
    }

    /// Exchange two full rows.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let n = self.dim.n;
        let (lo, hi) = (usize::min(i, j), usize::max(i, j));
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    /// Remove every row whose entries are all zero according to `tol`.
    ///
    /// Returns the number of rows removed.
    pub fn remove_zero_rows(&mut self, tol: Tolerances) -> usize {
        let Dimension { m, n } = self.dim;

        let mut data = Vec::with_capacity(self.data.len());
        let mut kept = 0;
        for row in self.rows() {
            if !row.iter().all(|&x| tol.is_zero(x)) {
                data.extend_from_slice(row);
                kept += 1;
            }
        }

        self.data = data;
        self.dim = Dimension { m: kept, n };
        if kept != m {
            trace!("removed {} zero rows from a {}x{} matrix", m - kept, m, n);
        }
        m - kept
    }

    /// Replace this matrix with its transpose.
    pub fn transpose(&mut self) {
        *self = self.to_transpose();
    }

    pub fn to_transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.num_cols() {
            for r in 0..self.num_rows() {
                data.push(self[(r, c)]);
            }
        }
        Matrix { data, dim: Dimension { m: self.dim.n, n: self.dim.m } }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        debug_assert!(c < self.dim.n, "column {} out of range for {}", c, self.dim);
        &self.data[r * self.dim.n + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        debug_assert!(c < self.dim.n, "column {} out of range for {}", c, self.dim);
        &mut self.data[r * self.dim.n + c]
    }
}

impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.dim != other.dim {
            return Err(CheckCloseError::Shape {
                left: self.dim.to_string(),
                right: other.dim.to_string(),
            });
        }
        self.data.check_close(&other.data, tol)
    }
}

// serialized as a list of rows
impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_seq(self.rows()) }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        Matrix::try_from_rows(&rows).map_err(de::Error::custom)
    }
}
