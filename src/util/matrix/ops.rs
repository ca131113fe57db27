use crate::error::fatal;
use crate::{Matrix, ShapeError};
use ::itertools::zip_eq;
use ::std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

// Named, fallible arithmetic.
//
// The `*_in_place` methods return `&mut Self` so that they can be chained:
//
//     a.add_in_place(&b)?.mul_in_place(&c)?;
impl Matrix {
    pub fn add_in_place(&mut self, rhs: &Matrix) -> Result<&mut Self, ShapeError> {
        ShapeError::check_same("add", self.dimension(), rhs.dimension())?;
        for (a, b) in zip_eq(self.data_mut(), rhs.row_major_data()) {
            *a += b;
        }
        Ok(self)
    }

    pub fn sub_in_place(&mut self, rhs: &Matrix) -> Result<&mut Self, ShapeError> {
        ShapeError::check_same("subtract", self.dimension(), rhs.dimension())?;
        for (a, b) in zip_eq(self.data_mut(), rhs.row_major_data()) {
            *a -= b;
        }
        Ok(self)
    }

    /// Replace `self` with the product `self * rhs`.
    pub fn mul_in_place(&mut self, rhs: &Matrix) -> Result<&mut Self, ShapeError> {
        *self = matmul(self, rhs)?;
        Ok(self)
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for x in self.data_mut() {
            *x *= factor;
        }
        self
    }

    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        let mut out = self.clone();
        out.add_in_place(rhs)?;
        Ok(out)
    }

    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, ShapeError> {
        let mut out = self.clone();
        out.sub_in_place(rhs)?;
        Ok(out)
    }

    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, ShapeError>
    { matmul(self, rhs) }

    fn data_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_
    { self.rows_mut().flat_map(|row| row.iter_mut()) }
}

fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, ShapeError> {
    ShapeError::check_matmul(a.dimension(), b.dimension())?;

    // the output is freshly allocated, so `a` may safely be the receiver of `mul_in_place`
    let mut out = Matrix::zeros((a.num_rows(), b.num_cols()));
    let b_t = b.to_transpose();
    for (out_row, a_row) in zip_eq(out.rows_mut(), a.rows()) {
        for (out, b_col) in zip_eq(out_row, b_t.rows()) {
            for (x, y) in zip_eq(a_row, b_col) {
                *out += x * y;
            }
        }
    }
    Ok(out)
}

// Operators treat a shape mismatch as a bug in the caller and panic.

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix
    { fatal(self.checked_add(rhs)) }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix
    { fatal(self.checked_sub(rhs)) }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix
    { fatal(self.checked_mul(rhs)) }
}

impl<'b> AddAssign<&'b Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &'b Matrix)
    { fatal(self.add_in_place(rhs).map(drop)) }
}

impl<'b> SubAssign<&'b Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &'b Matrix)
    { fatal(self.sub_in_place(rhs).map(drop)) }
}

impl<'b> MulAssign<&'b Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &'b Matrix)
    { fatal(self.mul_in_place(rhs).map(drop)) }
}
