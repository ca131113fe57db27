use crate::forward_eliminate;
use ::dmat_assert_close::Tolerances;
use ::dmat_matrix::{Matrix, ShapeError};

/// Determinant of a square matrix, by forward elimination of a copy.
///
/// The result is the product of the diagonal of the eliminated copy, times the sign
/// of the row permutation that pivoting performed.  Row swaps physically move data,
/// but that alone does not put the right sign on the diagonal (`[[0, 1], [1, 0]]`
/// eliminates to the identity), so their parity is applied explicitly.
///
/// Singular input is not an error; it just produces a (near) zero determinant.
pub fn determinant(matrix: &Matrix, tol: Tolerances) -> Result<f64, ShapeError> {
    if !matrix.is_square() {
        return Err(ShapeError::NotSquare { dim: matrix.dimension() });
    }

    let mut scratch = matrix.clone();
    let elim = forward_eliminate(&mut scratch, tol);
    let diagonal: f64 = (0..scratch.num_rows()).map(|k| scratch[(k, k)]).product();

    let det = elim.swap_sign() * diagonal;
    debug!("determinant of {} matrix: {:e}", matrix.dimension(), det);
    Ok(det)
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use ::rand::Rng;

    // Laplace expansion along the first row.
    fn cofactor_det(matrix: &Matrix) -> f64 {
        let n = matrix.num_rows();
        if n == 0 {
            return 1.0;
        }
        (0..n).map(|c| {
            let minor_rows: Vec<Vec<f64>> = matrix.rows().skip(1).map(|row| {
                row.iter().enumerate()
                    .filter(|&(j, _)| j != c)
                    .map(|(_, &x)| x)
                    .collect()
            }).collect();
            let minor = match minor_rows.is_empty() {
                true => Matrix::default(),
                false => Matrix::from_rows(&minor_rows),
            };
            let sign = if c % 2 == 0 { 1.0 } else { -1.0 };
            sign * matrix[(0, c)] * cofactor_det(&minor)
        }).sum()
    }

    #[test]
    fn small_examples() {
        let tol = Tolerances::default();
        assert_close!(abs=1e-12, determinant(&matrix![[2, 1], [1, 1]], tol).unwrap(), 1.0);
        assert_close!(abs=1e-12, determinant(&matrix![[1, 2], [2, 4]], tol).unwrap(), 0.0);
        assert_eq!(determinant(&matrix![[0, 1], [1, 0]], tol).unwrap(), -1.0);
        assert_eq!(determinant(&matrix![[5]], tol).unwrap(), 5.0);
        assert_eq!(determinant(&Matrix::eye(4), tol).unwrap(), 1.0);
        assert_eq!(determinant(&Matrix::default(), tol).unwrap(), 1.0);
        assert_close!(
            abs=1e-12,
            determinant(&matrix![[2, 1, -1], [-3, -1, 2], [-2, 1, 2]], tol).unwrap(),
            -1.0,
        );
    }

    #[test]
    fn input_is_not_modified() {
        let m = matrix![[0, 1, 2], [3, 4, 5], [6, 7, 9]];
        let copy = m.clone();
        determinant(&m, Tolerances::default()).unwrap();
        assert_eq!(m, copy);
    }

    #[test]
    fn not_square() {
        let m = Matrix::zeros((2, 3));
        assert_eq!(
            determinant(&m, Tolerances::default()),
            Err(ShapeError::NotSquare { dim: (2, 3).into() }),
        );
    }

    #[test]
    fn agrees_with_cofactor_expansion() {
        let mut rng = ::rand::thread_rng();
        for _ in 0..200 {
            let n = rng.gen_range(1..6);
            let data = (0..n * n).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let m = Matrix::from_row_major_data((n, n), data);

            let expected = cofactor_det(&m);
            let actual = determinant(&m, Tolerances::default()).unwrap();
            assert_close!(rel=1e-9, abs=1e-9, actual, expected, "\n{}", m);
        }
    }

    #[test]
    fn row_swap_negates() {
        let mut rng = ::rand::thread_rng();
        for _ in 0..100 {
            let n = rng.gen_range(2..6);
            let data = (0..n * n).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let m = Matrix::from_row_major_data((n, n), data);

            let (i, j) = (rng.gen_range(0..n), rng.gen_range(0..n));
            if i == j {
                continue;
            }
            let mut swapped = m.clone();
            swapped.swap_rows(i, j);

            let det = determinant(&m, Tolerances::default()).unwrap();
            let swapped_det = determinant(&swapped, Tolerances::default()).unwrap();
            assert_close!(rel=1e-9, abs=1e-9, swapped_det, -det);
        }
    }

    #[test]
    fn product_rule() {
        let mut rng = ::rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(1..5);
            let mut random = || {
                let data = (0..n * n).map(|_| rng.gen_range(-2.0..2.0)).collect();
                Matrix::from_row_major_data((n, n), data)
            };
            let (a, b) = (random(), random());
            let tol = Tolerances::default();
            let det_ab = determinant(&(&a * &b), tol).unwrap();
            let det_a = determinant(&a, tol).unwrap();
            let det_b = determinant(&b, tol).unwrap();
            assert_close!(rel=1e-8, abs=1e-10, det_ab, det_a * det_b);
        }
    }
}
