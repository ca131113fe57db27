use ::dmat_assert_close::Tolerances;
use ::dmat_matrix::Matrix;

/// Record of what [`forward_eliminate`] did to a matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elimination {
    // (row, col) of each pivot, in the order they were found.
    // Both coordinates are strictly increasing.
    pivots: Vec<(usize, usize)>,
    // only swaps of two distinct rows are counted
    swaps: usize,
}

impl Elimination {
    pub fn pivots(&self) -> &[(usize, usize)] { &self.pivots }

    pub fn pivot_cols(&self) -> impl ExactSizeIterator<Item = usize> + '_
    { self.pivots.iter().map(|&(_, col)| col) }

    /// Number of pivots found; the rank of the matrix.
    pub fn rank(&self) -> usize { self.pivots.len() }

    /// Number of times two distinct rows were exchanged.
    pub fn num_swaps(&self) -> usize { self.swaps }

    /// The determinant of the permutation applied to the rows: `1.0` or `-1.0`.
    pub fn swap_sign(&self) -> f64 {
        match self.swaps % 2 {
            0 => 1.0,
            _ => -1.0,
        }
    }
}

/// Bring a matrix into row-echelon form by Gaussian elimination with partial pivoting.
///
/// Works on any `m x n` matrix, in place.  Pivots are not normalized, and columns
/// are never reordered.
///
/// For each column, the row (among those not yet holding a pivot) whose entry has the
/// largest magnitude is swapped up to become the pivot row, and scaled copies of it are
/// subtracted from every row below so that the rest of the column becomes zero.
/// Columns whose largest candidate is zero according to `tol` get no pivot.
pub fn forward_eliminate(matrix: &mut Matrix, tol: Tolerances) -> Elimination {
    let (m, n) = (matrix.num_rows(), matrix.num_cols());
    let mut out = Elimination::default();

    let mut row = 0;
    for col in 0..n {
        if row == m {
            break;
        }

        let max = pivot_row(matrix, row, col);
        if tol.is_zero(matrix[(max, col)]) {
            trace!("column {}: no pivot below row {}", col, row);
            continue;
        }

        if max != row {
            matrix.swap_rows(row, max);
            out.swaps += 1;
        }
        trace!("column {}: pivot {:e} from row {} into row {}", col, matrix[(row, col)], max, row);

        eliminate_below(matrix, row, col);
        out.pivots.push((row, col));
        row += 1;
    }

    debug!("eliminated {}x{} matrix: rank {}, {} swaps", m, n, out.rank(), out.swaps);
    out
}

/// Forward elimination followed by removal of the rows left entirely zero.
///
/// Afterwards the number of rows is the rank of the original matrix.
pub fn gauss(matrix: &mut Matrix, tol: Tolerances) -> Elimination {
    let elim = forward_eliminate(matrix, tol);
    let removed = matrix.remove_zero_rows(tol);
    debug!("reduced to {} ({} zero rows removed)", matrix.dimension(), removed);
    elim
}

/// Rank of a matrix, as the number of rows that survive [`gauss`].
pub fn rank(matrix: &Matrix, tol: Tolerances) -> usize {
    let mut scratch = matrix.clone();
    gauss(&mut scratch, tol);
    scratch.num_rows()
}

// Index of the row in `row..m` whose entry in `col` has the largest magnitude.
// Ties go to the earliest row.
fn pivot_row(matrix: &Matrix, row: usize, col: usize) -> usize {
    let mut max = row;
    for cur in row + 1..matrix.num_rows() {
        if matrix[(max, col)].abs() < matrix[(cur, col)].abs() {
            max = cur;
        }
    }
    max
}

// Zero out `col` in every row beneath `row`.
fn eliminate_below(matrix: &mut Matrix, row: usize, col: usize) {
    let (m, n) = (matrix.num_rows(), matrix.num_cols());
    let pivot = matrix[(row, col)];
    for i in row + 1..m {
        let first = matrix[(i, col)];
        for j in col..n {
            matrix[(i, j)] -= matrix[(row, j)] / pivot * first;
        }
    }
}
