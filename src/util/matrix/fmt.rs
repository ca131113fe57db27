use crate::Matrix;
use ::std::fmt;

pub const DEFAULT_WIDTH: usize = 20;

/// Fixed-width text rendering of a [`Matrix`], one row per line.
///
/// This is meant for humans, and is not intended to be parsed back.
#[derive(Debug, Copy, Clone)]
pub struct MatrixDisplay<'a> {
    matrix: &'a Matrix,
    width: usize,
    precision: Option<usize>,
}

impl Matrix {
    pub fn display(&self) -> MatrixDisplay<'_>
    { MatrixDisplay { matrix: self, width: DEFAULT_WIDTH, precision: None } }
}

impl<'a> MatrixDisplay<'a> {
    /// Field width that each value is right-justified in.
    pub fn width(self, width: usize) -> Self
    { MatrixDisplay { width, ..self } }

    /// Digits after the decimal point.  `None` prints the shortest exact representation.
    pub fn precision(self, precision: Option<usize>) -> Self
    { MatrixDisplay { precision, ..self } }
}

impl<'a> fmt::Display for MatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.width;
        for row in self.matrix.rows() {
            for x in row {
                let text = match self.precision {
                    Some(prec) => format!("{:.prec$}", x, prec = prec),
                    None => shortest_within(*x, width),
                };
                // an overfull field still gets a separator
                if width > 0 && text.len() >= width {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", text, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Significant digits used once the exact representation no longer fits in a field.
const FALLBACK_DIGITS: usize = 6;

// The shortest round-trip representation if it leaves room for a separating space,
// otherwise `FALLBACK_DIGITS` significant digits in the style of printf's `%g`.
fn shortest_within(x: f64, width: usize) -> String {
    let exact = x.to_string();
    if width == 0 || exact.len() < width || !x.is_finite() {
        return exact;
    }

    let sci = format!("{:.*e}", FALLBACK_DIGITS - 1, x);
    let (mantissa, exp) = match sci.find('e') {
        Some(e) => (&sci[..e], &sci[e + 1..]),
        None => return exact,
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return exact,
    };

    if exp < -4 || exp >= FALLBACK_DIGITS as i32 {
        format!("{}e{}", trim_fraction(mantissa), exp)
    } else {
        let decimals = (FALLBACK_DIGITS as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { fmt::Display::fmt(&self.display(), f) }
}
