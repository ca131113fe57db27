//! The work behind each binary, with output going to an arbitrary writer.

use crate::input::read_matrix;
use crate::FailResult;

use ::dmat_config::ValidatedSettings;
use ::dmat_linalg::{determinant, gauss};
use ::dmat_matrix::Matrix;
use ::std::io::Write;
use ::std::path::Path;

/// Row-reduce the matrix in `input` and write what is left of it.
pub fn run_reduce(settings: &ValidatedSettings, input: &Path, out: &mut dyn Write) -> FailResult<()> {
    let mut matrix = read_matrix(input)?;
    let original = matrix.dimension();

    let elim = gauss(&mut matrix, settings.tolerance);
    info!("rank {} ({} matrix, {} row swaps)", elim.rank(), original, elim.num_swaps());

    write_matrix(settings, &matrix, out)
}

/// Write the determinant of the matrix in `input`.
pub fn run_det(settings: &ValidatedSettings, input: &Path, out: &mut dyn Write) -> FailResult<()> {
    let matrix = read_matrix(input)?;
    let det = determinant(&matrix, settings.tolerance)?;
    match settings.display.precision {
        Some(prec) => writeln!(out, "{:.prec$}", det, prec = prec)?,
        None => writeln!(out, "{}", det)?,
    }
    Ok(())
}

/// Write the product of the matrices in `left` and `right`.
pub fn run_mul(settings: &ValidatedSettings, left: &Path, right: &Path, out: &mut dyn Write) -> FailResult<()> {
    let left = read_matrix(left)?;
    let right = read_matrix(right)?;
    let product = left.checked_mul(&right)?;
    write_matrix(settings, &product, out)
}

fn write_matrix(settings: &ValidatedSettings, matrix: &Matrix, out: &mut dyn Write) -> FailResult<()> {
    let display = {
        matrix.display()
            .width(settings.display.width)
            .precision(settings.display.precision)
    };
    write!(out, "{}", display)?;
    Ok(())
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use ::dmat_config::Settings;
    use ::std::fs::File;
    use ::tempdir::TempDir;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self
        { Fixture { dir: TempDir::new("dmat-cmd").unwrap() } }

        fn file(&self, name: &str, text: &str) -> ::std::path::PathBuf {
            let path = self.dir.path().join(name);
            File::create(&path).unwrap().write_all(text.as_bytes()).unwrap();
            path
        }
    }

    fn compact() -> ValidatedSettings {
        let mut settings = Settings::default();
        settings.display.width = 4;
        settings.validate().unwrap()
    }

    fn output_of(f: impl FnOnce(&mut dyn Write) -> FailResult<()>) -> String {
        let mut buf = vec![];
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn reduce_singular() {
        let fx = Fixture::new();
        let input = fx.file("a.yaml", "[[1, 2], [2, 4]]");
        let text = output_of(|out| run_reduce(&compact(), &input, out));
        assert_eq!(text, "   2   4\n");
    }

    #[test]
    fn det() {
        let fx = Fixture::new();
        let swap = fx.file("swap.yaml", "[[0, 1], [1, 0]]");
        assert_eq!(output_of(|out| run_det(&compact(), &swap, out)), "-1\n");

        let mut settings = Settings::default();
        settings.display.precision = Some(3);
        let settings = settings.validate().unwrap();
        let input = fx.file("a.yaml", "matrix: [[2, 1], [1, 1]]");
        assert_eq!(output_of(|out| run_det(&settings, &input, out)), "1.000\n");
    }

    #[test]
    fn det_not_square() {
        let fx = Fixture::new();
        let input = fx.file("a.yaml", "[[1, 2, 3]]");
        let mut buf = vec![];
        let err = run_det(&compact(), &input, &mut buf).unwrap_err();
        assert!(err.to_string().contains("square"), "{}", err);
    }

    #[test]
    fn mul() {
        let fx = Fixture::new();
        let a = fx.file("a.yaml", "[[1, 2]]");
        let b = fx.file("b.yaml", "[[3], [4]]");
        assert_eq!(output_of(|out| run_mul(&compact(), &a, &b, out)), "  11\n");

        let mut buf = vec![];
        assert!(run_mul(&compact(), &a, &a, &mut buf).is_err());
    }
}
