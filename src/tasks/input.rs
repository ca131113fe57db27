use crate::FailResult;
use ::dmat_config::YamlRead;
use ::dmat_matrix::Matrix;
use ::serde::Deserialize;
use ::std::path::Path;

/// The mapping form of a matrix input file.
///
/// A file may also hold just the bare list of rows.
///
/// ```yaml
/// matrix:
///   - [2, 1]
///   - [1, 1]
/// ```
#[derive(Deserialize)]
struct KeyedMatrix {
    matrix: Matrix,
}

pub fn read_matrix(path: &Path) -> FailResult<Matrix> {
    let text = ::std::fs::read_to_string(path)
        .map_err(|e| format_err!("could not open {}: {}", path.display(), e))?;
    let matrix = parse_matrix(&text)
        .map_err(|e| format_err!("while reading a matrix from {}: {}", path.display(), e))?;

    debug!("read {} matrix from {}", matrix.dimension(), path.display());
    Ok(matrix)
}

// Dispatch on the shape of the document up front, so that errors from
// inside the matrix (e.g. ragged rows) reach the user intact.
fn parse_matrix(text: &str) -> FailResult<Matrix> {
    let value: ::serde_yaml::Value = ::serde_yaml::from_str(text)?;
    match value.is_mapping() {
        true => Ok(KeyedMatrix::from_yaml_str(text)?.matrix),
        false => Matrix::from_yaml_str(text),
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use ::std::fs::File;
    use ::std::io::Write;

    fn read_str(text: &str) -> FailResult<Matrix> {
        let dir = ::tempdir::TempDir::new("dmat-input")?;
        let path = dir.path().join("input.yaml");
        File::create(&path)?.write_all(text.as_bytes())?;
        read_matrix(&path)
    }

    #[test]
    fn both_forms() {
        let expected = Matrix::from_rows(&[[2.0, 1.0], [1.0, 1.0]]);
        assert_eq!(read_str("[[2, 1], [1, 1]]").unwrap(), expected);
        assert_eq!(read_str("matrix:\n  - [2, 1]\n  - [1, 1]\n").unwrap(), expected);
        // JSON is YAML
        assert_eq!(read_str(r#"{"matrix": [[2, 1], [1, 1]]}"#).unwrap(), expected);
    }

    #[test]
    fn bad_input() {
        let err = read_str("[[2, 1], [1]]").unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 elements, but row 0 has 2"), "{}", err);
        let err = read_str("matrix: [[2, 1], [1]]").unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 elements"), "{}", err);

        assert!(read_str("matrix: 3").is_err());

        let err = read_matrix("surely/not/here.yaml".as_ref()).unwrap_err();
        assert!(err.to_string().contains("could not open"), "{}", err);
    }
}
