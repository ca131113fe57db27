use ::std::fs::File;
use ::std::io::Write;
use ::std::path::{Path, PathBuf};
use ::std::process::{Command, Output};
use ::tempdir::TempDir;

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(text.as_bytes()).unwrap();
    path
}

fn run(bin: &str, args: &[&Path]) -> Output {
    Command::new(bin).args(args).arg("-q").output().unwrap()
}

fn stdout_values(output: &Output) -> Vec<Vec<f64>> {
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.split_whitespace().map(|s| s.parse().unwrap()).collect())
        .collect()
}

#[test]
fn det() {
    let dir = TempDir::new("dmat-cli").unwrap();
    let input = write(dir.path(), "swap.yaml", "[[0, 1], [1, 0]]");
    let output = run(env!("CARGO_BIN_EXE_dmat-det"), &[&input]);
    assert_eq!(stdout_values(&output), vec![vec![-1.0]]);
}

#[test]
fn reduce() {
    let dir = TempDir::new("dmat-cli").unwrap();
    let input = write(dir.path(), "singular.yaml", "matrix:\n  - [1, 2]\n  - [2, 4]\n");
    let output = run(env!("CARGO_BIN_EXE_dmat-reduce"), &[&input]);
    assert_eq!(stdout_values(&output), vec![vec![2.0, 4.0]]);
}

#[test]
fn reduce_leaves_columns_separated() {
    let dir = TempDir::new("dmat-cli").unwrap();
    let input = write(dir.path(), "tenths.yaml", "[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6], [0.5, 0.7, 0.9]]");
    let output = run(env!("CARGO_BIN_EXE_dmat-reduce"), &[&input]);
    let rows = stdout_values(&output);
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row.len(), 3, "{}", String::from_utf8_lossy(&output.stdout));
    }
}

#[test]
fn mul_with_config() {
    let dir = TempDir::new("dmat-cli").unwrap();
    let a = write(dir.path(), "a.yaml", "[[1, 2], [3, 4]]");
    let b = write(dir.path(), "b.yaml", "[[0, 1], [1, 0]]");
    let config = write(dir.path(), "config.yaml", "display:\n  width: 8\n  precision: 1\n");

    let output = {
        Command::new(env!("CARGO_BIN_EXE_dmat-mul"))
            .arg(&a).arg(&b)
            .arg("-c").arg(&config)
            .output().unwrap()
    };
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "     2.0     1.0\n     4.0     3.0\n");
}

#[test]
fn failures_exit_nonzero() {
    let dir = TempDir::new("dmat-cli").unwrap();
    let input = write(dir.path(), "wide.yaml", "[[1, 2, 3]]");
    let output = run(env!("CARGO_BIN_EXE_dmat-det"), &[&input]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("square"));

    let output = run(env!("CARGO_BIN_EXE_dmat-det"), &[&dir.path().join("missing.yaml")]);
    assert_eq!(output.status.code(), Some(1));
}
