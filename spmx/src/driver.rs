//! Load two operands, apply one operation, save the result

use std::path::PathBuf;

use spmx_core::SparseMatrix;

use crate::{Error, MatrixFile, Operation, Result, RunConfig};

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub operation: Operation,
    pub result: SparseMatrix,
    pub output_path: PathBuf,
}

/// Both operands of a run, parsed and ready for an operation
#[derive(Debug, Clone)]
pub struct Operands {
    pub lhs: SparseMatrix,
    pub rhs: SparseMatrix,
}

/// Load the operands named by `config`
///
/// Both operand files are checked for existence before either is parsed, so
/// a missing file or a malformed operand is reported before any operation is
/// chosen.
pub fn load_operands(config: &RunConfig) -> Result<Operands> {
    let lhs_path = config.lhs_path();
    let rhs_path = config.rhs_path();
    log::info!("Matrix 1 path: {}", lhs_path.display());
    log::info!("Matrix 2 path: {}", rhs_path.display());

    let lhs_file = MatrixFile::open(&lhs_path)?;
    let rhs_file = MatrixFile::open(&rhs_path)?;
    Ok(Operands {
        lhs: lhs_file.read()?,
        rhs: rhs_file.read()?,
    })
}

/// Apply `operation` to loaded operands and save the result
///
/// A shape mismatch aborts before anything is written.
pub fn apply_and_save(
    config: &RunConfig,
    operands: &Operands,
    operation: Operation,
) -> Result<RunOutcome> {
    let result = operation
        .apply(&operands.lhs, &operands.rhs)
        .map_err(Error::Matrix)?;

    let output_path = config.output_path(operation);
    MatrixFile::save(&output_path, &result, config.format)?;
    log::debug!("{operation} result written to {}", output_path.display());

    Ok(RunOutcome {
        operation,
        result,
        output_path,
    })
}

/// Load the operands named by `config`, apply `operation`, save the result
pub fn run(config: &RunConfig, operation: Operation) -> Result<RunOutcome> {
    let operands = load_operands(config)?;
    apply_and_save(config, &operands, operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use std::fs;

    fn setup(lhs: &str, rhs: &str) -> (tempfile::TempDir, RunConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), lhs).unwrap();
        fs::write(dir.path().join("b.txt"), rhs).unwrap();
        let config = RunConfig::default()
            .with_input_dir(dir.path())
            .with_operands("a.txt", "b.txt")
            .with_output_dir(dir.path());
        (dir, config)
    }

    const A: &str = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n";
    const B: &str = "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 4)\n";

    #[test]
    fn test_run_each_operation() {
        let (dir, config) = setup(A, B);

        let outcome = run(&config, Operation::Add).unwrap();
        assert_eq!(outcome.output_path, dir.path().join("addition_result.txt"));
        assert_eq!(
            fs::read_to_string(&outcome.output_path).unwrap(),
            "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 3)\n(1, 0, 4)\n(1, 1, 2)"
        );

        let outcome = run(&config, Operation::Subtract).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("subtraction_result.txt")).unwrap(),
            "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, -3)\n(1, 0, -4)\n(1, 1, 2)"
        );
        assert_eq!(outcome.result.nnz(), 4);

        run(&config, Operation::Multiply).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("multiplication_result.txt")).unwrap(),
            "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 8)"
        );
    }

    #[test]
    fn test_run_json_output() {
        let (dir, config) = setup(A, B);
        let config = config.with_format(OutputFormat::Json);

        let outcome = run(&config, Operation::Multiply).unwrap();
        assert_eq!(
            outcome.output_path,
            dir.path().join("multiplication_result.json")
        );
        let back: SparseMatrix =
            serde_json::from_str(&fs::read_to_string(&outcome.output_path).unwrap()).unwrap();
        assert_eq!(back, outcome.result);
    }

    #[test]
    fn test_run_missing_operand() {
        let (dir, config) = setup(A, B);
        let config = config.with_operands("a.txt", "nope.txt");

        let err = run(&config, Operation::Add).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref p) if p.ends_with("nope.txt")));
        assert!(!dir.path().join("addition_result.txt").exists());
    }

    #[test]
    fn test_run_dimension_mismatch_writes_nothing() {
        let (dir, config) = setup(A, "rows=3\ncols=2\n(2, 1, 1)\n");

        let err = run(&config, Operation::Add).unwrap_err();
        match err {
            Error::Matrix(inner) => assert!(inner.is_dimension_error()),
            other => panic!("expected dimension error, got {other:?}"),
        }
        assert!(!dir.path().join("addition_result.txt").exists());

        // 2x2 times 3x2 is also incompatible
        assert!(run(&config, Operation::Multiply).is_err());
    }

    #[test]
    fn test_load_operands_reports_format_error() {
        let (_dir, config) = setup("rows=2\ncols=2\n(0,0)\n", B);

        // Loading needs no operation, so the format error surfaces first
        match load_operands(&config) {
            Err(Error::Load { path, source }) => {
                assert!(path.ends_with("a.txt"));
                assert!(source.is_format_error());
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_operands_checks_both_files_first() {
        // lhs is malformed and rhs is missing; the missing file wins
        let (_dir, config) = setup("garbage", B);
        let config = config.with_operands("a.txt", "nope.txt");
        assert!(matches!(load_operands(&config), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_apply_and_save_reuses_operands() {
        let (dir, config) = setup(A, B);
        let operands = load_operands(&config).unwrap();

        let sum = apply_and_save(&config, &operands, Operation::Add).unwrap();
        let product = apply_and_save(&config, &operands, Operation::Multiply).unwrap();
        assert_eq!(sum.result.nnz(), 4);
        assert_eq!(product.result.nnz(), 2);
        assert!(dir.path().join("addition_result.txt").exists());
        assert!(dir.path().join("multiplication_result.txt").exists());
    }

    #[test]
    fn test_run_malformed_operand() {
        let (_dir, config) = setup(A, "rows=2\ncols=2\n(0,0)\n");

        let err = run(&config, Operation::Add).unwrap_err();
        assert!(matches!(err, Error::Load { ref source, .. } if source.is_format_error()));
        assert!(err.to_string().ends_with("Input file has wrong format: (0,0)"));
    }
}
