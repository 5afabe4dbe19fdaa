//! Write two random sparse matrices to disk, multiply them and time each step

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmx::{run, MatrixFile, Operation, OutputFormat, RunConfig, SparseMatrix};
use std::time::Instant;

fn main() -> spmx::Result<()> {
    let dir = std::env::temp_dir().join("spmx_demo");
    std::fs::create_dir_all(&dir).map_err(|e| spmx::Error::Io {
        path: dir.clone(),
        source: e,
    })?;

    // Square operands, well under 0.1% filled
    let n = 20_000;
    let nnz = 200_000;
    let mut rng = StdRng::seed_from_u64(2024);

    let start = Instant::now();
    let lhs = build_demo_matrix(&mut rng, n, nnz);
    let rhs = build_demo_matrix(&mut rng, n, nnz);
    println!("Built two {n} x {n} operands in {:?}", start.elapsed());

    let start = Instant::now();
    MatrixFile::save(dir.join("lhs.txt"), &lhs, OutputFormat::Text)?;
    MatrixFile::save(dir.join("rhs.txt"), &rhs, OutputFormat::Text)?;
    println!("Wrote operands in {:?}", start.elapsed());

    let config = RunConfig::default()
        .with_input_dir(&dir)
        .with_operands("lhs.txt", "rhs.txt")
        .with_output_dir(&dir);

    let start = Instant::now();
    let outcome = run(&config, Operation::Multiply)?;
    let elapsed = start.elapsed();

    println!("\nProduct:");
    println!("   Dimensions: {} x {}", outcome.result.rows(), outcome.result.cols());
    println!("   Non-zeros: {}", outcome.result.nnz());
    println!(
        "   Fill: {:.6}%",
        outcome.result.nnz() as f64 / (n as f64 * n as f64) * 100.0
    );
    println!("   Load + multiply + save: {elapsed:?}");
    println!("   Written to {}", outcome.output_path.display());
    Ok(())
}

fn build_demo_matrix(rng: &mut StdRng, n: usize, nnz: usize) -> SparseMatrix {
    let mut m = SparseMatrix::new(n, n);
    for _ in 0..nnz {
        m.set_element(rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(-50..=50));
    }
    m
}
