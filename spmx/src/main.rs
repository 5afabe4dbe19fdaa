use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use spmx::{apply_and_save, load_operands, prompt_operation, Operation, OutputFormat, RunConfig};

const ABOUT: &str = "Add, subtract or multiply two sparse matrices stored as coordinate lists";

#[derive(Parser)]
#[command(author, version, about = ABOUT, long_about = None)]
struct Cli {
    /// Left operand file, resolved against the input directory
    lhs: Option<PathBuf>,

    /// Right operand file, resolved against the input directory
    rhs: Option<PathBuf>,

    /// Operation to perform: add, subtract or multiply (prompted for if absent)
    #[arg(short, long)]
    op: Option<Operation>,

    /// Directory the operand paths are resolved against
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory the result file is written to
    #[arg(short = 'O', long)]
    output_dir: Option<PathBuf>,

    /// JSON run configuration; flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Result encoding: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(input_dir) = self.input_dir {
            config = config.with_input_dir(input_dir);
        }
        match (self.lhs, self.rhs) {
            (Some(lhs), Some(rhs)) => config = config.with_operands(lhs, rhs),
            (None, None) => {}
            _ => anyhow::bail!("Both operand files must be given, or neither"),
        }
        if let Some(output_dir) = self.output_dir {
            config = config.with_output_dir(output_dir);
        }
        if let Some(op) = self.op {
            config = config.with_operation(op);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        Ok(config)
    }
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or("SPMX_LOG", default_level))
        .try_init();

    let config = cli.into_config()?;
    let operands = load_operands(&config)?;
    let operation = match config.operation {
        Some(op) => op,
        None => prompt_operation(io::stdin().lock(), io::stdout())?,
    };

    let outcome = apply_and_save(&config, &operands, operation)
        .with_context(|| format!("Failed to {operation} matrices"))?;
    println!("Result saved to {}", outcome.output_path.display());
    Ok(())
}
