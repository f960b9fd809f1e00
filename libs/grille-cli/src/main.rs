//! # Cardano Grille Generator
//!
//! Writes a printable turning-grille card as binary STL.
//!
//! ## Usage
//!
//! ```bash
//! cardano-grille --seed 1971 --out ./out --print-mask
//! RUST_LOG=grille_gen=debug cardano-grille --seed 7
//! ```

use std::process::ExitCode;

use grille_cli::{parse_args, run, Command, USAGE};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Default: INFO for everything. Override with RUST_LOG.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(options)) => options,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(report) => {
            if options.print_mask {
                print!("{}", report.holes);
            }
            println!(
                "{} ({} triangles, seed {})",
                report.path.display(),
                report.triangles,
                report.seed
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "generation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
