//! Command-line parsing (simple parsing, no external deps).

use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Help text printed by `--help`.
pub const USAGE: &str = "\
Usage: cardano-grille [OPTIONS]

Options:
  -s, --seed <SEED>      Non-negative integer seed (default: 1971)
  -c, --config <FILE>    TOML file overriding card parameters
  -o, --out <DIR>        Output directory (default: current directory)
  -p, --print-mask       Print the hole pattern
  -h, --help             Show this help";

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit.
    Help,
    /// Generate one grille.
    Run(RunOptions),
}

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Raw seed text. Invalid or missing values fall back to the default seed.
    pub seed: Option<String>,
    /// Optional parameter file.
    pub config: Option<PathBuf>,
    /// Directory receiving `cardano_seed_<seed>.stl`.
    pub out_dir: PathBuf,
    /// Print the hole pattern after generation.
    pub print_mask: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: None,
            config: None,
            out_dir: PathBuf::from("."),
            print_mask: false,
        }
    }
}

/// Parse arguments (program name excluded).
///
/// ```rust
/// use grille_cli::{parse_args, Command};
///
/// let cmd = parse_args(["--seed", "42"].map(String::from)).unwrap();
/// let Command::Run(options) = cmd else { panic!("expected run") };
/// assert_eq!(options.seed.as_deref(), Some("42"));
/// ```
pub fn parse_args<I>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" | "-s" => options.seed = Some(value_for(&arg, args.next())?),
            "--config" | "-c" => options.config = Some(value_for(&arg, args.next())?.into()),
            "--out" | "-o" => options.out_dir = value_for(&arg, args.next())?.into(),
            "--print-mask" | "-p" => options.print_mask = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => {
                if let Some(seed) = other.strip_prefix("--seed=") {
                    options.seed = Some(seed.to_string());
                } else {
                    return Err(CliError::Usage(format!("unknown argument '{other}'")));
                }
            }
        }
    }

    Ok(Command::Run(options))
}

fn value_for(flag: &str, value: Option<String>) -> CliResult<String> {
    value.ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}
