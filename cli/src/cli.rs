//! # CLI Interface
//!
//! Defines the command-line argument structure for `shamir-recover` using
//! `clap` derive. Every positional argument is a test-case file; flags pick
//! the arithmetic and tune prime selection and output.

use std::path::PathBuf;

use clap::Parser;
use num_bigint::BigInt;

use shamir_recovery::config::{DEFAULT_INPUT_FILES, DEFAULT_PRIME_MARGIN};
use shamir_recovery::Mode;

use crate::logging::LogFormat;

/// Recover Shamir-shared secrets from JSON test-case files.
///
/// Each file is reconstructed independently: a failing file is reported and
/// the remaining files still run. The exit status is non-zero if any file
/// failed.
#[derive(Parser, Debug)]
#[command(
    name = "shamir-recover",
    about = "Recover Shamir-shared secrets via Lagrange interpolation",
    version
)]
pub struct RecoverCli {
    /// Test-case files to process. Defaults to `test1.json test2.json`.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Reconstruct modulo a prime instead of exactly.
    ///
    /// Without `--prime`, the prime is the smallest one above the largest
    /// share coordinate plus `--prime-margin`.
    #[arg(long = "mod", short = 'm')]
    pub modular: bool,

    /// Explicit field prime. Implies `--mod`.
    ///
    /// Primality is not checked; pass the modulus the shares were generated under.
    #[arg(long, short = 'p', value_name = "PRIME")]
    pub prime: Option<BigInt>,

    /// Safety margin added to the largest coordinate before searching for a prime.
    #[arg(long, env = "SHAMIR_PRIME_MARGIN", default_value_t = DEFAULT_PRIME_MARGIN)]
    pub prime_margin: u64,

    /// Print one JSON object per file instead of text.
    #[arg(long)]
    pub json: bool,

    /// Log output format (logs go to stderr).
    #[arg(long, value_enum, env = "SHAMIR_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl RecoverCli {
    /// The arithmetic selected by `--mod` / `--prime`.
    pub fn mode(&self) -> Mode {
        if self.modular || self.prime.is_some() {
            Mode::Modular {
                prime: self.prime.clone(),
            }
        } else {
            Mode::Exact
        }
    }

    /// The files to process, falling back to the default pair.
    pub fn input_files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect()
        } else {
            self.files.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> RecoverCli {
        RecoverCli::try_parse_from(std::iter::once("shamir-recover").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        RecoverCli::command().debug_assert();
    }

    #[test]
    fn defaults_to_exact_mode_and_default_files() {
        let cli = parse(&[]);
        assert_eq!(cli.mode(), Mode::Exact);
        assert_eq!(
            cli.input_files(),
            vec![PathBuf::from("test1.json"), PathBuf::from("test2.json")]
        );
    }

    #[test]
    fn mod_flag_selects_auto_prime() {
        for flag in ["--mod", "-m"] {
            let cli = parse(&[flag, "a.json"]);
            assert_eq!(cli.mode(), Mode::Modular { prime: None });
            assert_eq!(cli.input_files(), vec![PathBuf::from("a.json")]);
        }
    }

    #[test]
    fn prime_implies_modular() {
        let expected = Mode::Modular {
            prime: Some(BigInt::from(101)),
        };
        assert_eq!(parse(&["--prime", "101"]).mode(), expected);
        assert_eq!(parse(&["--prime=101"]).mode(), expected);
        assert_eq!(parse(&["-p", "101", "x.json", "y.json"]).mode(), expected);
    }

    #[test]
    fn prime_accepts_big_values() {
        let big = "170141183460469231731687303715884105727";
        let cli = parse(&["--prime", big]);
        assert_eq!(cli.prime, Some(big.parse::<BigInt>().unwrap()));
    }

    #[test]
    fn rejects_non_numeric_prime() {
        assert!(RecoverCli::try_parse_from(["shamir-recover", "--prime", "abc"]).is_err());
        assert!(RecoverCli::try_parse_from(["shamir-recover", "--prime"]).is_err());
    }

    #[test]
    fn output_and_logging_flags() {
        let cli = parse(&["--json", "--log-format", "json", "--prime-margin", "7"]);
        assert!(cli.json);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.prime_margin, 7);
    }
}
