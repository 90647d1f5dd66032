// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Command line definition and argument validation for rfg.

use crate::generator::GenerationRequest;
use anyhow::{bail, Result};
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rfg")]
#[command(about = "Generate a file filled with pseudo-random bytes")]
#[command(after_help = "Example:
  rfg -s 512 -o randomfile.ext
  rfg --size 2048 --out randomfile2.ext")]
pub struct Cli {
    /// Size of the generated file in bytes
    #[arg(short, long, value_name = "SIZE")]
    pub size: Option<u64>,
    /// Path of the output file
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub out: Option<PathBuf>,
    /// Seed for the random byte stream; defaults to the current time
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Wait for enter before exiting
    #[arg(short, long)]
    pub interactive: bool,
    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,
    /// Show license information
    #[arg(short = 'l', long)]
    pub license: bool,
}

impl Cli {
    /// Validate the scanned options into a request for the generator.
    /// Both `--size` and `--out` must have been set; an empty output path
    /// counts as unset.
    pub fn generation_request(&self) -> Result<GenerationRequest> {
        let mut missing = vec![];
        if self.size.is_none() {
            missing.push("--size");
        }
        let out = self.out.as_deref().filter(|p| !p.as_os_str().is_empty());
        if out.is_none() {
            missing.push("--out");
        }
        match (self.size, out) {
            (Some(size_in_bytes), Some(path)) => Ok(GenerationRequest {
                output_path: path.to_path_buf(),
                size_in_bytes,
            }),
            _ => bail!("missing required option(s): {}", missing.join(", ")),
        }
    }
}

/// Failure classes reported to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    BadArgument,
    Io,
}

/// Map a failure class to its process exit code. Bad arguments follow the
/// host convention: EINVAL on POSIX-like systems, ERROR_BAD_ARGUMENTS on
/// Windows.
pub fn exit_code(class: FailureClass) -> i32 {
    match class {
        FailureClass::BadArgument => {
            if cfg!(windows) {
                160
            } else {
                22
            }
        },
        FailureClass::Io => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("rfg").chain(args.iter().copied()))
    }

    #[test]
    fn valid_arguments_become_a_request() {
        let cli = parse(&["-s", "100", "-o", "test.bin"]).unwrap();
        let request = cli.generation_request().unwrap();
        assert_eq!(request.size_in_bytes, 100);
        assert_eq!(request.output_path, PathBuf::from("test.bin"));
    }

    #[test]
    fn long_forms_are_recognized() {
        let cli = parse(&["--size", "2048", "--out", "file.ext", "--seed", "7"]).unwrap();
        assert_eq!(cli.size, Some(2048));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.generation_request().is_ok());
    }

    #[test]
    fn missing_size_is_rejected() {
        let cli = parse(&["-o", "test.bin"]).unwrap();
        let err = cli.generation_request().unwrap_err();
        assert!(err.to_string().contains("--size"));
    }

    #[test]
    fn missing_out_is_rejected() {
        let cli = parse(&["-s", "100"]).unwrap();
        let err = cli.generation_request().unwrap_err();
        assert!(err.to_string().contains("--out"));
    }

    #[test]
    fn empty_out_is_rejected() {
        let cli = parse(&["-s", "100", "-o", ""]).unwrap();
        assert!(cli.generation_request().is_err());
    }

    #[test]
    fn unknown_options_are_rejected() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let err = parse(&["-s", "lots", "-o", "test.bin"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(parse(&["-s", "-1", "-o", "test.bin"]).is_err());
    }

    #[test]
    fn option_missing_its_value_is_rejected() {
        assert!(parse(&["-s"]).is_err());
        assert!(parse(&["-s", "100", "-o"]).is_err());
    }

    #[test]
    fn version_and_license_flags_parse_alone() {
        assert!(parse(&["-v"]).unwrap().version);
        assert!(parse(&["--license"]).unwrap().license);
        assert!(!parse(&["-s", "1", "-o", "a"]).unwrap().version);
    }

    #[test]
    fn early_exit_flags_parse_with_other_options_present() {
        let cli = parse(&["-v", "-s", "100"]).unwrap();
        assert!(cli.version);
        let cli = parse(&["-l", "-o", "test.bin"]).unwrap();
        assert!(cli.license);
    }

    #[test]
    fn bad_argument_exit_code_follows_the_host_convention() {
        let expected = if cfg!(windows) { 160 } else { 22 };
        assert_eq!(exit_code(FailureClass::BadArgument), expected);
        assert_ne!(exit_code(FailureClass::Io), 0);
    }
}
