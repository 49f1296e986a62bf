//! Command-line boundary layer.
//!
//! Collects the calculator inputs (address, prefix length, optional host
//! index) from argv, guards against blank input before the engine runs,
//! and maps unparseable numbers onto the calculator's error taxonomy.

use crate::error::CalcError;
use crate::processing::CalcOptions;
use std::error::Error;

/// Prefix length used when none is given on the command line.
pub const DEFAULT_PREFIX: i32 = 24;

pub const USAGE: &str = "\
Usage: subnet-calculator [OPTIONS] <ADDRESS> [PREFIX] [HOST_INDEX]

Arguments:
  ADDRESS      IPv4 address in dotted-decimal form, e.g. 192.168.1.10
  PREFIX       prefix length 0-32 (default 24)
  HOST_INDEX   optional host offset within the subnet

Options:
  --json       print the result as JSON
  --no-class   skip the legacy classful annotation
  -h, --help   show this help";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub address: String,
    pub prefix: i32,
    pub host_index: Option<i64>,
    pub json: bool,
    pub options: CalcOptions,
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

/// Parse argv with the program name already stripped.
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut positional: Vec<String> = Vec::new();
    let mut json = false;
    let mut classify = true;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => json = true,
            "--no-class" => classify = false,
            // negative numbers stay positional so range validation reports them
            flag if flag.starts_with('-') && flag.parse::<i64>().is_err() => {
                return Err(format!("Unknown option: {flag}\n{USAGE}").into());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let address = positional
        .next()
        .ok_or_else(|| format!("Missing address argument\n{USAGE}"))?;
    if address.trim().is_empty() {
        return Err(CalcError::EmptyInput.into());
    }
    let prefix = match positional.next() {
        Some(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| CalcError::InvalidPrefixLength)?,
        None => DEFAULT_PREFIX,
    };
    let host_index = match positional.next() {
        Some(text) => Some(
            text.trim()
                .parse::<i64>()
                .map_err(|_| CalcError::InvalidHostIndex)?,
        ),
        None => None,
    };
    if positional.next().is_some() {
        return Err(format!("Too many arguments\n{USAGE}").into());
    }

    Ok(Command::Run(CliArgs {
        address,
        prefix,
        host_index,
        json,
        options: CalcOptions { classify },
    }))
}
