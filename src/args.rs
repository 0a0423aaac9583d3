use bka::ids::{Iban, Ssn};
use bka::{Money, Result};

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

const USAGE: &str = "usage: bank-account <operations.csv> <iban> <opening-balance> [holder-ssn]";

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug)]
pub struct InputArgs {
    pub input_path: PathBuf,
    pub iban: Iban,
    pub opening_balance: Money,
    pub holder_ssn: Option<Ssn>,
}

/// Parses the input arguments: the operations file, the account to open, and optionally its holder
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = env::args().skip(1);

    let filename = args
        .next()
        .ok_or_else(|| InputArgsError::Parse(format!("First argument must be the input file. {USAGE}")))?;

    let input_path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    let iban = args
        .next()
        .ok_or_else(|| InputArgsError::Parse(format!("Second argument must be the IBAN. {USAGE}")))?;

    let opening_balance = args.next().ok_or_else(|| {
        InputArgsError::Parse(format!("Third argument must be the opening balance. {USAGE}"))
    })?;
    let opening_balance: Money = opening_balance
        .parse()
        .context("Opening balance is not a valid amount")?;

    let holder_ssn = Ssn::parse_optional(args.next().as_deref());

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument {extra:?}. {USAGE}")))?
    }

    Ok(InputArgs {
        input_path,
        iban: Iban::from(iban.as_str()),
        opening_balance,
        holder_ssn,
    })
}
