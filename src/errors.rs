use crate::consts::EX_USAGE;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("{0}")]
    Usage(String),
    #[error("Failed to load file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV syntax is invalid: {0}")]
    CsvSyntax(#[from] csv::Error),
    #[error("CSV syntax is invalid: unterminated quote opened on line {line}")]
    UnterminatedQuote { line: u64 },
}

impl AppErrors {
    /// Every fatal error is reported as a usage-class failure.
    pub fn exit_code(&self) -> u8 {
        EX_USAGE
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,
    #[error("malformed integer part")]
    MalformedInt,
    #[error("malformed fractional part")]
    MalformedFrac,
    #[error("overflow")]
    Overflow,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("unrecognised date {0:?}")]
    Unrecognised(String),
    #[error("date out of range")]
    OutOfRange,
}

pub type AppResult<T> = Result<T, AppErrors>;
