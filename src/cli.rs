use crate::errors::AppResult;
use crate::models::config::ConversionConfig;
use crate::models::output_format::OutputFormat;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CSV file.
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Output format, freeagent or quickbooks.
    #[arg(long, value_enum)]
    pub format: OutputFormat,

    /// Path to the output CSV file [default: <file>_converted.csv].
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self, today: NaiveDate) -> AppResult<ConversionConfig> {
        ConversionConfig::new(self.file, self.output, self.format, today)
    }
}
