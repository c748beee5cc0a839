use crate::consts::CONVERTED_SUFFIX;
use crate::errors::{AppErrors, AppResult};
use crate::models::output_format::OutputFormat;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Everything a conversion run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Reference date for relative statement dates.
    pub today: NaiveDate,
}

impl ConversionConfig {
    pub fn new(
        input: PathBuf,
        output: Option<PathBuf>,
        format: OutputFormat,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let output = match output {
            Some(path) => path,
            None => converted_path(&input)?,
        };
        Ok(Self {
            input,
            output,
            format,
            today,
        })
    }
}

/// `dir/statement.csv` becomes `dir/statement_converted.csv`.
pub fn converted_path(input: &Path) -> AppResult<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        AppErrors::Usage(format!(
            "cannot derive an output path from {}",
            input.display()
        ))
    })?;
    let mut name = stem.to_os_string();
    name.push(CONVERTED_SUFFIX);
    Ok(input.with_file_name(name))
}
