use crate::errors::{AppErrors, AppResult};
use crate::models::config::ConversionConfig;
use crate::models::csv_models::statement_row::InputRow;
use crate::models::output_format::OutputFormat;
use crate::services::row_transformer::transform_row;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Outcome of a successful conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub rows_read: usize,
    pub rows_converted: usize,
}

impl ConversionReport {
    #[inline]
    pub fn rows_skipped(&self) -> usize {
        self.rows_read - self.rows_converted
    }
}

/// Converted document text plus the number of lines it holds.
#[derive(Debug, Default)]
pub struct OutputDocument {
    pub text: String,
    pub lines: usize,
}

/// Converts a statement CSV file and writes the result.
///
/// Every row is read before any is converted, and the output file is only
/// touched once the whole document is built.
///
/// # Arguments
/// * `config` - Input and output paths, target format and reference date.
///
/// # Returns
/// * `AppResult<ConversionReport>` - Row counts and the path written, or an `AppErrors`
///   variant if the input cannot be read or the output cannot be written.
pub fn run_conversion(config: &ConversionConfig) -> AppResult<ConversionReport> {
    let rows = read_rows_from_path(&config.input)?;
    let document = convert_rows(&rows, config.format, config.today);

    let report = ConversionReport {
        output: config.output.clone(),
        rows_read: rows.len(),
        rows_converted: document.lines,
    };
    if report.rows_skipped() > 0 {
        warn!(
            "skipped {} of {} rows with missing or unparseable fields",
            report.rows_skipped(),
            report.rows_read
        );
    }

    write_atomically(&config.output, &document.text)?;
    info!(
        "wrote {} rows to {}",
        report.rows_converted,
        report.output.display()
    );
    Ok(report)
}

/// Reads all rows of a statement CSV file, in file order.
pub fn read_rows_from_path(path: &Path) -> AppResult<Vec<InputRow>> {
    let bytes = fs::read(path).map_err(|source| AppErrors::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(&bytes)
}

/// Reads all rows of a headed CSV document. Records whose length differs from
/// the header, and quoted fields left open at the end of input, are rejected.
pub fn read_rows(input: &[u8]) -> AppResult<Vec<InputRow>> {
    ensure_quotes_closed(input)?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(input);
    let rows = rdr
        .deserialize::<InputRow>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!("read {} statement rows", rows.len());
    Ok(rows)
}

/// Fails when a quoted field is still open at end of input. The csv reader
/// would otherwise swallow every following record into that field.
fn ensure_quotes_closed(input: &[u8]) -> AppResult<()> {
    let mut line = 1;
    let mut open_since = None;
    let mut at_field_start = true;
    let mut bytes = input.iter().peekable();

    while let Some(&b) = bytes.next() {
        if b == b'\n' {
            line += 1;
        }
        match open_since {
            Some(_) if b == b'"' => {
                // `""` is an escaped quote inside the field
                if bytes.next_if(|&&next| next == b'"').is_none() {
                    open_since = None;
                }
            }
            Some(_) => {}
            None if at_field_start && b == b'"' => {
                open_since = Some(line);
                at_field_start = false;
            }
            None => at_field_start = matches!(b, b',' | b'\n' | b'\r'),
        }
    }

    match open_since {
        Some(line) => Err(AppErrors::UnterminatedQuote { line }),
        None => Ok(()),
    }
}

/// Converts rows in order, dropping any that cannot be normalized.
pub fn convert_rows(rows: &[InputRow], format: OutputFormat, today: NaiveDate) -> OutputDocument {
    let mut document = OutputDocument::default();
    for (idx, row) in rows.iter().enumerate() {
        match transform_row(row, format, today) {
            Ok(line) => {
                document.text.push_str(&line.to_string());
                document.lines += 1;
            }
            Err(reason) => debug!("skip record {}: {reason}", idx + 1),
        }
    }
    document
}

/// Writes `contents` to `path` via a sibling temp file, so the destination is
/// either fully replaced or left as it was. An existing destination keeps its
/// permissions; a new one gets the usual umask-derived mode.
pub fn write_atomically(path: &Path, contents: &str) -> AppResult<()> {
    let write_err = |source: std::io::Error| AppErrors::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(0o666));
    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
