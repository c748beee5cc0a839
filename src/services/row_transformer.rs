use crate::consts::{AMOUNT_COLUMN, DATE_COLUMN, DESCRIPTION_COLUMN};
use crate::errors::{AmountParseError, DateParseError};
use crate::models::amount::Amount;
use crate::models::csv_models::statement_row::{InputRow, OutputLine};
use crate::models::output_format::OutputFormat;
use crate::models::statement_date::StatementDate;
use chrono::NaiveDate;

/// Why a statement row was left out of the converted file.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RowSkip {
    #[error("missing column {0}")]
    MissingColumn(&'static str),
    #[error("bad date: {0}")]
    BadDate(#[from] DateParseError),
    #[error("bad amount {value:?}: {source}")]
    BadAmount {
        value: String,
        #[source]
        source: AmountParseError,
    },
}

/// Converts one statement row into an output line.
///
/// # Arguments
/// * `row` - A row from the statement CSV, keyed by header.
/// * `format` - The target accounting format, which fixes the field order.
/// * `today` - Reference date used to resolve `yesterday`.
///
/// # Returns
/// * `Result<OutputLine, RowSkip>` - The converted line, or the reason the row is skipped.
pub fn transform_row(
    row: &InputRow,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<OutputLine, RowSkip> {
    let raw_date = row
        .get(DATE_COLUMN)
        .ok_or(RowSkip::MissingColumn(DATE_COLUMN))?;
    let date = StatementDate::parse(raw_date, today)?;

    let raw_amount = row
        .get(AMOUNT_COLUMN)
        .ok_or(RowSkip::MissingColumn(AMOUNT_COLUMN))?;
    let amount = Amount::parse_2dp(raw_amount).map_err(|source| RowSkip::BadAmount {
        value: raw_amount.to_string(),
        source,
    })?;

    let description = row
        .get(DESCRIPTION_COLUMN)
        .ok_or(RowSkip::MissingColumn(DESCRIPTION_COLUMN))?;

    Ok(OutputLine {
        date: date.to_string(),
        amount: amount.to_string(),
        description: description.to_string(),
        format,
    })
}
