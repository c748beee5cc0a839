use crate::consts::{INPUT_DATE_FORMAT, OUTPUT_DATE_FORMAT};
use crate::errors::DateParseError;
use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

/// The only relative term a statement may use instead of a literal date.
const YESTERDAY: &str = "yesterday";

/// A booking date taken from a statement row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatementDate(pub NaiveDate);

impl StatementDate {
    /// Resolves a statement date token against `today`.
    ///
    /// Literal dates such as `16 Feb 2023` take priority; otherwise the token
    /// must be `yesterday` in any letter case.
    pub fn parse(s: &str, today: NaiveDate) -> Result<StatementDate, DateParseError> {
        if let Ok(date) = NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT) {
            return Ok(StatementDate(date));
        }
        if s.eq_ignore_ascii_case(YESTERDAY) {
            return today
                .pred_opt()
                .map(StatementDate)
                .ok_or(DateParseError::OutOfRange);
        }
        Err(DateParseError::Unrecognised(s.to_string()))
    }
}

impl Display for StatementDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(OUTPUT_DATE_FORMAT))
    }
}
