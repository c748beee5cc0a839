use crate::models::output_format::OutputFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// As read from the bank statement CSV, keyed by header name.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct InputRow(HashMap<String, String>);

impl InputRow {
    #[inline]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        InputRow(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// As written to the converted file. Fields are emitted verbatim, without quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub date: String,
    pub amount: String,
    pub description: String,
    pub format: OutputFormat,
}

impl Display for OutputLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self
            .format
            .arrange(&self.date, &self.amount, &self.description);
        writeln!(f, "{}", fields.join(","))
    }
}
