use clap::ValueEnum;

/// Accounting package the converted file is imported into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bank statement upload: date, amount, description.
    #[value(name = "freeagent")]
    FreeAgent,
    /// Bank transaction import: date, description, amount.
    #[value(name = "quickbooks")]
    QuickBooks,
}

impl OutputFormat {
    /// Orders the normalized fields for this format.
    pub fn arrange<'a>(self, date: &'a str, amount: &'a str, description: &'a str) -> [&'a str; 3] {
        match self {
            OutputFormat::FreeAgent => [date, amount, description],
            OutputFormat::QuickBooks => [date, description, amount],
        }
    }
}
