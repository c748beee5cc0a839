/// Exit code for invalid invocations and unrecoverable input/output errors (`EX_USAGE`).
pub const EX_USAGE: u8 = 64;

/// Input date layout, e.g. `16 Feb 2023`.
pub const INPUT_DATE_FORMAT: &str = "%d %b %Y";

/// Output date layout, e.g. `16/02/2023`.
pub const OUTPUT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Number of fractional digits written for every amount.
pub const AMOUNT_DP: u32 = 2;

/// Appended to the input file stem when no output path is given.
pub const CONVERTED_SUFFIX: &str = "_converted.csv";

pub const DATE_COLUMN: &str = "Date";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const DESCRIPTION_COLUMN: &str = "Description";
