use crate::consts::AMOUNT_DP;
use crate::errors::AmountParseError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A statement amount, always carried at two decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a decimal with optional `,` thousands separators and a `.` decimal point;
    /// rounds half away from zero to two places.
    pub fn parse_2dp(s: &str) -> Result<Amount, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let neg = s.starts_with('-');
        let s = if neg || s.starts_with('+') {
            &s[1..]
        } else {
            s
        };

        let (int_src, frac_src) = match s.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (s, None),
        };

        let int_digits = ungroup(int_src)?;
        let frac_digits = match frac_src {
            Some(f) if f.bytes().all(|b| b.is_ascii_digit()) => f,
            Some(_) => return Err(AmountParseError::MalformedFrac),
            None => "",
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(AmountParseError::MalformedInt);
        }

        let canonical = format!(
            "{}{}.{}",
            if neg { "-" } else { "" },
            if int_digits.is_empty() { "0" } else { &int_digits },
            if frac_digits.is_empty() { "0" } else { frac_digits },
        );
        let value = Decimal::from_str(&canonical).map_err(|_| AmountParseError::Overflow)?;
        Ok(Amount(to_fixed_dp(value)))
    }
}

/// Strips thousands separators, rejecting empty groups such as `1,,000` or `,5`.
fn ungroup(src: &str) -> Result<String, AmountParseError> {
    if src.is_empty() {
        return Ok(String::new());
    }
    let mut digits = String::with_capacity(src.len());
    for group in src.split(',') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::MalformedInt);
        }
        digits.push_str(group);
    }
    Ok(digits)
}

fn to_fixed_dp(value: Decimal) -> Decimal {
    let mut fixed = value.round_dp_with_strategy(AMOUNT_DP, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(AMOUNT_DP);
    if fixed.is_zero() {
        fixed.set_sign_positive(true);
    }
    fixed
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse_2dp(s)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
