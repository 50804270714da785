use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::{Field, GoldError};

/// Trait for converting various types into `Decimal` for price calculations.
///
/// Lets callers pass `i32`, `f64`, `&str`, etc. directly into builders
/// without wrapping them in `dec!()` or `Decimal::from()`.
pub trait IntoGoldDecimal {
    fn into_gold_decimal(self) -> Result<Decimal, GoldError>;
}

impl IntoGoldDecimal for Decimal {
    fn into_gold_decimal(self) -> Result<Decimal, GoldError> {
        Ok(self)
    }
}

macro_rules! impl_into_gold_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoGoldDecimal for $t {
                fn into_gold_decimal(self) -> Result<Decimal, GoldError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_gold_decimal_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_gold_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoGoldDecimal for $t {
                fn into_gold_decimal(self) -> Result<Decimal, GoldError> {
                    // Shortest round-trip text, so 1.9_f64 becomes 1.9 and not 1.899999...
                    Decimal::from_str(&self.to_string())
                        .or_else(|_| Decimal::from_scientific(&format!("{:e}", self)))
                        .map_err(|_| GoldError::invalid_input("number", format!("Invalid float value: {}", self)))
                }
            }
        )*
    };
}

impl_into_gold_decimal_float!(f32, f64);

impl IntoGoldDecimal for &str {
    fn into_gold_decimal(self) -> Result<Decimal, GoldError> {
        Decimal::from_str(self.trim())
            .map_err(|e| GoldError::invalid_input("number", format!("Invalid string format: {}", e)))
    }
}

impl IntoGoldDecimal for String {
    fn into_gold_decimal(self) -> Result<Decimal, GoldError> {
        self.as_str().into_gold_decimal()
    }
}

/// A form field after lenient reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Number(Decimal),
    /// Well-formed number whose magnitude does not fit in a `Decimal`.
    OutOfRange { negative: bool },
}

impl FieldValue {
    /// True for a negative number other than `-0`.
    pub fn is_negative(&self) -> bool {
        match self {
            FieldValue::Number(value) => value.is_sign_negative() && !value.is_zero(),
            FieldValue::OutOfRange { negative } => *negative,
        }
    }

    /// The number, or an overflow error naming `field`.
    pub fn to_decimal(self, field: Field) -> Result<Decimal, GoldError> {
        match self {
            FieldValue::Number(value) => Ok(value),
            FieldValue::OutOfRange { .. } => {
                Err(GoldError::overflow(format!("read {}", field)))
            }
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

/// Reads a form field the way a browser number parser does: leading
/// whitespace is skipped and the longest numeric prefix is used.
///
/// Text with no numeric prefix (empty, `"abc"`, `"."`) reads as zero. A
/// prefix too large for `Decimal` keeps its sign as
/// [`FieldValue::OutOfRange`]; one too small rounds to zero.
pub fn parse_field(text: &str) -> FieldValue {
    let prefix = numeric_prefix(text.trim_start());
    if prefix.is_empty() {
        return FieldValue::Number(Decimal::ZERO);
    }

    let negative = prefix.starts_with('-');
    let (mantissa, exponent) = match prefix.find(['e', 'E']) {
        Some(at) => (&prefix[..at], Some(&prefix[at + 1..])),
        None => (prefix, None),
    };

    // ".5" and "-.5" need an explicit leading zero, "5." and "5.e3" lose the dot.
    let mantissa = mantissa.trim_end_matches('.');
    let (sign, unsigned) = match mantissa.strip_prefix(['+', '-']) {
        Some(rest) => (&mantissa[..1], rest),
        None => ("", mantissa),
    };
    let normalized = if unsigned.starts_with('.') {
        format!("{}0{}", sign, unsigned)
    } else {
        mantissa.to_string()
    };

    let Ok(value) = Decimal::from_str(&normalized) else {
        return FieldValue::OutOfRange { negative };
    };

    match exponent {
        None => FieldValue::Number(value),
        Some(exponent) => match scale_by_power_of_ten(value, exponent) {
            Some(scaled) => FieldValue::Number(scaled),
            None => FieldValue::OutOfRange { negative },
        },
    }
}

/// `value * 10^exponent`, or `None` when the result overflows.
fn scale_by_power_of_ten(value: Decimal, exponent: &str) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }

    let (shrink, digits) = match exponent.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, exponent.trim_start_matches('+')),
    };
    // 64 steps take any non-zero Decimal past MAX or down to zero.
    let steps = digits.parse::<u32>().unwrap_or(u32::MAX).min(64);

    let mut scaled = value;
    for _ in 0..steps {
        if shrink {
            scaled = scaled.checked_div(Decimal::TEN)?;
            if scaled.is_zero() {
                break;
            }
        } else {
            scaled = scaled.checked_mul(Decimal::TEN)?;
        }
    }
    Some(scaled)
}

/// `[+-]? digits* (. digits*)? ([eE] [+-]? digits+)?`, requiring at least one
/// mantissa digit. Returns `""` when there is none.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        i = j;
    }

    if mantissa_digits == 0 {
        return "";
    }

    let mut end = i;
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    &s[..end]
}
