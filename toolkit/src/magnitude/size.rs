// File size formatting and parsing over binary (1024) or decimal (1000) byte ladders.
use super::ladder::{select_unit, Rung};
use crate::error::{Result, ToolkitError};
use serde::{Deserialize, Serialize};
use shared::models::{NumberStyle, SizeMode, UnitStyle};
use shared::utils::persian_format::{format_decimal, to_ascii_digits, MAX_DECIMALS};

// 2^64, the first byte count a u64 cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
}

impl SizeUnit {
    pub fn persian_name(self) -> &'static str {
        match self {
            SizeUnit::Byte => "بایت",
            SizeUnit::Kilobyte => "کیلوبایت",
            SizeUnit::Megabyte => "مگابایت",
            SizeUnit::Gigabyte => "گیگابایت",
            SizeUnit::Terabyte => "ترابایت",
            SizeUnit::Petabyte => "پتابایت",
            SizeUnit::Exabyte => "اگزابایت",
        }
    }

    pub fn persian_abbreviation(self) -> &'static str {
        match self {
            SizeUnit::Byte => "ب",
            SizeUnit::Kilobyte => "ک\u{200C}ب",
            SizeUnit::Megabyte => "م\u{200C}ب",
            SizeUnit::Gigabyte => "گ\u{200C}ب",
            SizeUnit::Terabyte => "ت\u{200C}ب",
            SizeUnit::Petabyte => "پ\u{200C}ب",
            SizeUnit::Exabyte => "ا\u{200C}ب",
        }
    }

    pub fn english_abbreviation(self) -> &'static str {
        match self {
            SizeUnit::Byte => "B",
            SizeUnit::Kilobyte => "KB",
            SizeUnit::Megabyte => "MB",
            SizeUnit::Gigabyte => "GB",
            SizeUnit::Terabyte => "TB",
            SizeUnit::Petabyte => "PB",
            SizeUnit::Exabyte => "EB",
        }
    }

    pub fn label(self, style: UnitStyle) -> &'static str {
        match style {
            UnitStyle::PersianFull => self.persian_name(),
            UnitStyle::PersianShort => self.persian_abbreviation(),
            UnitStyle::English => self.english_abbreviation(),
        }
    }
}

pub const BINARY_LADDER: [Rung<SizeUnit>; 7] = [
    Rung::new(SizeUnit::Byte, 1),
    Rung::new(SizeUnit::Kilobyte, 1 << 10),
    Rung::new(SizeUnit::Megabyte, 1 << 20),
    Rung::new(SizeUnit::Gigabyte, 1 << 30),
    Rung::new(SizeUnit::Terabyte, 1 << 40),
    Rung::new(SizeUnit::Petabyte, 1 << 50),
    Rung::new(SizeUnit::Exabyte, 1 << 60),
];

pub const DECIMAL_LADDER: [Rung<SizeUnit>; 7] = [
    Rung::new(SizeUnit::Byte, 1),
    Rung::new(SizeUnit::Kilobyte, 1_000),
    Rung::new(SizeUnit::Megabyte, 1_000_000),
    Rung::new(SizeUnit::Gigabyte, 1_000_000_000),
    Rung::new(SizeUnit::Terabyte, 1_000_000_000_000),
    Rung::new(SizeUnit::Petabyte, 1_000_000_000_000_000),
    Rung::new(SizeUnit::Exabyte, 1_000_000_000_000_000_000),
];

pub fn ladder(mode: SizeMode) -> &'static [Rung<SizeUnit>] {
    match mode {
        SizeMode::Binary => &BINARY_LADDER,
        SizeMode::Decimal => &DECIMAL_LADDER,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SizeFormatOptions {
    pub mode: SizeMode,
    pub number_style: NumberStyle,
    pub unit_style: UnitStyle,
    /// Rounding precision of the scaled value.
    pub decimals: usize,
    /// Keep trailing zeros, e.g. "1.00" instead of "1".
    pub fixed_decimals: bool,
}

impl Default for SizeFormatOptions {
    fn default() -> Self {
        SizeFormatOptions {
            mode: SizeMode::Binary,
            number_style: NumberStyle::Persian,
            unit_style: UnitStyle::PersianFull,
            decimals: 2,
            fixed_decimals: false,
        }
    }
}

pub fn scale_value(bytes: u64, rung: &Rung<SizeUnit>) -> f64 {
    bytes as f64 / rung.scale as f64
}

// Picks the rung for `bytes`, moving up one when rounding to `decimals` places
// would carry the value to the next unit's threshold (1023.999 KB → 1 MB).
fn rung_for(bytes: u64, ladder: &[Rung<SizeUnit>], decimals: usize) -> Result<&Rung<SizeUnit>> {
    let rung = select_unit(bytes, ladder)
        .ok_or_else(|| ToolkitError::InvalidInput("Size ladder is empty".to_string()))?;
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let rounded = (scale_value(bytes, rung) * factor).round() / factor;

    match ladder.iter().find(|next| next.scale > rung.scale) {
        Some(next) if rounded * rung.scale as f64 >= next.scale as f64 => Ok(next),
        _ => Ok(rung),
    }
}

pub fn format(bytes: i64, options: &SizeFormatOptions) -> Result<String> {
    let bytes = u64::try_from(bytes).map_err(|_| ToolkitError::NegativeSize(bytes))?;
    let rung = rung_for(bytes, ladder(options.mode), options.decimals)?;
    let number = format_decimal(
        scale_value(bytes, rung),
        options.decimals,
        options.fixed_decimals,
        options.number_style,
    );
    Ok(format!("{} {}", number, rung.unit.label(options.unit_style)))
}

/// Binary ladder, Persian digits and full unit names, two decimal places.
pub fn format_human_readable(bytes: i64) -> Result<String> {
    format(bytes, &SizeFormatOptions::default())
}

pub fn format_with_words(bytes: i64) -> Result<String> {
    let options = SizeFormatOptions {
        number_style: NumberStyle::Words,
        ..SizeFormatOptions::default()
    };
    format(bytes, &options)
}

/// Formats each count with [`format_human_readable`]. `None` and an empty slice
/// both give an empty list.
pub fn format_multiple(sizes: Option<&[i64]>) -> Result<Vec<String>> {
    sizes
        .unwrap_or_default()
        .iter()
        .map(|&bytes| format_human_readable(bytes))
        .collect()
}

/// Parses text such as "۱٫۵ کیلوبایت" into bytes on the binary ladder.
/// Blank input parses as zero.
pub fn parse(text: &str) -> Result<u64> {
    parse_with_mode(text, SizeMode::Binary)
}

pub fn parse_with_mode(text: &str, mode: SizeMode) -> Result<u64> {
    let text = to_ascii_digits(text.trim());
    if text.is_empty() {
        return Ok(0);
    }

    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(split);
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ToolkitError::SizeParseError(format!("No numeric value in '{}'", text)));
    }
    let value: f64 = number
        .parse()
        .map_err(|e| ToolkitError::SizeParseError(format!("Invalid number '{}': {}", number, e)))?;

    let unit_name = rest.trim();
    let rung = ladder(mode)
        .iter()
        .find(|rung| rung.unit.persian_name() == unit_name)
        .ok_or_else(|| ToolkitError::SizeParseError(format!("Unknown size unit '{}'", unit_name)))?;

    let bytes = (value * rung.scale as f64).round();
    // Negated so NaN and infinity are rejected too.
    if !(bytes < U64_LIMIT) {
        return Err(ToolkitError::SizeParseError(format!("Size '{}' is out of range", text)));
    }
    Ok(bytes as u64)
}
