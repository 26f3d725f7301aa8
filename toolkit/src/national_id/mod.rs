//! Iranian national ID (کد ملی) validation, normalization and formatting.
//!
//! Validation is a predicate: malformed input yields `false` or `None`, never an
//! error. Only [`generate_test_id`], which produces a value for later use,
//! reports bad arguments as [`ToolkitError::InvalidInput`].

use crate::data::region_table::{self, RegionTable, UNKNOWN_REGION};
use crate::error::{Result, ToolkitError};
use serde::Serialize;
use shared::utils::persian_format::{to_ascii_digits, to_persian_digits};

const ID_LENGTH: usize = 10;
const WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Every derived attribute of one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalIdDetails {
    pub raw: String,
    pub normalized: String,
    pub valid: bool,
    pub province_code: String,
    pub province_name: String,
    pub formatted: String,
}

/// Trims, converts Persian/Arabic digits to ASCII and strips hyphens and spaces.
/// Returns `None` unless exactly ten ASCII digits remain.
pub fn normalize(input: &str) -> Option<String> {
    let digits: String = to_ascii_digits(input.trim())
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    (digits.len() == ID_LENGTH && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

// Caller guarantees ASCII digits.
fn digits_of(s: &str) -> Vec<u32> {
    s.bytes().map(|b| u32::from(b - b'0')).collect()
}

// Remainders 0 and 1 are the check digit itself; otherwise 11 - remainder.
fn check_digit(body: &[u32]) -> u32 {
    let sum: u32 = body.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        remainder
    } else {
        11 - remainder
    }
}

fn all_same(digits: &[u32]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

pub fn is_valid(input: &str) -> bool {
    let Some(id) = normalize(input) else {
        tracing::debug!(reason = "shape", "National ID rejected");
        return false;
    };

    let digits = digits_of(&id);
    if all_same(&digits) {
        tracing::debug!(reason = "repeated_digits", "National ID rejected");
        return false;
    }

    let valid = check_digit(&digits[..ID_LENGTH - 1]) == digits[ID_LENGTH - 1];
    if !valid {
        tracing::debug!(reason = "checksum", "National ID rejected");
    }
    valid
}

/// `XXX-XXXXXX-X`. Only the shape is checked, not the check digit.
pub fn format(input: &str) -> Option<String> {
    normalize(input).map(|id| format!("{}-{}-{}", &id[..3], &id[3..9], &id[9..]))
}

pub fn format_localized(input: &str) -> Option<String> {
    format(input).map(|formatted| to_persian_digits(&formatted))
}

/// First three digits of a well-shaped identifier.
pub fn province_code(input: &str) -> Option<String> {
    normalize(input).map(|id| id[..3].to_string())
}

pub fn province_name_in<'a>(table: &'a RegionTable, input: &str) -> &'a str {
    province_code(input).map_or(UNKNOWN_REGION, |code| table.name(&code))
}

/// Looks the region up in the process-wide table.
pub fn province_name(input: &str) -> &'static str {
    province_name_in(region_table::global(), input)
}

pub fn all_province_codes() -> Vec<String> {
    region_table::global().codes().map(str::to_string).collect()
}

/// Builds a checksum-valid identifier from a 3-digit region code and a 6-digit body.
///
/// For generating test fixtures only. The result is arithmetically valid but is not
/// an issued identifier and must never be used to identify a person.
///
/// Bodies whose check digit would make all ten digits identical are refused, since
/// [`is_valid`] rejects such identifiers.
pub fn generate_test_id(region_code: &str, unique_number: &str) -> Result<String> {
    let region = digit_field(region_code, 3, "Region code")?;
    let unique = digit_field(unique_number, 6, "Unique number")?;

    let body = format!("{}{}", region, unique);
    let mut digits = digits_of(&body);
    let check = check_digit(&digits);
    digits.push(check);
    if all_same(&digits) {
        return Err(ToolkitError::InvalidInput(format!(
            "'{}' would produce a repeated-digit identifier",
            body
        )));
    }

    Ok(format!("{}{}", body, check))
}

fn digit_field(input: &str, len: usize, field: &str) -> Result<String> {
    let value = to_ascii_digits(input.trim());
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ToolkitError::InvalidInput(format!(
            "{} must be exactly {} digits, got '{}'",
            field, len, input
        )));
    }
    Ok(value)
}

/// Validates each identifier, keeping input order and duplicates.
pub fn validate_batch<S: AsRef<str>>(ids: &[S]) -> Vec<(String, bool)> {
    ids.iter()
        .map(|id| (id.as_ref().to_string(), is_valid(id.as_ref())))
        .collect()
}

pub fn describe(input: &str, table: &RegionTable) -> Option<NationalIdDetails> {
    let normalized = normalize(input)?;
    let province_code = normalized[..3].to_string();
    Some(NationalIdDetails {
        raw: input.to_string(),
        valid: is_valid(&normalized),
        province_name: table.name(&province_code).to_string(),
        formatted: format!("{}-{}-{}", &normalized[..3], &normalized[3..9], &normalized[9..]),
        province_code,
        normalized,
    })
}
