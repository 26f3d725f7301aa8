use serde::{Deserialize, Serialize};

/// How numeric values are written out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// Persian digits (۰-۹) with the Persian decimal separator.
    #[default]
    Persian,
    /// ASCII digits.
    Latin,
    /// Spelled out in Persian words.
    Words,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitStyle {
    #[default]
    PersianFull,
    PersianShort,
    English,
}

/// Base of the byte ladder: 1024 (binary) or 1000 (decimal).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    #[default]
    Binary,
    Decimal,
}

impl SizeMode {
    pub fn base(self) -> u64 {
        match self {
            SizeMode::Binary => 1024,
            SizeMode::Decimal => 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeStyle {
    #[default]
    Numeric,
    Words,
    Short,
    Fuzzy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Past,
    Future,
}
