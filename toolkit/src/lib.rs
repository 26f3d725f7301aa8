// Toolkit library root: Iranian national ID validation plus relative-time and
// file-size formatting, rendered for the Persian locale.

pub mod config;
pub mod data;
pub mod error;
pub mod magnitude;
pub mod national_id;

pub use error::{Result, ToolkitError};
pub use shared::models::{Direction, NumberStyle, SizeMode, TimeStyle, UnitStyle};
