// Region code lookup table for national IDs, read from a `code,name` dataset.
use crate::config::settings::ToolkitSettings;
use crate::error::{Result, ToolkitError};
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use once_cell::sync::OnceCell;
use shared::utils::persian_format::to_ascii_digits;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Returned for region codes missing from the table.
pub const UNKNOWN_REGION: &str = "نامشخص";

const EMBEDDED_DATASET: &str = include_str!("../../data/regions.csv");

static GLOBAL: OnceCell<RegionTable> = OnceCell::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionTable {
    entries: BTreeMap<String, String>,
}

impl RegionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `code,name` records. A code field may join several codes with `-`,
    /// each mapping to the same name. Lines starting with `#` are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader);

        let mut entries = BTreeMap::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = record.position().map_or(idx as u64 + 1, |pos| pos.line());

            let (codes, name) = match (record.get(0), record.get(1)) {
                (Some(codes), Some(name)) if record.len() == 2 && !name.is_empty() => (codes, name),
                _ => {
                    return Err(ToolkitError::DatasetFormatError(format!(
                        "Expected 'code,name' at line {}",
                        line
                    )))
                }
            };

            for code in codes.split('-') {
                let code = to_ascii_digits(code.trim());
                if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ToolkitError::DatasetFormatError(format!(
                        "Invalid region code '{}' at line {}",
                        code, line
                    )));
                }
                entries.insert(code, name.to_string());
            }
        }

        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open region dataset '{}'", path.display()))?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), codes = table.len(), "Loaded region dataset");
        Ok(table)
    }

    /// Like [`RegionTable::load`], but a missing or malformed dataset yields an empty table.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Region dataset unavailable, using empty table");
            Self::empty()
        })
    }

    /// The dataset compiled into the crate.
    pub fn embedded() -> Self {
        match Self::from_reader(EMBEDDED_DATASET.as_bytes()) {
            Ok(table) => {
                tracing::debug!(codes = table.len(), "Loaded embedded region dataset");
                table
            }
            Err(e) => {
                tracing::warn!(error = %e, "Embedded region dataset is malformed, using empty table");
                Self::empty()
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn name(&self, code: &str) -> &str {
        self.get(code).unwrap_or(UNKNOWN_REGION)
    }

    /// Codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide table, initialised from the embedded dataset on first use.
pub fn global() -> &'static RegionTable {
    GLOBAL.get_or_init(RegionTable::embedded)
}

/// Initialises the process-wide table from `settings`. Only the first initialisation
/// takes effect; later calls return the existing table.
pub fn init_global(settings: &ToolkitSettings) -> &'static RegionTable {
    let mut initialised = false;
    let table = GLOBAL.get_or_init(|| {
        initialised = true;
        match &settings.region_dataset {
            Some(path) => RegionTable::load_or_empty(path),
            None => RegionTable::embedded(),
        }
    });
    if !initialised {
        tracing::warn!("Region table already initialised, ignoring settings");
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_dataset(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_from_reader_expands_hyphenated_codes() {
        let data = "\
# comment line
001-002-003,تهران مرکزی
136 , تبریز";
        let table = RegionTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.name("002"), "تهران مرکزی");
        assert_eq!(table.name("136"), "تبریز");
        assert_eq!(table.codes().collect::<Vec<_>>(), vec!["001", "002", "003", "136"]);
    }

    #[test]
    fn test_from_reader_accepts_persian_digit_codes() {
        let table = RegionTable::from_reader("۱۳۶,تبریز".as_bytes()).unwrap();
        assert_eq!(table.get("136"), Some("تبریز"));
    }

    #[test]
    fn test_unknown_code_returns_sentinel() {
        let table = RegionTable::from_reader("136,تبریز".as_bytes()).unwrap();
        assert_eq!(table.name("999"), UNKNOWN_REGION);
    }

    #[test]
    fn test_from_reader_rejects_bad_code() {
        let result = RegionTable::from_reader("13,تبریز".as_bytes());
        let err = result.unwrap_err();
        assert!(matches!(err, ToolkitError::DatasetFormatError(_)));
        assert!(err.to_string().contains("Invalid region code '13' at line 1"));
    }

    #[test]
    fn test_from_reader_rejects_missing_name() {
        let result = RegionTable::from_reader("136".as_bytes());
        assert!(result.unwrap_err().to_string().contains("Expected 'code,name'"));
    }

    #[test]
    fn test_from_reader_unequal_columns_is_csv_error() {
        let result = RegionTable::from_reader("136,تبریز\n137,تبریز,extra".as_bytes());
        assert!(matches!(result, Err(ToolkitError::CsvSystemError { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let file = create_test_dataset("092-093-094,مشهد\n127,اصفهان");
        let table = RegionTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.name("093"), "مشهد");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = RegionTable::load("non_existent_regions.csv");
        assert!(result.unwrap_err().to_string().contains("Failed to open region dataset"));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let table = RegionTable::load_or_empty("non_existent_regions.csv");
        assert!(table.is_empty());
        assert_eq!(table.name("136"), UNKNOWN_REGION);
    }

    #[test]
    fn test_embedded_dataset_parses() {
        let table = RegionTable::embedded();
        assert!(!table.is_empty());
        assert_eq!(table.name("136"), "تبریز");
        assert_eq!(table.name("001"), "تهران مرکزی");
    }

    #[test]
    fn test_global_table_is_populated() {
        assert_eq!(global().name("127"), "اصفهان");
    }
}
