//! The process-wide region table honours a configured dataset. Kept in its own
//! test binary so the first initialisation happens here.

use std::io::Write;
use tempfile::NamedTempFile;
use toolkit::config::settings::ToolkitSettings;
use toolkit::data::region_table::{global, init_global, UNKNOWN_REGION};
use toolkit::national_id::{all_province_codes, province_name};

#[test]
fn test_init_global_from_settings_then_read_only() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "049-050,ورامین").unwrap();

    let settings = ToolkitSettings {
        region_dataset: Some(file.path().to_path_buf()),
        ..ToolkitSettings::default()
    };
    let table = init_global(&settings);
    assert_eq!(table.len(), 2);

    assert_eq!(province_name("0499370899"), "ورامین");
    assert_eq!(province_name("1360000011"), UNKNOWN_REGION);
    assert_eq!(all_province_codes(), vec!["049".to_string(), "050".to_string()]);

    // A second initialisation does not replace the table.
    let table = init_global(&ToolkitSettings::default());
    assert_eq!(table.len(), 2);
    assert!(std::ptr::eq(table, global()));
}
