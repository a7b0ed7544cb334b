#![allow(dead_code)]

use chrono::DateTime;
use dhobi_core::ClothingRepository;
use dhobi_core::store::RedbStore;
use dhobi_core::types::{Config, ItemDraft, ScheduleConfig};
use std::time::SystemTime;
use tempfile::TempDir;

pub fn create_test_repository() -> (ClothingRepository<RedbStore>, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let repo = open_repository(&temp_dir);
    (repo, temp_dir)
}

pub fn open_repository(temp_dir: &TempDir) -> ClothingRepository<RedbStore> {
    let config = Config {
        base_path: temp_dir.path().to_path_buf(),
        schedule: ScheduleConfig::default(),
    };
    ClothingRepository::open(config).unwrap()
}

/// Parses an RFC 3339 timestamp.
pub fn at(rfc3339: &str) -> SystemTime {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
}

pub fn draft(name: &str, item_type: &str, last_cleaned: &str, every: i64) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        item_type: item_type.to_string(),
        image: String::new(),
        last_cleaned: at(last_cleaned),
        cleaning_interval_seconds: every,
    }
}
