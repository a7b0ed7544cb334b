mod common;

use common::{at, create_test_repository, draft};
use dhobi_core::Error;
use dhobi_core::schedule::{self, ScheduleError};
use dhobi_core::types::Page;

/// Verify a weekly item cleaned on the 15th is next due on the 22nd.
#[test]
fn test_weekly_item_next_cleaning_date() {
    let (mut repo, _temp) = create_test_repository();

    let item = repo
        .create(draft("Blue T-Shirt", "shirt", "2024-01-15T10:30:00Z", 604_800))
        .unwrap();

    assert_eq!(item.next_cleaning_date, at("2024-01-22T10:30:00Z"));
}

/// Verify an overdue item is listed once `now` passes its next cleaning date.
#[test]
fn test_overdue_item_needs_cleaning() {
    let (mut repo, _temp) = create_test_repository();
    let item = repo
        .create(draft("Blue T-Shirt", "shirt", "2024-01-15T10:30:00Z", 604_800))
        .unwrap();

    let before = repo
        .list_needing_cleaning(at("2024-01-20T00:00:00Z"), Page::default())
        .unwrap();
    let after = repo
        .list_needing_cleaning(at("2024-01-23T00:00:00Z"), Page::default())
        .unwrap();

    assert!(before.is_empty());
    assert_eq!(after, vec![item.clone()]);
    assert!(schedule::is_due(item.next_cleaning_date, at("2024-01-23T00:00:00Z")));
}

/// Verify a zero interval makes an item due as soon as it is cleaned.
#[test]
fn test_zero_interval_is_immediately_due() {
    let (mut repo, _temp) = create_test_repository();
    let item = repo
        .create(draft("Gym Socks", "socks", "2024-03-01T08:00:00Z", 0))
        .unwrap();

    assert_eq!(item.next_cleaning_date, item.last_cleaned);
    let due = repo
        .list_needing_cleaning(at("2024-03-01T08:00:00Z"), Page::default())
        .unwrap();
    assert_eq!(due.len(), 1);
}

/// Verify recently-cleaned listings honor the default seven day window.
#[test]
fn test_recently_cleaned_window() {
    let (mut repo, _temp) = create_test_repository();
    repo.create(draft("Fresh", "shirt", "2024-05-09T12:00:00Z", 86_400))
        .unwrap();
    repo.create(draft("Stale", "shirt", "2024-04-20T12:00:00Z", 86_400))
        .unwrap();
    repo.create(draft("Edge", "shirt", "2024-05-03T12:00:00Z", 86_400))
        .unwrap();

    let recent = repo
        .list_recently_cleaned(at("2024-05-10T12:00:00Z"), None, Page::default())
        .unwrap();

    let names: Vec<_> = recent.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Fresh", "Edge"]);
}

/// Verify a negative interval is rejected on create.
#[test]
fn test_negative_interval_rejected() {
    let (mut repo, _temp) = create_test_repository();

    let result = repo.create(draft("Hat", "hat", "2024-01-01T00:00:00Z", -1));

    assert!(matches!(
        result,
        Err(Error::InvalidInterval(ScheduleError::NegativeInterval(-1)))
    ));
}
