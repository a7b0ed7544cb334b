mod common;

use common::{at, create_test_repository, draft, open_repository};
use dhobi_core::Error;
use dhobi_core::types::{ItemType, Page};

/// Verify a created item can be fetched by id after reopening the database.
#[test]
fn test_items_survive_reopen() {
    let (mut repo, temp) = create_test_repository();
    let created = repo
        .create(draft("Linen Shirt", "shirt", "2024-02-01T09:00:00Z", 172_800))
        .unwrap();
    drop(repo);

    let repo = open_repository(&temp);

    assert_eq!(repo.get(created.id).unwrap(), created);
}

/// Verify `get` on an unknown id is `NotFound`.
#[test]
fn test_get_unknown_id() {
    let (repo, _temp) = create_test_repository();
    let id = "99".parse().unwrap();

    assert!(matches!(repo.get(id), Err(Error::NotFound(missing)) if missing == id));
}

/// Verify listing groups items under their exact type.
#[test]
fn test_list_all_grouped() {
    let (mut repo, _temp) = create_test_repository();
    repo.create(draft("Tee", "shirt", "2024-01-01T00:00:00Z", 10))
        .unwrap();
    repo.create(draft("Chinos", "pants", "2024-01-01T00:00:00Z", 10))
        .unwrap();
    repo.create(draft("Polo", "shirt", "2024-01-01T00:00:00Z", 10))
        .unwrap();

    let grouped = repo.list_all(Page::default()).unwrap();
    let shirt = ItemType::try_new("shirt".to_string()).unwrap();

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&shirt].len(), 2);
}

/// Verify name search matches substrings regardless of case.
#[test]
fn test_search_by_name() {
    let (mut repo, _temp) = create_test_repository();
    repo.create(draft("Blue T-Shirt", "shirt", "2024-01-01T00:00:00Z", 10))
        .unwrap();
    repo.create(draft("Red Scarf", "accessory", "2024-01-01T00:00:00Z", 10))
        .unwrap();

    let found = repo.search_by_name("t-sHiRt", Page::default()).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name.as_str(), "Blue T-Shirt");
}

/// Verify a bulk interval update rewrites every item of the type from its own
/// `last_cleaned`.
#[test]
fn test_update_interval_for_type() {
    let (mut repo, temp) = create_test_repository();
    let cleaned = [
        "2024-01-01T00:00:00Z",
        "2024-01-05T00:00:00Z",
        "2024-01-09T00:00:00Z",
    ];
    let shirts: Vec<_> = cleaned
        .iter()
        .map(|last| repo.create(draft("Tee", "shirt", last, 604_800)).unwrap())
        .collect();
    let pants = repo
        .create(draft("Jeans", "pants", "2024-01-01T00:00:00Z", 604_800))
        .unwrap();

    let outcome = repo.update_interval_for_type("shirt", 259_200).unwrap();
    assert_eq!(outcome.modified_count, 3);
    drop(repo);

    let repo = open_repository(&temp);
    let expected = [
        "2024-01-04T00:00:00Z",
        "2024-01-08T00:00:00Z",
        "2024-01-12T00:00:00Z",
    ];
    for (shirt, next) in shirts.iter().zip(expected) {
        let stored = repo.get(shirt.id).unwrap();
        assert_eq!(stored.cleaning_interval.into_inner(), 259_200);
        assert_eq!(stored.next_cleaning_date, at(next));
    }
    assert_eq!(repo.get(pants.id).unwrap(), pants);
}

/// Verify a bulk update over a type with no items reports zero.
#[test]
fn test_update_interval_for_missing_type() {
    let (mut repo, _temp) = create_test_repository();
    repo.create(draft("Tee", "shirt", "2024-01-01T00:00:00Z", 10))
        .unwrap();

    let outcome = repo.update_interval_for_type("hat", 0).unwrap();

    assert_eq!(outcome.modified_count, 0);
    assert_eq!(outcome.item_type, "hat");
}

/// Verify a single interval update keeps `last_cleaned` and moves the item
/// in and out of the due listing.
#[test]
fn test_update_interval_changes_due_listing() {
    let (mut repo, _temp) = create_test_repository();
    let item = repo
        .create(draft("Coat", "outerwear", "2024-01-01T00:00:00Z", 2_592_000))
        .unwrap();
    let now = at("2024-01-10T00:00:00Z");
    assert!(repo.list_needing_cleaning(now, Page::default()).unwrap().is_empty());

    let updated = repo.update_interval(item.id, 86_400).unwrap();

    assert_eq!(updated.last_cleaned, item.last_cleaned);
    assert_eq!(updated.next_cleaning_date, at("2024-01-02T00:00:00Z"));
    let due = repo.list_needing_cleaning(now, Page::default()).unwrap();
    assert_eq!(due, vec![updated]);
}

/// Verify paging through a type listing visits each item once.
#[test]
fn test_list_by_type_pages() {
    let (mut repo, _temp) = create_test_repository();
    for name in ["A", "B", "C", "D", "E"] {
        repo.create(draft(name, "shirt", "2024-01-01T00:00:00Z", 10))
            .unwrap();
    }

    let mut seen = Vec::new();
    for skip in (0..6).step_by(2) {
        let page = repo
            .list_by_type("shirt", Page::new(skip, 2).unwrap())
            .unwrap();
        seen.extend(page.into_iter().map(|item| item.name.to_string()));
    }

    assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
}
