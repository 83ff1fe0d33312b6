use chrono::NaiveDate;
use visitor_portal::{
    Blacklist,
    models::{BlacklistEntry, BlacklistEntryRequest},
};

fn request(name: &str, email: &str, reason: &str) -> BlacklistEntryRequest {
    BlacklistEntryRequest {
        name: name.to_string(),
        email: email.to_string(),
        reason: reason.to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
}

#[test]
fn test_seeded_list() {
    let list = Blacklist::seeded();
    let ids: Vec<u32> = list.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(list.entries()[0].name, "Michael Johnson");
    assert_eq!(list.next_id(), 4);
}

#[test]
fn test_empty_list_starts_at_one() {
    let mut list = Blacklist::default();
    assert!(list.is_empty());
    assert_eq!(list.next_id(), 1);

    let entry = list.add(request("A", "a@b.co", "r"), "Admin", today());
    assert_eq!(entry.id, 1);
}

#[test]
fn test_add_uses_max_id_plus_one() {
    let mut list = Blacklist::seeded();
    list.remove(2);

    let entry = list.add(
        request("  Sam Spade ", "sam@spade.io", "Loitering"),
        "Admin",
        today(),
    );
    assert_eq!(entry.id, 4);
    assert_eq!(entry.name, "Sam Spade");
    assert_eq!(entry.added_by, "Admin");
    assert_eq!(entry.date_added, today());
    assert_eq!(list.len(), 3);
}

#[test]
fn test_delete_removes_only_that_entry() {
    let mut list = Blacklist::seeded();

    let removed = list.remove(2).expect("entry 2 exists");
    assert_eq!(removed.name, "Emily Davis");

    let ids: Vec<u32> = list.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(list.remove(2).is_none());
}

#[test]
fn test_update_keeps_id_date_and_author() {
    let mut list = Blacklist::seeded();
    let before = list.get(3).cloned().unwrap();

    let updated = list
        .update(3, request("Known User", "known@temp.com", "Cleared identity"))
        .expect("entry 3 exists");

    assert_eq!(updated.id, 3);
    assert_eq!(updated.name, "Known User");
    assert_eq!(updated.date_added, before.date_added);
    assert_eq!(updated.added_by, before.added_by);
    assert_eq!(list.get(3), Some(&updated));
    assert!(list.update(99, request("x", "x@y.z", "r")).is_none());
}

#[test]
fn test_search_by_name_or_email() {
    let list = Blacklist::seeded();

    let by_name: Vec<u32> = list.search("emily").iter().map(|e| e.id).collect();
    assert_eq!(by_name, vec![2]);

    let by_email: Vec<u32> = list.search("TEMP.COM").iter().map(|e| e.id).collect();
    assert_eq!(by_email, vec![3]);

    assert_eq!(list.search("").len(), 3);
    assert!(list.search("nobody").is_empty());
}

#[test]
fn test_search_keeps_whitespace_in_term() {
    let list = Blacklist::seeded();

    // Trailing space: "michael johnson" has nothing after "johnson".
    assert!(list.search("johnson ").is_empty());
    // Inner space still matches.
    assert_eq!(list.search("michael johnson").len(), 1);
    // Only spaces is a real term, and no name or email contains three.
    assert!(list.search("   ").is_empty());
}

#[test]
fn test_new_list_continues_from_highest_id() {
    let mut list = Blacklist::new(vec![BlacklistEntry {
        id: 7,
        name: "Carried Over".to_string(),
        email: "carried@over.io".to_string(),
        reason: "Imported".to_string(),
        date_added: today(),
        added_by: "System".to_string(),
    }]);
    assert_eq!(list.len(), 1);

    let entry = list.add(request("B", "b@c.de", "r"), "Admin", today());
    assert_eq!(entry.id, 8);
}

#[tokio::test]
async fn test_shared_state_sees_edits() {
    let state = Blacklist::seeded().into_state();
    let writer = state.clone();

    writer.write().await.remove(1);
    assert_eq!(state.read().await.len(), 2);
}
