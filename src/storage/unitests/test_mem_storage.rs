use crate::core::contact::{Contact, ContactDraft};
use crate::storage::{
    data_storage::ContactStorage,
    mem_storage::MemStorage,
};

fn draft(name: &str) -> ContactDraft {
    ContactDraft::new(name, "someone@example.com", "123-456-7890")
}

#[test]
fn test_first_id_on_empty_store() {
    let mut db = MemStorage::new();

    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let result = db.put_contact(&draft);
    assert_eq!(result.is_ok(), true);

    let contact = result.ok().unwrap();
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, draft.name);
    assert_eq!(contact.email, draft.email);
    assert_eq!(contact.phone, draft.phone);
}

#[test]
fn test_sequential_assignment() {
    let mut db = MemStorage::new();

    // with ids {1, 2} present the next insert gets 3
    assert_eq!(db.put_contact(&draft("a")).unwrap().id, 1);
    assert_eq!(db.put_contact(&draft("b")).unwrap().id, 2);
    assert_eq!(db.put_contact(&draft("c")).unwrap().id, 3);
}

#[test]
fn test_get_after_put() {
    let mut db = MemStorage::new();

    let inserted = db.put_contact(&draft("John Doe")).unwrap();

    let result = db.contact(inserted.id);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap(), Some(inserted));
}

#[test]
fn test_update_overwrites_all_fields() {
    let mut db = MemStorage::new();

    db.put_contact(&draft("a")).unwrap();
    db.put_contact(&draft("b")).unwrap();

    let replacement = ContactDraft::new("X", "y@z.com", "000");
    let result = db.update_contact(2, &replacement);
    assert_eq!(result.is_ok(), true);

    let updated = result.ok().unwrap().unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.email, "y@z.com");
    assert_eq!(updated.phone, "000");

    // replaying the same draft leaves the record unchanged
    let replayed = db.update_contact(2, &replacement).unwrap().unwrap();
    assert_eq!(replayed, updated);
    assert_eq!(db.contact(2).unwrap(), Some(updated));
}

#[test]
fn test_remove_then_get_absent() {
    let mut db = MemStorage::new();

    db.put_contact(&draft("a")).unwrap();
    db.put_contact(&draft("b")).unwrap();

    let result = db.remove_contact(1);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap(), true);

    assert_eq!(db.contact(1).unwrap(), None);
    assert_eq!(db.contacts().unwrap().iter().any(|v| v.id == 1), false);
}

#[test]
fn test_unknown_id_is_absent() {
    let mut db = MemStorage::new();
    db.put_contact(&draft("a")).unwrap();

    let replacement = ContactDraft::new("X", "y@z.com", "000");
    assert_eq!(db.contact(999).unwrap(), None);
    assert_eq!(db.update_contact(999, &replacement).unwrap(), None);
    assert_eq!(db.remove_contact(999).unwrap(), false);
}

#[test]
fn test_no_id_reuse_after_removal() {
    let mut db = MemStorage::new();

    db.put_contact(&draft("a")).unwrap();
    db.put_contact(&draft("b")).unwrap();
    db.put_contact(&draft("c")).unwrap();

    // freeing the highest id must not hand it out again
    assert_eq!(db.remove_contact(3).unwrap(), true);
    assert_eq!(db.put_contact(&draft("d")).unwrap().id, 4);
}

#[test]
fn test_seeded_store_continues_after_max() {
    let seeded = vec![
        Contact::new(5, &draft("a")),
        Contact::new(9, &draft("b")),
    ];
    let mut db = MemStorage::with_contacts(seeded);

    assert_eq!(db.put_contact(&draft("c")).unwrap().id, 10);
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut db = MemStorage::new();

    db.put_contact(&draft("a")).unwrap();
    db.put_contact(&draft("b")).unwrap();
    db.put_contact(&draft("c")).unwrap();

    let names: Vec<String> = db.contacts().unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_returned_contact_is_a_snapshot() {
    let mut db = MemStorage::new();

    let inserted = db.put_contact(&draft("a")).unwrap();
    db.update_contact(inserted.id, &ContactDraft::new("X", "y@z.com", "000")).unwrap();

    // the value handed out earlier does not follow later mutations
    assert_eq!(inserted.name, "a");
}

#[test]
fn test_empty_drafts_are_accepted() {
    let mut db = MemStorage::new();

    let contact = db.put_contact(&ContactDraft::default()).unwrap();
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, "");
    assert_eq!(contact.email, "");
    assert_eq!(contact.phone, "");
}
