use std::fs;
use serial_test::serial;

use crate::core::contact::ContactDraft;
use crate::storage::{
    data_storage::ContactStorage,
    sqlite_storage::SqliteStorage,
};

fn get_storage() -> (Box<dyn ContactStorage>, String) {
    let mut storage = SqliteStorage::new();
    let path = "contacts-test.db".to_string();
    match storage.open(&path) {
        Ok(_) => {
            (Box::new(storage), path)
        }
        Err(e) => {
            panic!("opening db error: {}", e);
        }
    }
}

fn remove_storage(path: &str) {
    _ = fs::remove_file(path)
}

#[test]
#[serial]
fn test_contact() {
    let (mut db, path) = get_storage();

    // storage starts empty
    let result = db.contacts();
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap().len(), 0);

    // nothing stored under id 1 yet
    let result = db.contact(1);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap().is_some(), false);

    // insert a contact, the engine assigns id 1
    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let result = db.put_contact(&draft);
    assert_eq!(result.is_ok(), true);

    let contact = result.ok().unwrap();
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, draft.name);
    assert_eq!(contact.email, draft.email);
    assert_eq!(contact.phone, draft.phone);

    // read it back
    let result = db.contact(contact.id);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap(), Some(contact.clone()));

    // replace every mutable field, the id stays
    let replacement = ContactDraft::new("X", "y@z.com", "000");
    let result = db.update_contact(contact.id, &replacement);
    assert_eq!(result.is_ok(), true);

    let updated = result.ok().unwrap().unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.email, "y@z.com");
    assert_eq!(updated.phone, "000");

    // remove it
    let result = db.remove_contact(contact.id);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap(), true);

    // no longer available
    let result = db.contact(contact.id);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap().is_some(), false);

    remove_storage(&path);
}

#[test]
#[serial]
fn test_contacts() {
    let (mut db, path) = get_storage();

    // insert three contacts, ids run 1..=3
    let first = db.put_contact(&ContactDraft::new("a", "a@example.com", "111")).unwrap();
    let second = db.put_contact(&ContactDraft::new("b", "b@example.com", "222")).unwrap();
    let third = db.put_contact(&ContactDraft::new("c", "c@example.com", "333")).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);

    // listed in insertion order
    let result = db.contacts();
    assert_eq!(result.is_ok(), true);
    let contacts = result.ok().unwrap();
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0], first);
    assert_eq!(contacts[1], second);
    assert_eq!(contacts[2], third);

    // removing the middle record shrinks the listing
    let result = db.remove_contact(second.id);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap(), true);

    let contacts = db.contacts().ok().unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0], first);
    assert_eq!(contacts[1], third);

    remove_storage(&path);
}

#[test]
#[serial]
fn test_unknown_id_is_absent() {
    let (mut db, path) = get_storage();

    db.put_contact(&ContactDraft::new("a", "a@example.com", "111")).unwrap();

    let replacement = ContactDraft::new("X", "y@z.com", "000");
    assert_eq!(db.contact(999).unwrap(), None);
    assert_eq!(db.update_contact(999, &replacement).unwrap(), None);
    assert_eq!(db.remove_contact(999).unwrap(), false);

    remove_storage(&path);
}

#[test]
#[serial]
fn test_no_id_reuse_after_removal() {
    let (mut db, path) = get_storage();

    db.put_contact(&ContactDraft::new("a", "a@example.com", "111")).unwrap();
    let second = db.put_contact(&ContactDraft::new("b", "b@example.com", "222")).unwrap();
    assert_eq!(second.id, 2);

    // AUTOINCREMENT keeps the freed id out of circulation
    assert_eq!(db.remove_contact(second.id).unwrap(), true);
    let next = db.put_contact(&ContactDraft::new("c", "c@example.com", "333")).unwrap();
    assert_eq!(next.id, 3);

    remove_storage(&path);
}

#[test]
#[serial]
fn test_records_survive_reopen() {
    let (mut db, path) = get_storage();

    let inserted = db.put_contact(&ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890")).unwrap();
    db.close();

    // a fresh storage over the same file sees the record
    let mut db = SqliteStorage::new();
    db.open(&path).expect("reopening db error");

    let result = db.contact(inserted.id);
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.ok().unwrap(), Some(inserted));

    remove_storage(&path);
}
