#[cfg(test)]
mod storage {
    mod mem;
    mod sqlite;
}

#[cfg(test)]
mod config;

#[cfg(test)]
mod service;

// helper functions
use contacts::{ContactDraft, ContactStorage};

/// Walks one store implementation through the whole record lifecycle;
/// both backends must behave identically through the trait.
fn exercise_lifecycle(db: &mut dyn ContactStorage) {
    // the collection starts empty
    assert_eq!(db.contacts().unwrap().len(), 0);

    // the first insert gets id 1
    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let john = db.put_contact(&draft).unwrap();
    assert_eq!(john.id, 1);
    assert_eq!(john.name, draft.name);
    assert_eq!(john.email, draft.email);
    assert_eq!(john.phone, draft.phone);

    // ids keep growing with each insert
    let jane = db.put_contact(&ContactDraft::new("Jane Doe", "jane.doe@example.com", "098-765-4321")).unwrap();
    assert_eq!(jane.id, 2);
    let jim = db.put_contact(&ContactDraft::new("Jim Doe", "", "")).unwrap();
    assert_eq!(jim.id, 3);

    // reading back what was inserted
    assert_eq!(db.contact(1).unwrap(), Some(john.clone()));
    assert_eq!(db.exists(2).unwrap(), true);

    // replace overwrites every mutable field and keeps the id
    let replacement = ContactDraft::new("X", "y@z.com", "000");
    let updated = db.update_contact(2, &replacement).unwrap().unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.name, "X");
    assert_eq!(db.contact(2).unwrap(), Some(updated.clone()));

    // replaying the same replacement changes nothing
    let replayed = db.update_contact(2, &replacement).unwrap().unwrap();
    assert_eq!(replayed, updated);

    // removal leaves no trace in the collection
    assert_eq!(db.remove_contact(1).unwrap(), true);
    assert_eq!(db.contact(1).unwrap(), None);
    assert_eq!(db.contacts().unwrap().iter().any(|v| v.id == 1), false);

    // removed or never-assigned ids stay absent for every operation
    assert_eq!(db.contact(999).unwrap(), None);
    assert_eq!(db.update_contact(999, &replacement).unwrap(), None);
    assert_eq!(db.remove_contact(999).unwrap(), false);
    assert_eq!(db.remove_contact(1).unwrap(), false);

    // a freed id is never handed out again
    assert_eq!(db.remove_contact(3).unwrap(), true);
    let joe = db.put_contact(&ContactDraft::new("Joe Doe", "joe.doe@example.com", "111")).unwrap();
    assert_eq!(joe.id, 4);
}
