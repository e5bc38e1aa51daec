use std::fs;
use serial_test::serial;

use contacts::{ContactStorage, SqliteStorage};

#[test]
#[serial]
fn test_lifecycle() {
    let path = "apitests-contacts.db";
    let mut db = SqliteStorage::new();
    db.open(path).expect("opening db error");

    crate::exercise_lifecycle(&mut db);

    db.close();
    _ = fs::remove_file(path);
}
