use contacts::MemStorage;

#[test]
fn test_lifecycle() {
    let mut db = MemStorage::new();
    crate::exercise_lifecycle(&mut db);
}
