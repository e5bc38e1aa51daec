mod sqlite3;

pub mod data_storage;
pub mod mem_storage;
pub mod sqlite_storage;

pub use crate::storage::{
    data_storage::ContactStorage,
    mem_storage::MemStorage,
    sqlite_storage::SqliteStorage,
};

#[cfg(test)]
mod unitests {
    mod test_mem_storage;
    mod test_sqlite_storage;
}
