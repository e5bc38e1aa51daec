pub mod core;
pub mod storage;
pub mod service;

pub use crate::core::{
    contact::{self, Contact, ContactDraft},
    config::{self, Config, StorageKind},
    error::{self, Error},
    logger,

    default_configuration as configuration,
};

pub use crate::storage::{
    data_storage::ContactStorage,
    mem_storage::MemStorage,
    sqlite_storage::SqliteStorage,
};

pub use crate::service::{
    server,
    SharedStorage,
    DEFAULT_HTTP_PORT,
};
