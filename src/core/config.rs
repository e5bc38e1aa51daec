use std::net::IpAddr;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl StorageKind {
    pub fn parse(input: &str) -> Option<StorageKind> {
        match input.to_lowercase().as_str() {
            "sqlite" => Some(StorageKind::Sqlite),
            "memory" | "mem" => Some(StorageKind::Memory),
            _ => None,
        }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, StorageKind::Memory)
    }
}

pub trait Config: Send + Sync {
    fn addr(&self) -> IpAddr;
    fn listening_port(&self) -> u16;

    fn storage_kind(&self) -> StorageKind;
    fn storage_path(&self) -> &str;

    fn allowed_origin(&self) -> Option<&str>;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
