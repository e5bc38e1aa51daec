use serde::{Deserialize, Serialize};

/// A directory entry. The `id` is assigned by the storage backend on
/// insertion and stays stable for the record's lifetime; it is never
/// reused after the record is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id:     i64,
    pub name:   String,
    pub email:  String,
    pub phone:  String,
}

/// An inbound contact payload without a trustworthy id, used as input
/// for create and replace operations. Missing fields deserialize to
/// empty strings; an `id` field in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name:   String,
    #[serde(default)]
    pub email:  String,
    #[serde(default)]
    pub phone:  String,
}

impl Contact {
    pub fn new(id: i64, draft: &ContactDraft) -> Self {
        Self {
            id,
            name:   draft.name.clone(),
            email:  draft.email.clone(),
            phone:  draft.phone.clone(),
        }
    }
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name:   name.to_string(),
            email:  email.to_string(),
            phone:  phone.to_string(),
        }
    }
}
