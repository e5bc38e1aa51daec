use crate::core::{
    contact::{Contact, ContactDraft},
    Result
};

/// Owner of the canonical contact set. Absence of a record is part of
/// the contract (`Ok(None)` / `Ok(false)`), never an error; `Err` is
/// reserved for backing-medium failures.
///
/// Implementations are not synchronized. A store shared between
/// requests must sit behind a single lock so mutations (and id
/// assignment in particular) stay serialized.
pub trait ContactStorage: Send {
    fn open(&mut self, path: &str) -> Result<()>;
    fn close(&mut self);

    /// All contacts in insertion order. May be empty.
    fn contacts(&mut self) -> Result<Vec<Contact>>;

    fn contact(&mut self,
        id: i64
    ) -> Result<Option<Contact>>;

    /// Persists the draft and returns the stored record with its
    /// assigned id. Drafts are stored as given, empty fields included.
    fn put_contact(&mut self,
        draft: &ContactDraft
    ) -> Result<Contact>;

    /// Full replace of `name`/`email`/`phone` from the draft; the id is
    /// never touched. Applying the same draft twice leaves the record
    /// in the same state.
    fn update_contact(&mut self,
        id: i64,
        draft: &ContactDraft
    ) -> Result<Option<Contact>>;

    /// Returns `false` when no record carries the id, whether it never
    /// existed or was removed earlier.
    fn remove_contact(&mut self,
        id: i64
    ) -> Result<bool>;

    fn exists(&mut self, id: i64) -> Result<bool> {
        self.contact(id).map(|v| v.is_some())
    }
}
