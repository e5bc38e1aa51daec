use crate::core::{
    contact::{Contact, ContactDraft},
    Result
};
use crate::storage::data_storage::ContactStorage;

/// Process-local contact store. Records live in insertion order and
/// vanish on close.
///
/// Ids come from a counter owned by the store, seeded with 1 on an
/// empty store and with `max(id) + 1` when constructed over existing
/// records. The counter only grows, so an id freed by a removal is
/// never handed out again within the store's lifetime.
pub struct MemStorage {
    contacts: Vec<Contact>,
    next_id:  i64,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id:  1,
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.iter()
            .map(|v| v.id)
            .max()
            .map_or(1, |max| max + 1);

        Self { contacts, next_id }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStorage for MemStorage {
    fn open(&mut self, _path: &str) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) {
        self.contacts.clear();
    }

    fn contacts(&mut self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn contact(&mut self, id: i64) -> Result<Option<Contact>> {
        Ok(self.contacts.iter()
            .find(|v| v.id == id)
            .cloned())
    }

    fn put_contact(&mut self, draft: &ContactDraft) -> Result<Contact> {
        let contact = Contact::new(self.next_id, draft);
        self.next_id += 1;

        self.contacts.push(contact.clone());
        Ok(contact)
    }

    fn update_contact(&mut self, id: i64, draft: &ContactDraft) -> Result<Option<Contact>> {
        match self.contacts.iter_mut().find(|v| v.id == id) {
            Some(found) => {
                found.name  = draft.name.clone();
                found.email = draft.email.clone();
                found.phone = draft.phone.clone();
                Ok(Some(found.clone()))
            },
            None => Ok(None)
        }
    }

    fn remove_contact(&mut self, id: i64) -> Result<bool> {
        match self.contacts.iter().position(|v| v.id == id) {
            Some(index) => {
                self.contacts.remove(index);
                Ok(true)
            },
            None => Ok(false)
        }
    }
}
