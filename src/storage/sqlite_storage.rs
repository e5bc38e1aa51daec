use diesel::prelude::*;
use log::debug;

use crate::core::{
    contact::{Contact, ContactDraft},
    error::{Error, Result},
};

use crate::storage::data_storage::ContactStorage;

use crate::storage::sqlite3::{
    models::ContactRow,
    models::NewContact,
    create_tbs,
    get_contacts,
    get_contact,
    put_contact,
    update_contact,
    remove_contact,
};

/// Durable contact store over a SQLite database file. Identity comes
/// from the engine's AUTOINCREMENT rowid, so ids survive restarts and
/// are never reassigned after a removal.
pub struct SqliteStorage {
    connection: Option<SqliteConnection>,
}

impl SqliteStorage {
    pub fn new() -> Self {
        Self { connection: None }
    }

    fn conn(&mut self) -> &mut SqliteConnection {
        self.connection.as_mut().unwrap()
    }
}

impl Default for SqliteStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id:     row.id,
            name:   row.name,
            email:  row.email,
            phone:  row.phone,
        }
    }
}

impl ContactStorage for SqliteStorage {
    fn open(&mut self, path: &str) -> Result<()> {
        let connection = match SqliteConnection::establish(path) {
            Ok(c) => c,
            Err(e) => return Err(Error::from(e))
        };
        self.connection = Some(connection);

        if !create_tbs(self.conn()) {
            return Err(Error::State(format!("Failed to create contacts table")));
        }

        debug!("Opened SQLite contact storage at {}", path);
        Ok(())
    }

    fn close(&mut self) {
        self.connection = None;
    }

    fn contacts(&mut self) -> Result<Vec<Contact>> {
        get_contacts(self.conn())
            .map(|rows| rows.into_iter().map(Contact::from).collect())
            .map_err(|e| Error::from(e))
    }

    fn contact(&mut self, id: i64) -> Result<Option<Contact>> {
        match get_contact(self.conn(), id) {
            Ok(Some(row)) => Ok(Some(Contact::from(row))),
            Ok(None) => Ok(None),
            Err(e) => Err(Error::from(e))
        }
    }

    fn put_contact(&mut self, draft: &ContactDraft) -> Result<Contact> {
        let mut c = NewContact::default();
        c.name  = draft.name.as_str();
        c.email = draft.email.as_str();
        c.phone = draft.phone.as_str();

        let rowid = put_contact(self.conn(), c)
            .map_err(|e| Error::from(e))?;

        // Return the persisted row rather than the caller's draft so
        // engine-side defaulting is reflected in the result.
        match get_contact(self.conn(), rowid) {
            Ok(Some(row)) => Ok(Contact::from(row)),
            Ok(None) => Err(Error::State(format!("Inserted contact {} is not readable back", rowid))),
            Err(e) => Err(Error::from(e))
        }
    }

    fn update_contact(&mut self, id: i64, draft: &ContactDraft) -> Result<Option<Contact>> {
        let mut c = NewContact::default();
        c.name  = draft.name.as_str();
        c.email = draft.email.as_str();
        c.phone = draft.phone.as_str();

        let updated = update_contact(self.conn(), id, c)
            .map_err(|e| Error::from(e))?;
        if !updated {
            return Ok(None);
        }

        self.contact(id)
    }

    fn remove_contact(&mut self, id: i64) -> Result<bool> {
        remove_contact(self.conn(), id)
            .map_err(|e| Error::from(e))
    }
}
