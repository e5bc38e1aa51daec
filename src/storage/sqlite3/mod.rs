pub(crate) mod models;
pub(crate) mod schema;
mod sql;

use crate::storage::sqlite3::models::{
    ContactRow,
    NewContact
};

use crate::storage::sqlite3::schema::contacts::{
    dsl::contacts,
    name    as cont_name,
    email   as cont_email,
    phone   as cont_phone,
};

use diesel::prelude::*;
use diesel::result::Error;
use diesel::sql_types::BigInt;

diesel::define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

pub(crate) fn create_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::SET_USER_VERSION).execute(conn).is_ok()          &&
    diesel::sql_query(sql::CREATE_CONTACTS_TABLE).execute(conn).is_ok()
}

// --------------------------------------------------------
// "SELECT * FROM contacts ORDER BY id"
// --------------------------------------------------------
pub(crate) fn get_contacts(
    conn: &mut SqliteConnection
) -> Result<Vec<ContactRow>, Error> {
    use crate::storage::sqlite3::schema::contacts::id as cont_id;
    contacts
        .order(cont_id.asc())
        .select(ContactRow::as_select())
        .load(conn)
}

// --------------------------------------------------------
// "SELECT * FROM contacts WHERE id = ?"
// --------------------------------------------------------
pub(crate) fn get_contact(
    conn: &mut SqliteConnection,
    id: i64
) -> Result<Option<ContactRow>, Error> {
    contacts.find(id)
        .select(ContactRow::as_select())
        .load(conn)
        .and_then(|mut v| Ok(v.pop()))
}

// -----------------------------------------------------------------------
// "INSERT INTO contacts(name, email, phone) VALUES(?, ?, ?)";
// the engine assigns the id, read back via last_insert_rowid().
// -----------------------------------------------------------------------
pub(crate) fn put_contact(
    conn: &mut SqliteConnection,
    c: NewContact
) -> Result<i64, Error> {
    use crate::storage::sqlite3::schema::contacts;
    diesel::insert_into(contacts::table)
        .values(&c)
        .execute(conn)?;

    diesel::select(last_insert_rowid()).get_result(conn)
}

// -----------------------------------------------------
// "UPDATE contacts \
//        SET name=?, email=?, phone=? WHERE id = ?";
// -----------------------------------------------------
pub(crate) fn update_contact(
    conn: &mut SqliteConnection,
    id: i64,
    c: NewContact
) -> Result<bool, Error> {
    diesel::update(contacts.find(id))
        .set((
            cont_name.eq(c.name),
            cont_email.eq(c.email),
            cont_phone.eq(c.phone)
        ))
        .execute(conn)
        .and_then(|num| Ok(num > 0))
}

// ------------------------------------
// "DELETE FROM contacts WHERE id = ?"
// ------------------------------------
pub(crate) fn remove_contact(
    conn: &mut SqliteConnection,
    id: i64
) -> Result<bool, Error> {
    diesel::delete(contacts.find(id))
        .execute(conn)
        .and_then(|num| Ok(num > 0))
}
