use diesel::prelude::*;
use super::schema::contacts;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ContactRow {
    pub(crate) id:    i64,
    pub(crate) name:  String,
    pub(crate) email: String,
    pub(crate) phone: String,
}

#[derive(Insertable)]
#[diesel(table_name = contacts)]
#[derive(Default)]
pub(crate) struct NewContact<'a> {
    pub(crate) name:  &'a str,
    pub(crate) email: &'a str,
    pub(crate) phone: &'a str,
}
