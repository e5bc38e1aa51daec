pub(crate) const SET_USER_VERSION: &str = "PRAGMA user_version = 1";

pub(crate) const CREATE_CONTACTS_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS contacts(\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT NOT NULL DEFAULT '', \
        email TEXT NOT NULL DEFAULT '', \
        phone TEXT NOT NULL DEFAULT ''\
        )
    ";
