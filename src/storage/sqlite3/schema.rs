diesel::table! {
    contacts (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        phone -> Text,
    }
}
