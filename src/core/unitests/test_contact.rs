use crate::core::contact::{Contact, ContactDraft};

#[test]
fn test_draft_ignores_client_id() {
    // an id in the inbound payload carries no weight
    let draft = serde_json::from_str::<ContactDraft>(
        r#"{"id": 77, "name": "John Doe", "email": "john.doe@example.com", "phone": "123-456-7890"}"#
    ).expect("Failed to parse draft");

    assert_eq!(draft.name, "John Doe");
    assert_eq!(draft.email, "john.doe@example.com");
    assert_eq!(draft.phone, "123-456-7890");
}

#[test]
fn test_draft_missing_fields_default_empty() {
    let draft = serde_json::from_str::<ContactDraft>(
        r#"{"name": "John Doe"}"#
    ).expect("Failed to parse draft");

    assert_eq!(draft.name, "John Doe");
    assert_eq!(draft.email, "");
    assert_eq!(draft.phone, "");
}

#[test]
fn test_contact_from_draft() {
    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let contact = Contact::new(7, &draft);

    assert_eq!(contact.id, 7);
    assert_eq!(contact.name, draft.name);
    assert_eq!(contact.email, draft.email);
    assert_eq!(contact.phone, draft.phone);
}

#[test]
fn test_wire_representation() {
    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let contact = Contact::new(7, &draft);

    let json = serde_json::to_value(&contact)
        .expect("Failed to serialize contact");

    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["email"], "john.doe@example.com");
    assert_eq!(json["phone"], "123-456-7890");
}
