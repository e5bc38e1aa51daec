use axum::{
    body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::contact::{Contact, ContactDraft};
use crate::service::{handlers, shared, SharedStorage};
use crate::storage::mem_storage::MemStorage;

fn get_storage() -> SharedStorage {
    shared(Box::new(MemStorage::new()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes)
        .expect("Failed to parse response body")
}

#[tokio::test]
async fn test_list_empty_collection() {
    let storage = get_storage();

    let response = handlers::contacts(State(storage)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let contacts: Vec<Contact> = read_json(response).await;
    assert_eq!(contacts.len(), 0);
}

#[tokio::test]
async fn test_create_assigns_id_and_location() {
    let storage = get_storage();

    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let response = handlers::create_contact(State(storage.clone()), Json(draft.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&header::HeaderValue::from_static("/contacts/1"))
    );

    let contact: Contact = read_json(response).await;
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, draft.name);
    assert_eq!(contact.email, draft.email);
    assert_eq!(contact.phone, draft.phone);

    // the next insert continues the sequence
    let response = handlers::create_contact(State(storage), Json(draft)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let contact: Contact = read_json(response).await;
    assert_eq!(contact.id, 2);
}

#[tokio::test]
async fn test_create_accepts_empty_draft() {
    let storage = get_storage();

    let response = handlers::create_contact(State(storage), Json(ContactDraft::default())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let contact: Contact = read_json(response).await;
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, "");
}

#[tokio::test]
async fn test_get_found_and_not_found() {
    let storage = get_storage();

    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let response = handlers::create_contact(State(storage.clone()), Json(draft)).await;
    let inserted: Contact = read_json(response).await;

    let response = handlers::contact(State(storage.clone()), Path(inserted.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Contact = read_json(response).await;
    assert_eq!(fetched, inserted);

    let response = handlers::contact(State(storage), Path(999)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_found_and_not_found() {
    let storage = get_storage();

    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let response = handlers::create_contact(State(storage.clone()), Json(draft)).await;
    let inserted: Contact = read_json(response).await;

    let replacement = ContactDraft::new("X", "y@z.com", "000");
    let response = handlers::update_contact(
        State(storage.clone()),
        Path(inserted.id),
        Json(replacement.clone())
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Contact = read_json(response).await;
    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.email, "y@z.com");
    assert_eq!(updated.phone, "000");

    let response = handlers::update_contact(State(storage), Path(999), Json(replacement)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_found_and_not_found() {
    let storage = get_storage();

    let draft = ContactDraft::new("John Doe", "john.doe@example.com", "123-456-7890");
    let response = handlers::create_contact(State(storage.clone()), Json(draft)).await;
    let inserted: Contact = read_json(response).await;

    let response = handlers::remove_contact(State(storage.clone()), Path(inserted.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // a second removal finds nothing
    let response = handlers::remove_contact(State(storage.clone()), Path(inserted.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = handlers::contact(State(storage), Path(inserted.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
