use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::warn;

use crate::core::contact::ContactDraft;
use crate::service::SharedStorage;

// Each handler maps one storage outcome to one HTTP outcome. Absence
// becomes 404 with no body; a storage failure or a poisoned lock
// becomes 500 without further interpretation.

pub(crate) async fn contacts(
    State(storage): State<SharedStorage>
) -> Response {
    let mut storage = match storage.lock() {
        Ok(storage) => storage,
        Err(_) => return poisoned()
    };

    match storage.contacts() {
        Ok(contacts) => (StatusCode::OK, Json(contacts)).into_response(),
        Err(e) => {
            warn!("Listing contacts from storage error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn contact(
    State(storage): State<SharedStorage>,
    Path(id): Path<i64>
) -> Response {
    let mut storage = match storage.lock() {
        Ok(storage) => storage,
        Err(_) => return poisoned()
    };

    match storage.contact(id) {
        Ok(Some(contact)) => (StatusCode::OK, Json(contact)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!("Reading contact {} from storage error: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn create_contact(
    State(storage): State<SharedStorage>,
    Json(draft): Json<ContactDraft>
) -> Response {
    let mut storage = match storage.lock() {
        Ok(storage) => storage,
        Err(_) => return poisoned()
    };

    match storage.put_contact(&draft) {
        Ok(contact) => {
            let location = format!("/contacts/{}", contact.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(contact)
            ).into_response()
        },
        Err(e) => {
            warn!("Persisting new contact error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn update_contact(
    State(storage): State<SharedStorage>,
    Path(id): Path<i64>,
    Json(draft): Json<ContactDraft>
) -> Response {
    let mut storage = match storage.lock() {
        Ok(storage) => storage,
        Err(_) => return poisoned()
    };

    match storage.update_contact(id, &draft) {
        Ok(Some(contact)) => (StatusCode::OK, Json(contact)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!("Replacing contact {} error: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn remove_contact(
    State(storage): State<SharedStorage>,
    Path(id): Path<i64>
) -> Response {
    let mut storage = match storage.lock() {
        Ok(storage) => storage,
        Err(_) => return poisoned()
    };

    match storage.remove_contact(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!("Removing contact {} error: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn poisoned() -> Response {
    warn!("Contact storage lock poisoned");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
