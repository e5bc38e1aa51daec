use std::net::SocketAddr;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use log::info;

use crate::core::{
    config::Config,
    error::{Error, Result},
};

use crate::service::{handlers, SharedStorage};

/// Route table over the contact collection. With an allowed origin the
/// whole table sits behind a cross-origin layer that also answers
/// OPTIONS preflights.
pub fn router(storage: SharedStorage, allowed_origin: Option<&str>) -> Result<Router> {
    let app = Router::new()
        .route(
            "/contacts",
            get(handlers::contacts)
                .post(handlers::create_contact)
        )
        .route(
            "/contacts/:id",
            get(handlers::contact)
                .put(handlers::update_contact)
                .delete(handlers::remove_contact)
        )
        .with_state(storage);

    let Some(origin) = allowed_origin else {
        return Ok(app);
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| {
        Error::Argument(format!("Invalid allowed origin {}: {}", origin, e))
    })?;

    Ok(app.layer(middleware::from_fn_with_state(origin, cross_origin)))
}

pub async fn run(cfg: &dyn Config, storage: SharedStorage) -> Result<()> {
    let addr = SocketAddr::new(cfg.addr(), cfg.listening_port());
    let app = router(storage, cfg.allowed_origin())?;

    info!("Contacts service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn cross_origin(
    State(origin): State<HeaderValue>,
    request: Request,
    next: Next
) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        allow(response.headers_mut(), &origin);
        return response;
    }

    let mut response = next.run(request).await;
    allow(response.headers_mut(), &origin);
    response
}

fn allow(headers: &mut HeaderMap, origin: &HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS")
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*")
    );
}
