use contacts::{server, service, MemStorage};

#[test]
fn test_router_accepts_configured_origin() {
    let storage = service::shared(Box::new(MemStorage::new()));
    let result = server::router(storage, Some("http://localhost:3000"));
    assert_eq!(result.is_ok(), true);
}

#[test]
fn test_router_rejects_malformed_origin() {
    let storage = service::shared(Box::new(MemStorage::new()));
    let result = server::router(storage, Some("bad\norigin"));
    assert_eq!(result.is_err(), true);
}

#[test]
fn test_router_without_origin() {
    let storage = service::shared(Box::new(MemStorage::new()));
    let result = server::router(storage, None);
    assert_eq!(result.is_ok(), true);
}
