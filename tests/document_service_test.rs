//! Tests for DocumentService

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use cfgtree::application::services::DocumentService;
use cfgtree::application::ApplicationError;
use cfgtree::domain::{DomainError, PlainValue, Scalar, Value};
use cfgtree::infrastructure::traits::RealFileSystem;
use cfgtree::util::testing::init_test_setup;

fn service() -> DocumentService {
    init_test_setup();
    DocumentService::new(Arc::new(RealFileSystem))
}

fn create_document(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write document");
    path
}

#[test]
fn given_document_when_get_then_returns_nested_value() {
    let temp = TempDir::new().unwrap();
    let doc = create_document(
        &temp,
        "server.toml",
        r#"
motd = "hello"

[server]
port = 25565
"#,
    );

    let result = service().get(&doc, Some("server.port")).unwrap();

    assert_eq!(result, Some(Value::from(25565)));
}

#[test]
fn given_document_when_get_missing_then_none_and_file_untouched() {
    let temp = TempDir::new().unwrap();
    let content = "[server]\nport = 1\n";
    let doc = create_document(&temp, "server.toml", content);

    let result = service().get(&doc, Some("server.host.name")).unwrap();

    assert_eq!(result, None);
    assert_eq!(std::fs::read_to_string(&doc).unwrap(), content);
}

#[test]
fn given_missing_document_when_set_then_document_created() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("nested/dir/new.toml");
    let service = service();

    service
        .set(&doc, Some("server.port"), Some(Scalar::Integer(8080)))
        .unwrap();

    assert!(doc.exists());
    assert!(service.has(&doc, Some("server.port")).unwrap());
    assert_eq!(
        service.get(&doc, Some("server.port")).unwrap(),
        Some(Value::from(8080))
    );
}

#[test]
fn given_value_when_removed_then_has_false_and_siblings_kept() {
    let temp = TempDir::new().unwrap();
    let doc = create_document(&temp, "doc.toml", "[a]\nb = 1\nc = 2\n");
    let service = service();

    service.remove(&doc, Some("a.b")).unwrap();

    assert!(!service.has(&doc, Some("a.b")).unwrap());
    assert!(service.has(&doc, Some("a.c")).unwrap());
}

#[test]
fn given_create_section_when_existing_values_then_kept() {
    let temp = TempDir::new().unwrap();
    let doc = create_document(&temp, "doc.toml", "[plugins.worldedit]\nenabled = true\n");
    let service = service();

    service.create_section(&doc, Some("plugins.worldedit")).unwrap();
    service.create_section(&doc, Some("plugins.essentials")).unwrap();
    service
        .set(&doc, Some("plugins.essentials.spawn"), Some(Scalar::from("world")))
        .unwrap();

    let values = service.values(&doc, true).unwrap();
    let plugins = values["plugins"].as_mapping().unwrap();
    assert_eq!(plugins.keys().collect::<Vec<_>>(), vec!["worldedit", "essentials"]);
    let worldedit = plugins["worldedit"].as_mapping().unwrap();
    assert_eq!(worldedit["enabled"], PlainValue::Scalar(Scalar::Boolean(true)));
}

#[test]
fn given_absent_key_when_any_operation_then_invalid_argument() {
    let temp = TempDir::new().unwrap();
    let doc = create_document(&temp, "doc.toml", "x = 1\n");
    let service = service();

    let err = service.set(&doc, None, Some(Scalar::Integer(1))).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidArgument(ref m)) if m == "Cannot set a value at empty path"
    ));
    assert!(matches!(
        service.get(&doc, None),
        Err(ApplicationError::Domain(DomainError::InvalidArgument(_)))
    ));
    assert!(matches!(
        service.has(&doc, None),
        Err(ApplicationError::Domain(DomainError::InvalidArgument(_)))
    ));
    assert!(matches!(
        service.create_section(&doc, None),
        Err(ApplicationError::Domain(DomainError::InvalidArgument(_)))
    ));
}

#[test]
fn given_malformed_document_when_loading_then_document_error() {
    let temp = TempDir::new().unwrap();
    let doc = create_document(&temp, "bad.toml", "this is not toml");

    let err = service().load(&doc).unwrap_err();

    match err {
        ApplicationError::Document { path, .. } => assert_eq!(path, doc),
        other => panic!("expected document error, got {other:?}"),
    }
}

#[test]
fn given_array_of_tables_when_loading_then_document_error() {
    let temp = TempDir::new().unwrap();
    let doc = create_document(&temp, "worlds.toml", "[[worlds]]\nname = \"nether\"\n");

    let err = service().load(&doc).unwrap_err();

    assert!(
        err.to_string().contains("table inside an array"),
        "unexpected error: {err}"
    );
}

#[test]
fn given_missing_document_when_loading_then_operation_failed() {
    let temp = TempDir::new().unwrap();

    let err = service().load(&temp.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
}

#[test]
fn given_scalar_added_after_table_when_saved_then_root_scalar_moves_first() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("order.toml");
    let service = service();

    service.set(&doc, Some("z.a"), Some(Scalar::Integer(1))).unwrap();
    service.set(&doc, Some("m"), Some(Scalar::Integer(2))).unwrap();

    let reloaded = service.load(&doc).unwrap();
    assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["m", "z"]);
    let z = reloaded.peek("z").and_then(Value::as_section).unwrap();
    assert_eq!(z.keys().collect::<Vec<_>>(), vec!["a"]);
}
