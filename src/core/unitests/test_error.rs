use crate::core::Error;
use crate::contacts::{ContactInputBuilder, Field};

#[test]
fn test_transport_kinds() {
    assert!(Error::Transport("boom".into()).is_transport());
    assert!(Error::NotFound("Contact 3 not found".into()).is_transport());
    assert!(!Error::Argument("bad".into()).is_transport());
    assert!(!Error::Io("disk".into()).is_transport());
}

#[test]
fn test_validation_error() {
    let err = ContactInputBuilder::new()
        .with_email("nobody")
        .build()
        .unwrap_err();

    assert!(!err.is_transport());
    let errs = err.field_errors().unwrap();
    assert_eq!(errs.len(), 2);
    assert_eq!(errs.get(Field::Name), Some("Name is required"));
    assert_eq!(errs.get(Field::Email), Some("Email is invalid"));
    assert_eq!(
        err.to_string(),
        "Validation error: name: Name is required, email: Email is invalid"
    );
}

#[test]
fn test_from_url_error() {
    let err: Error = url::Url::parse("::").unwrap_err().into();
    assert!(matches!(err, Error::Argument(_)));
}
