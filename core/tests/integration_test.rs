mod common;

use common::{expect_rejection, init_logging, ALL_KINDS};
use httpguard::api::*;
use httpguard::guard;
use httpguard::help_links;
use uuid::Uuid;

#[test]
fn test_default_construction_integration() {
    for kind in ALL_KINDS {
        let error = ValidationError::new(kind);
        let status = kind.status_code();
        assert_eq!(
            error.message(),
            format!("An error occurred with the status code '{}'", status)
        );
        assert!(error.errors().is_empty());
        assert!(error.inner().is_none());
        assert_eq!(error.help_link(), help_links::lookup(status));
    }
}

#[test]
fn test_throw_message_quirk_integration() {
    for kind in [ErrorKind::BadRequest, ErrorKind::Property] {
        let error = kind.throw::<()>("sku", "DUPLICATED").unwrap_err();
        assert_eq!(
            error.message(),
            "The property 'sku' contains the error 'DUPLICATED"
        );
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.error_for("sku"), Some("DUPLICATED"));
    }
}

#[test]
fn test_round_trip_integration() {
    for kind in ALL_KINDS {
        let errors = [
            ValidationError::new(kind),
            ValidationError::with_message(kind, "custom"),
            ValidationError::for_property(kind, "field", "REQUIRED"),
            ValidationError::for_property_with_message(kind, "field", "INVALID", "custom"),
        ];
        for original in errors {
            let bytes = to_vec(&original).unwrap();
            let back = from_slice(&bytes).unwrap();
            assert_eq!(back.status_code(), original.status_code());
            assert_eq!(back.help_link(), original.help_link());
            assert_eq!(back.message(), original.message());
            assert_eq!(back.errors(), original.errors());
        }
    }
}

#[test]
fn test_null_document_integration() {
    assert!(matches!(
        from_value(serde_json::Value::Null),
        Err(SerializationError::NullDocument)
    ));
}

#[test]
fn test_scenarios_integration() {
    init_logging();

    let quantity = 241;
    expect_rejection(guard!(if_greater_than(quantity, 5)), "quantity", "MAX:5");

    let degree = -90.1f64;
    expect_rejection(
        guard!(if_latitude_out_of_range(degree)),
        "degree",
        "MIN_LATITUDE",
    );

    let client_email = "fake";
    expect_rejection(guard!(if_not_email(client_email)), "client_email", "INVALID");
    let client_email = "fake@fake.tk";
    assert_eq!(guard!(if_not_email(client_email)).unwrap(), "fake@fake.tk");

    let first: Option<Uuid> = None;
    expect_rejection(guard!(if_equals(first, None)), "first", "INVALID");
    assert!(guard!(if_different(first, None)).is_ok());
}

#[test]
fn test_boundaries_never_raise_integration() {
    let v = Guard::VALIDATE;
    assert!(v.if_greater_than(10u64, 10, "n").is_ok());
    assert!(v.if_less_than(-4i16, -4, "n").is_ok());
    assert!(v.if_greater_than(1.5f32, 1.5, "n").is_ok());
    assert!(v.if_longer_than("four", 4, "s").is_ok());
    assert!(v.if_shorter_than("four", 4, "s").is_ok());
    assert!(v.if_count_greater_than(&[1, 2][..], 2, "c").is_ok());
    assert!(v.if_count_less_than(&[1, 2][..], 2, "c").is_ok());
}

#[test]
fn test_guards_in_service_code_integration() {
    fn register(name: Option<&str>, age: u8, email: &str) -> GuardResult<String> {
        let v = Guard::VALIDATE;
        let name = v.if_null(name, "name")?;
        let name = v.if_length_out_of_range(name, 2, 32, "name")?;
        v.if_out_of_range(age, 18, 120, "age")?;
        v.if_not_email(email, "email")?;
        Ok(name.to_string())
    }

    assert_eq!(register(Some("Ada"), 36, "ada@example.org").unwrap(), "Ada");
    expect_rejection(register(None, 36, "ada@example.org"), "name", "REQUIRED");
    expect_rejection(register(Some("Ada"), 17, "ada@example.org"), "age", "MIN:18");
    expect_rejection(register(Some("Ada"), 36, "ada"), "email", "INVALID");
}
