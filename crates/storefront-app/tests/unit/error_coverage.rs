//! Error conversions and messages seen by the binary.

use storefront_app::controller::Outcome;
use storefront_app::{AppConfig, Error};
use storefront_core::ProductId;

#[test]
fn test_core_error_converts() {
    let err: Error = storefront_core::Error::config("bad level").into();
    assert!(matches!(err, Error::Core(_)));
    assert!(err.to_string().contains("bad level"));
}

#[test]
fn test_catalog_status_error_converts() {
    let err: Error = storefront_catalog::Error::Status {
        status: 503,
        url: "http://localhost:3000/products".to_string(),
    }
    .into();
    match &err {
        Error::Catalog(inner) => assert!(inner.is_retryable()),
        _ => unreachable!("Expected Catalog error"),
    }
}

#[test]
fn test_io_error_converts() {
    let err: Error = std::io::Error::other("stdout closed").into();
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = AppConfig::from_toml_str("[catalog\nbase_url =").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_invalid_catalog_url_fails_validation() {
    let config = AppConfig::from_toml_str("[catalog]\nbase_url = \"ftp://example.com\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_outcome_messages() {
    let id = ProductId::new(2);
    assert_eq!(Outcome::Changed.to_string(), "cart updated");
    assert_eq!(
        Outcome::NotInCart(id).to_string(),
        "product 2 is not in the cart"
    );
    assert!(!Outcome::AtMinimum(id).is_changed());
}
