use super::*;

#[test]
fn store_error_messages() {
    assert_eq!(StoreError::Unavailable.to_string(), "preference storage unavailable");
    assert_eq!(
        StoreError::Write("QuotaExceededError".to_owned()).to_string(),
        "failed to write preference: QuotaExceededError"
    );
}

#[test]
fn missing_element_names_the_element() {
    let err = ThemeError::MissingElement("#theme-toggle".to_owned());
    assert_eq!(err.to_string(), "element not found: #theme-toggle");
}

#[test]
fn config_parse_error_converts() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ThemeError::from(parse);
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("invalid theme config:"));
}
