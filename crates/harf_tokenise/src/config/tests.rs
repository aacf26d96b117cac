use pretty_assertions::assert_eq;

use super::*;

fn from_json(json: &str) -> Result<TokeniserConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[test]
fn defaults() {
    let config = TokeniserConfig::default();
    assert_eq!(config.max_term_length().get(), 20);
    assert!(config.lowercase());
    assert!(!config.drop_overlong_tokens());
    assert_eq!(config.script(), ScriptRange::ARABIC);
    assert_eq!(config.overlong_policy(), OverlongPolicy::Truncate);
}

#[test]
fn new_rejects_zero_length() {
    assert_eq!(
        TokeniserConfig::new(0),
        Err(ConfigError::NonPositiveMaxTermLength { value: 0 })
    );
}

#[test]
fn builder_sets_fields() {
    let latin = ScriptRange::new('a', 'z').unwrap();
    let config = TokeniserConfig::new(8)
        .unwrap()
        .with_lowercase(false)
        .with_drop_overlong_tokens(true)
        .with_script(latin);
    assert_eq!(config.max_term_length().get(), 8);
    assert!(!config.lowercase());
    assert!(config.drop_overlong_tokens());
    assert_eq!(config.script(), latin);
    assert_eq!(config.overlong_policy(), OverlongPolicy::Drop);
}

// === Deserialization ===

#[test]
fn empty_object_gives_defaults() {
    assert_eq!(from_json("{}").unwrap(), TokeniserConfig::default());
}

#[test]
fn property_names() {
    let config = from_json(
        r#"{
            "lowercase": false,
            "max.term.length": 12,
            "drop.long.tokens": true,
            "script": { "low": "a", "high": "z" }
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        TokeniserConfig::new(12)
            .unwrap()
            .with_lowercase(false)
            .with_drop_overlong_tokens(true)
            .with_script(ScriptRange::new('a', 'z').unwrap())
    );
}

#[test]
fn unrelated_properties_are_ignored() {
    let config = from_json(r#"{ "stemmer": "light10", "max.term.length": 30 }"#).unwrap();
    assert_eq!(config.max_term_length().get(), 30);
}

#[test]
fn non_positive_length_is_rejected() {
    for bad in ["0", "-1"] {
        let err = from_json(&format!(r#"{{ "max.term.length": {bad} }}"#)).unwrap_err();
        assert!(
            err.to_string().contains("max.term.length must be positive"),
            "{err}"
        );
    }
}

#[test]
fn inverted_script_is_rejected() {
    let err = from_json(r#"{ "script": { "low": "z", "high": "a" } }"#).unwrap_err();
    assert!(err.to_string().contains("script range is empty"), "{err}");
}
