use super::*;

fn names(fields: &[FieldDescriptor]) -> Vec<&'static str> {
    fields.iter().map(|f| f.name).collect()
}

#[test]
fn every_kind_resolves_to_its_declared_fields() {
    let expected: &[(&str, &[&str])] = &[
        ("email", &["address"]),
        ("slack", &["webhook_url", "channel"]),
        ("webhook", &["url", "shared_secret"]),
        ("discord", &["webhook_url", "username"]),
    ];
    for (key, field_names) in expected {
        let fields = resolve(key).expect("declared kind");
        assert_eq!(&names(fields), field_names, "template for `{key}`");
    }
}

#[test]
fn unknown_kind_is_an_explicit_error() {
    assert_eq!(
        resolve("pagerduty"),
        Err(TemplateError::NotFound("pagerduty".to_owned()))
    );
}

#[test]
fn lookup_is_exact_not_prefixed() {
    assert!(resolve("email ").is_err());
    assert!(resolve("EMAIL").is_err());
    assert!(resolve("").is_err());
}

#[test]
fn endpoint_keys_match_the_registry() {
    let keys: Vec<_> = endpoint_keys().collect();
    assert_eq!(keys, vec!["email", "slack", "webhook", "discord"]);
    for key in keys {
        assert!(resolve(key).is_ok());
    }
}

#[test]
fn templates_are_distinct_per_kind() {
    let keys: Vec<_> = endpoint_keys().collect();
    for (i, a) in keys.iter().enumerate() {
        for b in keys.iter().skip(i + 1) {
            assert_ne!(
                resolve(a).unwrap(),
                resolve(b).unwrap(),
                "`{a}` and `{b}` declare the same field set"
            );
        }
    }
}

#[test]
fn field_kinds_map_to_input_types() {
    assert_eq!(FieldKind::Text.input_type(), "text");
    assert_eq!(FieldKind::Email.input_type(), "email");
    assert_eq!(FieldKind::Url.input_type(), "url");
    assert_eq!(FieldKind::Password.input_type(), "password");
}
