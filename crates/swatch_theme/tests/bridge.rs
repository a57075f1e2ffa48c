use std::sync::Arc;

use serde_json::Value;
use swatch_theme::{ThemeBridge, TokenMap, TokenRef};

fn builtin_theme_json() -> Value {
    let theme = ThemeBridge::new(Arc::new(TokenMap::builtin().clone()))
        .build()
        .unwrap();
    serde_json::from_str(&theme.to_json().unwrap()).unwrap()
}

fn string_leaves<'a>(value: &'a Value, path: String, leaves: &mut Vec<(String, &'a str)>) {
    match value {
        Value::String(string) => leaves.push((path, string)),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                string_leaves(item, format!("{path}[{index}]"), leaves);
            }
        }
        Value::Object(entries) => {
            for (key, entry) in entries {
                string_leaves(entry, format!("{path}.{key}"), leaves);
            }
        }
        _ => {}
    }
}

#[test]
fn test_theme_sections_hold_only_token_references() {
    let json = builtin_theme_json();

    for section in ["palette", "typography", "shape", "transitions"] {
        let mut leaves = Vec::new();
        string_leaves(&json[section], section.to_string(), &mut leaves);

        assert!(!leaves.is_empty(), "{section} should not be empty");
        for (path, leaf) in leaves {
            assert!(
                TokenRef::parse(leaf).is_some(),
                "{path} should be a token reference, got {leaf:?}"
            );
        }
    }
}

#[test]
fn test_synthesized_shadows_reference_shadow_colour() {
    let json = builtin_theme_json();
    let shadows = json["shadows"].as_array().unwrap();

    assert_eq!(shadows.len(), 25);
    assert_eq!(shadows[0], "var(--shadow-none)");
    assert_eq!(shadows[7], "var(--shadow-3xl)");
    for shadow in &shadows[8..] {
        assert!(
            shadow.as_str().unwrap().ends_with("var(--color-shadow)"),
            "{shadow}"
        );
    }
    assert_eq!(shadows[24], "0px 38px 76px 17px var(--color-shadow)");
}

#[test]
fn test_spacing_table_is_exported_with_tokens() {
    let json = builtin_theme_json();
    let steps = json["spacing"]["steps"].as_array().unwrap();

    assert_eq!(steps.len(), 13);
    assert_eq!(steps[7]["units"], 32);
    assert_eq!(steps[7]["token"], "var(--spacing-32)");
    assert_eq!(json["spacing"]["fallbackUnit"], 4);
}

#[test]
fn test_custom_registry_values_reach_every_consumer() {
    let tokens = ThemeBridge::required_keys()
        .into_iter()
        .map(|key| {
            let renamed = TokenRef::custom_property(format!("acme-{key}"));
            (key, renamed)
        })
        .collect::<TokenMap>();
    let theme = ThemeBridge::new(Arc::new(tokens)).build().unwrap();

    assert_eq!(theme.palette.success.dark.as_str(), "var(--acme-color-success-green-dark)");
    assert_eq!(theme.typography.h1.font_family.as_str(), "var(--acme-font-family-heading)");
    assert_eq!(
        theme.spacing(2).to_css(),
        "var(--acme-spacing-8)",
        "Spacing should carry the registry's reference"
    );
    assert_eq!(theme.spacing(-3).to_css(), "-12px");
}
