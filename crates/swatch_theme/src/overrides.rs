use indexmap::IndexMap;

use crate::{
    ComponentOverride, FontWeight, PaletteRole, StyleRules, TypeLevel,
    bridge::TokenLookup,
    catalog::{self, spacing_token},
};

/// Static per-primitive overrides, applied to every instance regardless of props.
pub(crate) fn component_overrides(lookup: &mut TokenLookup<'_>) -> IndexMap<String, ComponentOverride> {
    let mut components = IndexMap::new();

    components.insert(
        "MuiButton".to_string(),
        ComponentOverride::new()
            .slot(
                "root",
                StyleRules::new()
                    .set("borderRadius", lookup.get(catalog::RADIUS_MD))
                    .set("textTransform", "none")
                    .set("fontWeight", lookup.get(FontWeight::Semibold.token()))
                    .set("boxShadow", lookup.get(catalog::SHADOW_TOKENS[0]))
                    .set(
                        "transitionDuration",
                        lookup.get(catalog::DURATION_SHORT),
                    )
                    .set(
                        "&.Mui-disabled",
                        StyleRules::new()
                            .set("color", lookup.get(catalog::TEXT_DISABLED))
                            .set(
                                "backgroundColor",
                                lookup.get(catalog::ACTION_DISABLED_BACKGROUND),
                            ),
                    ),
            )
            .slot(
                "sizeSmall",
                StyleRules::new().set(
                    "padding",
                    format!(
                        "{} {}",
                        lookup.get(&spacing_token(4)),
                        lookup.get(&spacing_token(12))
                    ),
                ),
            )
            .slot(
                "sizeLarge",
                StyleRules::new().set(
                    "padding",
                    format!(
                        "{} {}",
                        lookup.get(&spacing_token(12)),
                        lookup.get(&spacing_token(24))
                    ),
                ),
            )
            .slot(
                "focusVisible",
                StyleRules::new().set(
                    "outline",
                    format!("2px solid {}", lookup.get(catalog::FOCUS_RING)),
                ),
            ),
    );

    components.insert(
        "MuiButtonGroup".to_string(),
        ComponentOverride::new()
            .slot(
                "root",
                StyleRules::new().set("borderRadius", lookup.get(catalog::RADIUS_MD)),
            )
            .slot(
                "grouped",
                StyleRules::new().set("minWidth", lookup.get(&spacing_token(40))),
            ),
    );

    components.insert(
        "MuiCard".to_string(),
        ComponentOverride::new().slot(
            "root",
            StyleRules::new()
                .set("borderRadius", lookup.get(catalog::RADIUS_LG))
                .set("boxShadow", lookup.get(catalog::SHADOW_TOKENS[2]))
                .set(
                    "&:hover",
                    StyleRules::new()
                        .set("transform", "translateY(-2px)")
                        .set("boxShadow", lookup.get(catalog::SHADOW_TOKENS[3])),
                ),
        ),
    );

    components.insert(
        "MuiChip".to_string(),
        ComponentOverride::new()
            .slot(
                "root",
                StyleRules::new()
                    .set("borderRadius", lookup.get(catalog::RADIUS_FULL))
                    .set("fontWeight", lookup.get(FontWeight::Medium.token())),
            )
            .slot(
                "sizeSmall",
                StyleRules::new().set("height", lookup.get(&spacing_token(24))),
            ),
    );

    components.insert(
        "MuiMenu".to_string(),
        ComponentOverride::new()
            .slot(
                "paper",
                StyleRules::new()
                    .set("borderRadius", lookup.get(catalog::RADIUS_MD))
                    .set("boxShadow", lookup.get(catalog::SHADOW_TOKENS[4]))
                    .set("backgroundColor", lookup.get(catalog::BACKGROUND_PAPER)),
            )
            .slot(
                "list",
                StyleRules::new().set("padding", lookup.get(&spacing_token(4))),
            ),
    );

    components.insert(
        "MuiOutlinedInput".to_string(),
        ComponentOverride::new()
            .slot(
                "root",
                StyleRules::new()
                    .set("borderRadius", lookup.get(catalog::RADIUS_MD))
                    .set(
                        "&.Mui-focused .MuiOutlinedInput-notchedOutline",
                        StyleRules::new()
                            .set("borderColor", lookup.get(PaletteRole::Primary.main_token())),
                    )
                    .set(
                        "&.Mui-error .MuiOutlinedInput-notchedOutline",
                        StyleRules::new()
                            .set("borderColor", lookup.get(PaletteRole::Error.main_token())),
                    ),
            )
            .slot(
                "notchedOutline",
                StyleRules::new().set("borderColor", lookup.get(catalog::DIVIDER)),
            ),
    );

    components.insert(
        "MuiPaper".to_string(),
        ComponentOverride::new().slot(
            "rounded",
            StyleRules::new().set("borderRadius", lookup.get(catalog::RADIUS_LG)),
        ),
    );

    components.insert(
        "MuiSlider".to_string(),
        ComponentOverride::new()
            .slot(
                "thumb",
                StyleRules::new().set(
                    "&:hover, &.Mui-focusVisible",
                    StyleRules::new().set(
                        "boxShadow",
                        format!(
                            "0 0 0 {} {}",
                            lookup.get(&spacing_token(8)),
                            lookup.get(catalog::ACTION_HOVER)
                        ),
                    ),
                ),
            )
            .slot(
                "rail",
                StyleRules::new()
                    .set("opacity", "1")
                    .set("backgroundColor", lookup.get(catalog::DIVIDER)),
            ),
    );

    components.insert(
        "MuiTableCell".to_string(),
        ComponentOverride::new()
            .slot(
                "root",
                StyleRules::new().set("borderBottomColor", lookup.get(catalog::DIVIDER)),
            )
            .slot(
                "head",
                StyleRules::new()
                    .set("fontWeight", lookup.get(FontWeight::Semibold.token()))
                    .set("backgroundColor", lookup.get(catalog::BACKGROUND_PAPER)),
            ),
    );

    components.insert(
        "MuiTooltip".to_string(),
        ComponentOverride::new().slot(
            "tooltip",
            StyleRules::new()
                .set("borderRadius", lookup.get(catalog::RADIUS_SM))
                .set("fontSize", lookup.get(&TypeLevel::Caption.size_token()))
                .set("backgroundColor", lookup.get(&PaletteRole::Neutral.dark_token())),
        ),
    );

    components
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{ThemeBridge, TokenMap};

    #[test]
    fn test_overrides_are_keyed_by_primitive() {
        let theme = ThemeBridge::new(Arc::new(TokenMap::builtin().clone()))
            .build()
            .unwrap();

        let names: Vec<&str> = theme.components.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                "MuiButton",
                "MuiButtonGroup",
                "MuiCard",
                "MuiChip",
                "MuiMenu",
                "MuiOutlinedInput",
                "MuiPaper",
                "MuiSlider",
                "MuiTableCell",
                "MuiTooltip"
            ]
        );
    }

    #[test]
    fn test_card_hover_override() {
        let theme = ThemeBridge::new(Arc::new(TokenMap::builtin().clone()))
            .build()
            .unwrap();

        let hover = theme
            .component("MuiCard")
            .and_then(|card| card.rules("root"))
            .and_then(|root| root.nested("&:hover"))
            .expect("MuiCard should override its hover state");

        assert_eq!(hover.value("transform"), Some("translateY(-2px)"));
        assert_eq!(hover.value("boxShadow"), Some("var(--shadow-md)"));
    }

    #[test]
    fn test_button_size_blocks() {
        let theme = ThemeBridge::new(Arc::new(TokenMap::builtin().clone()))
            .build()
            .unwrap();
        let button = theme.component("MuiButton").unwrap();

        assert_eq!(
            button.rules("sizeSmall").and_then(|rules| rules.value("padding")),
            Some("var(--spacing-4) var(--spacing-12)")
        );
        assert_eq!(
            button.rules("root").and_then(|rules| rules.value("borderRadius")),
            Some("var(--radius-md)")
        );
    }

    #[test]
    fn test_overrides_serialize_as_nested_objects() {
        let theme = ThemeBridge::new(Arc::new(TokenMap::builtin().clone()))
            .build()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&theme.to_json().unwrap()).unwrap();

        assert_eq!(
            json["components"]["MuiCard"]["styleOverrides"]["root"]["&:hover"]["transform"],
            "translateY(-2px)"
        );
        assert_eq!(json["palette"]["primary"]["contrastText"], "var(--color-primary-contrast)");
        assert_eq!(json["typography"]["h1"]["fontFamily"], "var(--font-family-heading)");
        assert_eq!(json["shadows"].as_array().map(Vec::len), Some(25));
    }
}
