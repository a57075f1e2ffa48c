use indexmap::IndexMap;
use serde::Serialize;

use crate::{PaletteRole, ThemeError, TokenRef, TypeLevel};

/// Theme structured the way the target component framework consumes it.
///
/// Every leaf is a token reference (or a static keyword in the component
/// overrides); nothing here is a literal design value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeObject {
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: SpacingScale,
    pub shape: Shape,
    pub shadows: Vec<Shadow>,
    pub transitions: Transitions,
    pub components: IndexMap<String, ComponentOverride>,
}

impl ThemeObject {
    /// Length for a spacing factor, see [`SpacingScale::resolve`].
    pub fn spacing(&self, factor: i32) -> Spacing {
        self.spacing.resolve(factor)
    }

    pub fn shadow(&self, elevation: usize) -> Option<&Shadow> {
        self.shadows.get(elevation)
    }

    pub fn component(&self, name: &str) -> Option<&ComponentOverride> {
        self.components.get(name)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: TokenRef,
    pub light: TokenRef,
    pub dark: TokenRef,
    pub contrast_text: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub tertiary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub neutral: PaletteColor,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: TokenRef,
    pub action: ActionColors,
}

impl Palette {
    pub fn role(&self, role: PaletteRole) -> &PaletteColor {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Tertiary => &self.tertiary,
            PaletteRole::Error => &self.error,
            PaletteRole::Warning => &self.warning,
            PaletteRole::Info => &self.info,
            PaletteRole::Success => &self.success,
            PaletteRole::Neutral => &self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundColors {
    pub default: TokenRef,
    pub paper: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: TokenRef,
    pub secondary: TokenRef,
    pub disabled: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionColors {
    pub hover: TokenRef,
    pub selected: TokenRef,
    pub disabled: TokenRef,
    pub disabled_background: TokenRef,
    pub focus: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: TokenRef,
    pub font_size: TokenRef,
    pub font_weight: TokenRef,
    pub line_height: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: TokenRef,
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub h4: TypeStyle,
    pub h5: TypeStyle,
    pub h6: TypeStyle,
    pub subtitle1: TypeStyle,
    pub subtitle2: TypeStyle,
    pub body1: TypeStyle,
    pub body2: TypeStyle,
    pub button: TypeStyle,
    pub caption: TypeStyle,
    pub overline: TypeStyle,
}

impl Typography {
    pub fn level(&self, level: TypeLevel) -> &TypeStyle {
        match level {
            TypeLevel::H1 => &self.h1,
            TypeLevel::H2 => &self.h2,
            TypeLevel::H3 => &self.h3,
            TypeLevel::H4 => &self.h4,
            TypeLevel::H5 => &self.h5,
            TypeLevel::H6 => &self.h6,
            TypeLevel::Subtitle1 => &self.subtitle1,
            TypeLevel::Subtitle2 => &self.subtitle2,
            TypeLevel::Body1 => &self.body1,
            TypeLevel::Body2 => &self.body2,
            TypeLevel::Button => &self.button,
            TypeLevel::Caption => &self.caption,
            TypeLevel::Overline => &self.overline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacingStep {
    pub factor: u8,
    pub units: u16,
    pub token: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingScale {
    pub steps: Vec<SpacingStep>,
    pub fallback_unit: i32,
}

impl SpacingScale {
    /// Looks `factor` up in the table; any factor outside it (negative
    /// ones included) becomes `factor * fallback_unit` length units.
    pub fn resolve(&self, factor: i32) -> Spacing {
        let step = usize::try_from(factor)
            .ok()
            .and_then(|index| self.steps.get(index));

        match step {
            Some(step) => Spacing::Token {
                token: step.token.clone(),
                units: step.units as i32,
            },
            None => Spacing::Fallback {
                units: factor.saturating_mul(self.fallback_unit),
            },
        }
    }
}

/// A resolved spacing length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spacing {
    /// In-table factor, backed by a spacing token.
    Token { token: TokenRef, units: i32 },
    /// Out-of-table factor approximated on the linear scale.
    Fallback { units: i32 },
}

impl Spacing {
    /// Length in units.
    pub fn units(&self) -> i32 {
        match self {
            Spacing::Token { units, .. } | Spacing::Fallback { units } => *units,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Spacing::Fallback { .. })
    }

    pub fn to_css(&self) -> String {
        match self {
            Spacing::Token { token, .. } => token.to_string(),
            Spacing::Fallback { units } => format!("{units}px"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub border_radius: TokenRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transitions {
    pub duration_short: TokenRef,
    pub duration_standard: TokenRef,
    pub easing: TokenRef,
}

/// One entry of the elevation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Shadow {
    Token(TokenRef),
    /// Generated past the named elevations to fill the list.
    Synthesized(String),
}

impl Shadow {
    pub fn as_str(&self) -> &str {
        match self {
            Shadow::Token(token) => token.as_str(),
            Shadow::Synthesized(value) => value,
        }
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self, Shadow::Synthesized(_))
    }
}

/// A style declaration: either a value or a nested selector block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Value(String),
    Nested(StyleRules),
}

impl From<TokenRef> for StyleValue {
    fn from(value: TokenRef) -> Self {
        StyleValue::Value(value.into())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Value(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Value(value)
    }
}

impl From<StyleRules> for StyleValue {
    fn from(value: StyleRules) -> Self {
        StyleValue::Nested(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleRules(IndexMap<String, StyleValue>);

impl StyleRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    /// Value of `property` when it is a plain declaration.
    pub fn value(&self, property: &str) -> Option<&str> {
        match self.0.get(property)? {
            StyleValue::Value(value) => Some(value),
            StyleValue::Nested(_) => None,
        }
    }

    /// Nested block for `selector`.
    pub fn nested(&self, selector: &str) -> Option<&StyleRules> {
        match self.0.get(selector)? {
            StyleValue::Nested(rules) => Some(rules),
            StyleValue::Value(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(property, value)| (property.as_str(), value))
    }
}

/// Static style overrides for one framework primitive, keyed by slot name
/// (`root`, `sizeSmall`, `paper`...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverride {
    pub style_overrides: IndexMap<String, StyleRules>,
}

impl ComponentOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(mut self, slot: impl Into<String>, rules: StyleRules) -> Self {
        self.style_overrides.insert(slot.into(), rules);
        self
    }

    pub fn rules(&self, slot: &str) -> Option<&StyleRules> {
        self.style_overrides.get(slot)
    }
}
