#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use swatch_theme::PaletteRole;

use super::deserializers::{WireEnum, de_lossy};

/// Visual kind of a control.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn palette_role(&self) -> PaletteRole)]
pub enum Kind {
    #[default]
    #[assoc(as_str = "primary")]
    #[assoc(palette_role = PaletteRole::Primary)]
    Primary,
    #[assoc(as_str = "secondary")]
    #[assoc(palette_role = PaletteRole::Secondary)]
    Secondary,
    #[assoc(as_str = "tertiary")]
    #[assoc(palette_role = PaletteRole::Tertiary)]
    Tertiary,
    #[assoc(as_str = "ghost")]
    #[assoc(palette_role = PaletteRole::Neutral)]
    Ghost,
    #[assoc(as_str = "error")]
    #[assoc(palette_role = PaletteRole::Error)]
    Error,
    #[assoc(as_str = "warning")]
    #[assoc(palette_role = PaletteRole::Warning)]
    Warning,
    #[assoc(as_str = "info")]
    #[assoc(palette_role = PaletteRole::Info)]
    Info,
    #[assoc(as_str = "success")]
    #[assoc(palette_role = PaletteRole::Success)]
    Success,
}

impl WireEnum for Kind {
    const FIELD: &'static str = "kind";
    const ALL: &'static [Self] = &[
        Kind::Primary,
        Kind::Secondary,
        Kind::Tertiary,
        Kind::Ghost,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Success,
    ];

    fn wire_name(&self) -> &'static str {
        self.as_str()
    }
}

/// Control size.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn icon_px(&self) -> f32)]
pub enum Size {
    #[assoc(as_str = "extra-small")]
    #[assoc(icon_px = 14.)]
    ExtraSmall,
    #[assoc(as_str = "small")]
    #[assoc(icon_px = 14.)]
    Small,
    #[default]
    #[assoc(as_str = "default")]
    #[assoc(icon_px = 18.)]
    Default,
    #[assoc(as_str = "large")]
    #[assoc(icon_px = 20.)]
    Large,
}

impl WireEnum for Size {
    const FIELD: &'static str = "size";
    const ALL: &'static [Self] = &[Size::ExtraSmall, Size::Small, Size::Default, Size::Large];

    fn wire_name(&self) -> &'static str {
        self.as_str()
    }
}

/// Interaction state a caller may force, mostly for documentation and tests.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum InteractionState {
    #[default]
    #[assoc(as_str = "default")]
    Default,
    #[assoc(as_str = "hover")]
    Hover,
    #[assoc(as_str = "clicked")]
    Clicked,
    #[assoc(as_str = "focused")]
    Focused,
    #[assoc(as_str = "loading")]
    Loading,
    #[assoc(as_str = "disabled")]
    Disabled,
}

impl WireEnum for InteractionState {
    const FIELD: &'static str = "requestedState";
    const ALL: &'static [Self] = &[
        InteractionState::Default,
        InteractionState::Hover,
        InteractionState::Clicked,
        InteractionState::Focused,
        InteractionState::Loading,
        InteractionState::Disabled,
    ];

    fn wire_name(&self) -> &'static str {
        self.as_str()
    }
}

/// The one state a control renders in after precedence is applied.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum EffectiveState {
    #[assoc(as_str = "disabled")]
    Disabled,
    #[assoc(as_str = "loading")]
    Loading,
    #[assoc(as_str = "hover")]
    Hover,
    #[assoc(as_str = "clicked")]
    Clicked,
    #[assoc(as_str = "focused")]
    Focused,
    #[assoc(as_str = "default")]
    Default,
}

impl EffectiveState {
    /// Whether activation handlers may run.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, EffectiveState::Disabled | EffectiveState::Loading)
    }
}

impl fmt::Display for EffectiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum Width {
    #[default]
    #[assoc(as_str = "auto")]
    Auto,
    #[assoc(as_str = "full")]
    Full,
}

impl WireEnum for Width {
    const FIELD: &'static str = "width";
    const ALL: &'static [Self] = &[Width::Auto, Width::Full];

    fn wire_name(&self) -> &'static str {
        self.as_str()
    }
}

/// The style axes of a control, as callers declare them.
///
/// Field names and enum strings are the prop wire format. Unknown enum
/// strings resolve to the field's default instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSpec {
    #[serde(deserialize_with = "de_lossy")]
    pub kind: Kind,
    #[serde(deserialize_with = "de_lossy")]
    pub size: Size,
    #[serde(deserialize_with = "de_lossy")]
    pub requested_state: InteractionState,
    #[serde(alias = "alt")]
    pub outline: bool,
    pub loading: bool,
    pub disabled: bool,
    pub icon_only: bool,
    #[serde(deserialize_with = "de_lossy")]
    pub width: Width,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn requested_state(mut self, state: InteractionState) -> Self {
        self.requested_state = state;
        self
    }

    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Name of an icon; the host maps names to assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconName(String);

impl IconName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for IconName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Content that fills a control's slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSpec {
    pub label: Option<String>,
    pub aria_label: Option<String>,
    pub icon: Option<IconName>,
    pub leading_icon: Option<IconName>,
    pub trailing_icon: Option<IconName>,
    /// Requested icon size in pixels; bucketed, never passed through.
    pub icon_size: Option<f32>,
}

impl ContentSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn leading_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    pub fn trailing_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, px: f32) -> Self {
        self.icon_size = Some(px);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_spec_wire_names() {
        let spec: StyleSpec = serde_json::from_str(
            r#"{
                "kind": "error",
                "size": "extra-small",
                "requestedState": "hover",
                "alt": true,
                "iconOnly": true,
                "width": "full",
                "className": "toolbar-action"
            }"#,
        )
        .unwrap();

        assert_eq!(spec.kind, Kind::Error);
        assert_eq!(spec.size, Size::ExtraSmall);
        assert_eq!(spec.requested_state, InteractionState::Hover);
        assert!(spec.outline, "`alt` is an alias of `outline`");
        assert!(spec.icon_only);
        assert_eq!(spec.width, Width::Full);
        assert_eq!(spec.class_name.as_deref(), Some("toolbar-action"));
    }

    #[test]
    fn test_style_spec_serializes_wire_names() {
        let spec = StyleSpec::new()
            .kind(Kind::Ghost)
            .size(Size::ExtraSmall)
            .requested_state(InteractionState::Focused);
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["kind"], "ghost");
        assert_eq!(json["size"], "extra-small");
        assert_eq!(json["requestedState"], "focused");
        assert_eq!(json["iconOnly"], false);
        assert!(json.get("className").is_none());
    }

    #[test]
    fn test_out_of_enum_values_use_defaults() {
        let spec: StyleSpec = serde_json::from_str(
            r#"{ "kind": "danger", "size": "huge", "requestedState": "pressed", "width": 3 }"#,
        )
        .unwrap();

        assert_eq!(spec.kind, Kind::Primary);
        assert_eq!(spec.size, Size::Default);
        assert_eq!(spec.requested_state, InteractionState::Default);
        assert_eq!(spec.width, Width::Auto);
    }

    #[test]
    fn test_empty_object_is_default_spec() {
        let spec: StyleSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, StyleSpec::default());
    }

    #[test]
    fn test_kind_palette_roles() {
        assert_eq!(Kind::Ghost.palette_role(), PaletteRole::Neutral);
        assert_eq!(Kind::Error.palette_role(), PaletteRole::Error);
        assert_eq!(Kind::Primary.palette_role(), PaletteRole::Primary);
    }

    #[test]
    fn test_effective_state_input_gate() {
        assert!(!EffectiveState::Disabled.accepts_input());
        assert!(!EffectiveState::Loading.accepts_input());
        assert!(EffectiveState::Hover.accepts_input());
        assert!(EffectiveState::Default.accepts_input());
    }
}
