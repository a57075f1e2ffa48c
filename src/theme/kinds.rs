#![allow(missing_docs)] // Derive macros generate undocumented methods.

use swatch_macros::IntoThemeField;

use crate::resolver::Kind;

/// Palette roles that resolve to a [`swatch_theme::PaletteColor`].
///
/// Use `resolve()` to get the colour group from a theme.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(swatch_theme::PaletteColor)]
pub enum ThemePaletteKind {
    #[theme(palette.primary)]
    Primary,
    #[theme(palette.secondary)]
    Secondary,
    #[theme(palette.tertiary)]
    Tertiary,
    #[theme(palette.error)]
    Error,
    #[theme(palette.warning)]
    Warning,
    #[theme(palette.info)]
    Info,
    #[theme(palette.success)]
    Success,
    #[theme(palette.neutral)]
    Neutral,
}

impl From<Kind> for ThemePaletteKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Primary => ThemePaletteKind::Primary,
            Kind::Secondary => ThemePaletteKind::Secondary,
            Kind::Tertiary => ThemePaletteKind::Tertiary,
            Kind::Ghost => ThemePaletteKind::Neutral,
            Kind::Error => ThemePaletteKind::Error,
            Kind::Warning => ThemePaletteKind::Warning,
            Kind::Info => ThemePaletteKind::Info,
            Kind::Success => ThemePaletteKind::Success,
        }
    }
}

/// Text styles components render labels with.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(swatch_theme::TypeStyle)]
pub enum ThemeTextKind {
    /// Section titles, such as a table header's.
    #[theme(typography.h6)]
    Title,
    #[theme(typography.subtitle2)]
    Subtitle,
    #[theme(typography.body1)]
    Body,
    #[theme(typography.body2)]
    BodySmall,
    #[theme(typography.button)]
    Button,
    /// Helper text and subtext.
    #[theme(typography.caption)]
    Caption,
}

/// Single-token surface and text colours.
#[derive(IntoThemeField, Debug, Clone, Copy, PartialEq, Eq)]
#[field(swatch_theme::TokenRef)]
pub enum ThemeSurfaceKind {
    #[theme(palette.background.default)]
    Background,
    #[theme(palette.background.paper)]
    Paper,
    #[theme(palette.divider)]
    Divider,
    #[theme(palette.text.primary)]
    TextPrimary,
    #[theme(palette.text.secondary)]
    TextSecondary,
    #[theme(palette.text.disabled)]
    TextDisabled,
    #[theme(palette.action.focus)]
    FocusRing,
}
