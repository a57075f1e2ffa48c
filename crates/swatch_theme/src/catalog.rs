//! Names of the design tokens the theme bridge reads.
//!
//! Only names live here. Values are supplied by the host through a
//! [`TokenMap`](crate::TokenMap).

#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

/// Semantic color roles of the palette.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn main_token(&self) -> &'static str)]
pub enum PaletteRole {
    #[assoc(name = "primary")]
    #[assoc(main_token = "color-primary-blue")]
    Primary,
    #[assoc(name = "secondary")]
    #[assoc(main_token = "color-secondary-purple")]
    Secondary,
    #[assoc(name = "tertiary")]
    #[assoc(main_token = "color-tertiary-teal")]
    Tertiary,
    #[assoc(name = "error")]
    #[assoc(main_token = "color-error-red")]
    Error,
    #[assoc(name = "warning")]
    #[assoc(main_token = "color-warning-amber")]
    Warning,
    #[assoc(name = "info")]
    #[assoc(main_token = "color-info-cyan")]
    Info,
    #[assoc(name = "success")]
    #[assoc(main_token = "color-success-green")]
    Success,
    #[assoc(name = "neutral")]
    #[assoc(main_token = "color-neutral-gray")]
    Neutral,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 8] = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Tertiary,
        PaletteRole::Error,
        PaletteRole::Warning,
        PaletteRole::Info,
        PaletteRole::Success,
        PaletteRole::Neutral,
    ];

    pub fn light_token(&self) -> String {
        format!("{}-light", self.main_token())
    }

    pub fn dark_token(&self) -> String {
        format!("{}-dark", self.main_token())
    }

    pub fn contrast_token(&self) -> String {
        format!("color-{}-contrast", self.name())
    }
}

/// Font weights available to the type scale.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn token(&self) -> &'static str)]
pub enum FontWeight {
    #[assoc(token = "font-weight-regular")]
    Regular,
    #[assoc(token = "font-weight-medium")]
    Medium,
    #[assoc(token = "font-weight-semibold")]
    Semibold,
    #[assoc(token = "font-weight-bold")]
    Bold,
}

/// Levels of the type scale, named the way the target framework names them.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn family_token(&self) -> &'static str)]
#[func(pub fn weight(&self) -> FontWeight)]
pub enum TypeLevel {
    #[assoc(name = "h1")]
    #[assoc(family_token = FONT_FAMILY_HEADING)]
    #[assoc(weight = FontWeight::Bold)]
    H1,
    #[assoc(name = "h2")]
    #[assoc(family_token = FONT_FAMILY_HEADING)]
    #[assoc(weight = FontWeight::Bold)]
    H2,
    #[assoc(name = "h3")]
    #[assoc(family_token = FONT_FAMILY_HEADING)]
    #[assoc(weight = FontWeight::Bold)]
    H3,
    #[assoc(name = "h4")]
    #[assoc(family_token = FONT_FAMILY_HEADING)]
    #[assoc(weight = FontWeight::Semibold)]
    H4,
    #[assoc(name = "h5")]
    #[assoc(family_token = FONT_FAMILY_HEADING)]
    #[assoc(weight = FontWeight::Semibold)]
    H5,
    #[assoc(name = "h6")]
    #[assoc(family_token = FONT_FAMILY_HEADING)]
    #[assoc(weight = FontWeight::Semibold)]
    H6,
    #[assoc(name = "subtitle1")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Medium)]
    Subtitle1,
    #[assoc(name = "subtitle2")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Medium)]
    Subtitle2,
    #[assoc(name = "body1")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Regular)]
    Body1,
    #[assoc(name = "body2")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Regular)]
    Body2,
    #[assoc(name = "button")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Semibold)]
    Button,
    #[assoc(name = "caption")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Regular)]
    Caption,
    #[assoc(name = "overline")]
    #[assoc(family_token = FONT_FAMILY_BODY)]
    #[assoc(weight = FontWeight::Medium)]
    Overline,
}

impl TypeLevel {
    pub const ALL: [TypeLevel; 13] = [
        TypeLevel::H1,
        TypeLevel::H2,
        TypeLevel::H3,
        TypeLevel::H4,
        TypeLevel::H5,
        TypeLevel::H6,
        TypeLevel::Subtitle1,
        TypeLevel::Subtitle2,
        TypeLevel::Body1,
        TypeLevel::Body2,
        TypeLevel::Button,
        TypeLevel::Caption,
        TypeLevel::Overline,
    ];

    pub fn size_token(&self) -> String {
        format!("font-size-{}", self.name())
    }

    pub fn line_height_token(&self) -> String {
        format!("line-height-{}", self.name())
    }
}

pub const FONT_FAMILY_HEADING: &str = "font-family-heading";
pub const FONT_FAMILY_BODY: &str = "font-family-body";

pub const BACKGROUND_DEFAULT: &str = "color-background";
pub const BACKGROUND_PAPER: &str = "color-surface";
pub const TEXT_PRIMARY: &str = "color-text-primary";
pub const TEXT_SECONDARY: &str = "color-text-secondary";
pub const TEXT_DISABLED: &str = "color-text-disabled";
pub const DIVIDER: &str = "color-divider";
pub const ACTION_HOVER: &str = "color-action-hover";
pub const ACTION_SELECTED: &str = "color-action-selected";
pub const ACTION_DISABLED: &str = "color-action-disabled";
pub const ACTION_DISABLED_BACKGROUND: &str = "color-action-disabled-background";
pub const FOCUS_RING: &str = "color-focus-ring";
pub const SHADOW_COLOR: &str = "color-shadow";

pub const RADIUS_SM: &str = "radius-sm";
pub const RADIUS_MD: &str = "radius-md";
pub const RADIUS_LG: &str = "radius-lg";
pub const RADIUS_FULL: &str = "radius-full";

pub const DURATION_SHORT: &str = "motion-duration-short";
pub const DURATION_STANDARD: &str = "motion-duration-standard";
pub const EASING_STANDARD: &str = "motion-easing-standard";

/// Length units for spacing factors 0 through 12.
pub const SPACING_SCALE: [u16; 13] = [0, 4, 8, 12, 16, 20, 24, 32, 40, 48, 56, 64, 80];

/// Multiplier for spacing factors outside [`SPACING_SCALE`].
pub const SPACING_FALLBACK_UNIT: i32 = 4;

pub fn spacing_token(units: u16) -> String {
    format!("spacing-{units}")
}

/// Elevations 0 through 7, lowest first.
pub const SHADOW_TOKENS: [&str; 8] = [
    "shadow-none",
    "shadow-xs",
    "shadow-sm",
    "shadow-md",
    "shadow-lg",
    "shadow-xl",
    "shadow-2xl",
    "shadow-3xl",
];
