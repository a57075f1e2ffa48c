use std::sync::Arc;

use indexmap::IndexSet;

use crate::{
    ActionColors, BackgroundColors, BridgeConfig, MissingTokenPolicy, Palette, PaletteColor,
    PaletteRole, Shadow, Shape, SpacingScale, SpacingStep, TextColors, ThemeError, ThemeObject,
    TokenMap, TokenRef, Transitions, TypeLevel, TypeStyle, Typography,
    catalog::{self, SHADOW_TOKENS, SPACING_FALLBACK_UNIT, SPACING_SCALE},
    overrides::component_overrides,
};

/// Projects a [`TokenMap`] onto a [`ThemeObject`].
///
/// Every theme field is assigned exactly one token reference. Nothing is
/// computed from token values: light and dark variants are their own tokens.
#[derive(Debug, Clone)]
pub struct ThemeBridge {
    tokens: Arc<TokenMap>,
    config: BridgeConfig,
}

impl ThemeBridge {
    pub fn new(tokens: Arc<TokenMap>) -> Self {
        Self {
            tokens,
            config: BridgeConfig::default(),
        }
    }

    pub fn config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tokens(&self) -> &Arc<TokenMap> {
        &self.tokens
    }

    pub fn build(&self) -> Result<ThemeObject, ThemeError> {
        let mut lookup = TokenLookup::new(&self.tokens);
        let theme = assemble(&mut lookup, &self.config);

        if let Some(key) = lookup.missing.first() {
            match self.config.missing_token {
                MissingTokenPolicy::Fail => {
                    return Err(ThemeError::MissingToken {
                        key: key.clone(),
                        total: lookup.missing.len(),
                    });
                }
                MissingTokenPolicy::Unresolved => {
                    for key in &lookup.missing {
                        tracing::warn!(token = %key, "design token missing, emitting unresolved reference");
                    }
                }
            }
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            consumed = lookup.requested.len(),
            shadows = theme.shadows.len(),
            components = theme.components.len(),
            "built theme object"
        );

        Ok(theme)
    }

    /// Every token name a build reads, in the order it reads them.
    pub fn required_keys() -> Vec<String> {
        let empty = TokenMap::from_iter(std::iter::empty());
        let mut lookup = TokenLookup::new(&empty);
        assemble(&mut lookup, &BridgeConfig::default());
        lookup.requested.into_iter().collect()
    }
}

/// Records which tokens were read and which were absent.
pub(crate) struct TokenLookup<'a> {
    tokens: &'a TokenMap,
    requested: IndexSet<String>,
    missing: Vec<String>,
}

impl<'a> TokenLookup<'a> {
    fn new(tokens: &'a TokenMap) -> Self {
        Self {
            tokens,
            requested: IndexSet::new(),
            missing: Vec::new(),
        }
    }

    /// The registered reference, or the unresolved `var(--key)` if absent.
    pub(crate) fn get(&mut self, key: &str) -> TokenRef {
        let first_request = self.requested.insert(key.to_string());

        match self.tokens.get(key) {
            Some(token) => token.clone(),
            None => {
                if first_request {
                    self.missing.push(key.to_string());
                }
                TokenRef::custom_property(key)
            }
        }
    }
}

fn assemble(lookup: &mut TokenLookup<'_>, config: &BridgeConfig) -> ThemeObject {
    ThemeObject {
        palette: palette(lookup),
        typography: typography(lookup),
        spacing: spacing(lookup),
        shape: Shape {
            border_radius: lookup.get(catalog::RADIUS_MD),
        },
        shadows: shadows(lookup, config.effective_shadow_count()),
        transitions: Transitions {
            duration_short: lookup.get(catalog::DURATION_SHORT),
            duration_standard: lookup.get(catalog::DURATION_STANDARD),
            easing: lookup.get(catalog::EASING_STANDARD),
        },
        components: component_overrides(lookup),
    }
}

fn palette_color(lookup: &mut TokenLookup<'_>, role: PaletteRole) -> PaletteColor {
    PaletteColor {
        main: lookup.get(role.main_token()),
        light: lookup.get(&role.light_token()),
        dark: lookup.get(&role.dark_token()),
        contrast_text: lookup.get(&role.contrast_token()),
    }
}

fn palette(lookup: &mut TokenLookup<'_>) -> Palette {
    Palette {
        primary: palette_color(lookup, PaletteRole::Primary),
        secondary: palette_color(lookup, PaletteRole::Secondary),
        tertiary: palette_color(lookup, PaletteRole::Tertiary),
        error: palette_color(lookup, PaletteRole::Error),
        warning: palette_color(lookup, PaletteRole::Warning),
        info: palette_color(lookup, PaletteRole::Info),
        success: palette_color(lookup, PaletteRole::Success),
        neutral: palette_color(lookup, PaletteRole::Neutral),
        background: BackgroundColors {
            default: lookup.get(catalog::BACKGROUND_DEFAULT),
            paper: lookup.get(catalog::BACKGROUND_PAPER),
        },
        text: TextColors {
            primary: lookup.get(catalog::TEXT_PRIMARY),
            secondary: lookup.get(catalog::TEXT_SECONDARY),
            disabled: lookup.get(catalog::TEXT_DISABLED),
        },
        divider: lookup.get(catalog::DIVIDER),
        action: ActionColors {
            hover: lookup.get(catalog::ACTION_HOVER),
            selected: lookup.get(catalog::ACTION_SELECTED),
            disabled: lookup.get(catalog::ACTION_DISABLED),
            disabled_background: lookup.get(catalog::ACTION_DISABLED_BACKGROUND),
            focus: lookup.get(catalog::FOCUS_RING),
        },
    }
}

fn type_style(lookup: &mut TokenLookup<'_>, level: TypeLevel) -> TypeStyle {
    TypeStyle {
        font_family: lookup.get(level.family_token()),
        font_size: lookup.get(&level.size_token()),
        font_weight: lookup.get(level.weight().token()),
        line_height: lookup.get(&level.line_height_token()),
    }
}

fn typography(lookup: &mut TokenLookup<'_>) -> Typography {
    Typography {
        font_family: lookup.get(catalog::FONT_FAMILY_BODY),
        h1: type_style(lookup, TypeLevel::H1),
        h2: type_style(lookup, TypeLevel::H2),
        h3: type_style(lookup, TypeLevel::H3),
        h4: type_style(lookup, TypeLevel::H4),
        h5: type_style(lookup, TypeLevel::H5),
        h6: type_style(lookup, TypeLevel::H6),
        subtitle1: type_style(lookup, TypeLevel::Subtitle1),
        subtitle2: type_style(lookup, TypeLevel::Subtitle2),
        body1: type_style(lookup, TypeLevel::Body1),
        body2: type_style(lookup, TypeLevel::Body2),
        button: type_style(lookup, TypeLevel::Button),
        caption: type_style(lookup, TypeLevel::Caption),
        overline: type_style(lookup, TypeLevel::Overline),
    }
}

fn spacing(lookup: &mut TokenLookup<'_>) -> SpacingScale {
    SpacingScale {
        steps: SPACING_SCALE
            .iter()
            .enumerate()
            .map(|(factor, units)| SpacingStep {
                factor: factor as u8,
                units: *units,
                token: lookup.get(&catalog::spacing_token(*units)),
            })
            .collect(),
        fallback_unit: SPACING_FALLBACK_UNIT,
    }
}

fn shadows(lookup: &mut TokenLookup<'_>, count: usize) -> Vec<Shadow> {
    let mut shadows: Vec<Shadow> = SHADOW_TOKENS
        .iter()
        .map(|key| Shadow::Token(lookup.get(key)))
        .collect();

    let color = lookup.get(catalog::SHADOW_COLOR);

    for step in 1..=count.saturating_sub(SHADOW_TOKENS.len()) {
        shadows.push(Shadow::Synthesized(format!(
            "0px {}px {}px {}px {color}",
            4 + 2 * step,
            8 + 4 * step,
            step
        )));
    }

    shadows
}
