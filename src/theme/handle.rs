use std::sync::Arc;

use swatch_theme::{BridgeConfig, ThemeBridge, ThemeError, ThemeObject, TokenMap};

/// A built theme together with the registry it was built from.
///
/// Both halves are shared and never mutated, so cloning a handle is cheap and
/// handles can be sent across threads. Re-theming swaps in a freshly built
/// theme; existing clones keep the theme they were created with.
#[derive(Debug, Clone)]
pub struct ThemeHandle {
    tokens: Arc<TokenMap>,
    config: BridgeConfig,
    theme: Arc<ThemeObject>,
}

impl ThemeHandle {
    pub fn new(tokens: Arc<TokenMap>) -> Result<Self, ThemeError> {
        Self::with_config(tokens, BridgeConfig::default())
    }

    pub fn with_config(tokens: Arc<TokenMap>, config: BridgeConfig) -> Result<Self, ThemeError> {
        let config = config.validated()?;
        let theme = Arc::new(build(&tokens, &config)?);

        Ok(Self {
            tokens,
            config,
            theme,
        })
    }

    /// Handle over the builtin registry, where every token is its own
    /// custom property.
    pub fn builtin() -> Result<Self, ThemeError> {
        Self::new(Arc::new(TokenMap::builtin().clone()))
    }

    pub fn theme(&self) -> &ThemeObject {
        &self.theme
    }

    pub fn shared_theme(&self) -> Arc<ThemeObject> {
        self.theme.clone()
    }

    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Rebuilds the theme from `tokens`. On failure the current theme is kept.
    pub fn retheme(&mut self, tokens: Arc<TokenMap>) -> Result<(), ThemeError> {
        let theme = build(&tokens, &self.config)?;

        if theme == *self.theme {
            tracing::debug!("retheme produced an identical theme");
        } else {
            tracing::debug!(tokens = tokens.len(), "retheme applied");
        }

        self.tokens = tokens;
        self.theme = Arc::new(theme);

        Ok(())
    }
}

fn build(tokens: &Arc<TokenMap>, config: &BridgeConfig) -> Result<ThemeObject, ThemeError> {
    ThemeBridge::new(tokens.clone()).config(config.clone()).build()
}

#[cfg(test)]
mod tests {
    use swatch_theme::{MissingTokenPolicy, TokenRef};

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_handle_is_thread_safe() {
        assert_send_sync::<ThemeHandle>();
    }

    #[test]
    fn test_builtin_handle() {
        let handle = ThemeHandle::builtin().unwrap();

        assert_eq!(
            handle.theme().palette.primary.main.as_str(),
            "var(--color-primary-blue)"
        );
        assert_eq!(handle.tokens().len(), ThemeBridge::required_keys().len());
    }

    #[test]
    fn test_retheme_replaces_theme() {
        let mut handle = ThemeHandle::builtin().unwrap();
        let before = handle.shared_theme();

        let tokens = TokenMap::builtin().clone().with_overrides([(
            "color-primary-blue",
            TokenRef::custom_property("brand-blue"),
        )]);
        handle.retheme(Arc::new(tokens)).unwrap();

        assert_eq!(
            handle.theme().palette.primary.main.as_str(),
            "var(--brand-blue)"
        );
        assert_eq!(
            before.palette.primary.main.as_str(),
            "var(--color-primary-blue)",
            "Previously shared themes should be left untouched"
        );
    }

    #[test]
    fn test_failed_retheme_keeps_current_theme() {
        let mut handle = ThemeHandle::builtin().unwrap();
        let before = handle.shared_theme();

        let tokens = TokenMap::builtin().clone().without("color-divider");
        let error = handle.retheme(Arc::new(tokens)).unwrap_err();

        assert!(matches!(error, ThemeError::MissingToken { ref key, .. } if key == "color-divider"));
        assert_eq!(*handle.theme(), *before);
    }

    #[test]
    fn test_retheme_with_same_registry_is_idempotent() {
        let mut handle = ThemeHandle::builtin().unwrap();
        let before = handle.shared_theme();

        handle
            .retheme(Arc::new(TokenMap::builtin().clone()))
            .unwrap();

        assert_eq!(*handle.theme(), *before);
    }

    #[test]
    fn test_config_is_kept_across_retheme() {
        let config = BridgeConfig::default()
            .missing_token(MissingTokenPolicy::Unresolved)
            .shadow_count(10);
        let mut handle =
            ThemeHandle::with_config(Arc::new(TokenMap::builtin().clone()), config).unwrap();

        handle
            .retheme(Arc::new(TokenMap::builtin().clone().without("color-divider")))
            .unwrap();

        assert_eq!(handle.theme().shadows.len(), 10);
        assert_eq!(handle.theme().palette.divider.as_str(), "var(--color-divider)");
    }
}
