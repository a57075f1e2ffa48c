use serde::{Deserialize, Serialize};

use crate::{ThemeError, deserializers::de_count};

/// Shortest shadow list the bridge emits; every entry up to here is a named token.
pub const NAMED_SHADOW_COUNT: usize = 8;
/// Length of the shadow list the target framework indexes into.
pub const DEFAULT_SHADOW_COUNT: usize = 25;
const MAX_SHADOW_COUNT: usize = 256;

/// What the bridge does when the registry lacks a token it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTokenPolicy {
    /// Refuse to build, naming the first missing token.
    #[default]
    Fail,
    /// Emit `var(--name)` anyway and let the host render it as an absent value.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BridgeConfig {
    pub missing_token: MissingTokenPolicy,
    #[serde(deserialize_with = "de_count")]
    pub shadow_count: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            missing_token: MissingTokenPolicy::Fail,
            shadow_count: DEFAULT_SHADOW_COUNT,
        }
    }
}

impl BridgeConfig {
    pub fn from_json_str(str: impl AsRef<str>) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(str.as_ref())?;
        config.validated()
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(str: impl AsRef<str>) -> Result<Self, ThemeError> {
        let config: Self = toml::from_str(str.as_ref())?;
        config.validated()
    }

    pub fn missing_token(mut self, policy: MissingTokenPolicy) -> Self {
        self.missing_token = policy;
        self
    }

    pub fn shadow_count(mut self, count: usize) -> Self {
        self.shadow_count = count;
        self
    }

    /// Number of shadow entries a build produces.
    pub fn effective_shadow_count(&self) -> usize {
        self.shadow_count.max(NAMED_SHADOW_COUNT)
    }

    pub fn validated(self) -> Result<Self, ThemeError> {
        if self.shadow_count > MAX_SHADOW_COUNT {
            return Err(ThemeError::InvalidConfig(format!(
                "shadow-count must be at most {MAX_SHADOW_COUNT}, got {}",
                self.shadow_count
            )));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.missing_token, MissingTokenPolicy::Fail);
        assert_eq!(config.effective_shadow_count(), DEFAULT_SHADOW_COUNT);
    }

    #[test]
    fn test_short_shadow_lists_are_padded_to_named_entries() {
        let config = BridgeConfig::default().shadow_count(3);
        assert_eq!(config.effective_shadow_count(), NAMED_SHADOW_COUNT);
    }

    #[test]
    fn test_from_json_with_partial_fields() {
        let config = BridgeConfig::from_json_str(r#"{ "missing-token": "unresolved" }"#).unwrap();
        assert_eq!(config.missing_token, MissingTokenPolicy::Unresolved);
        assert_eq!(config.shadow_count, DEFAULT_SHADOW_COUNT);
    }

    #[test]
    fn test_shadow_count_accepts_strings() {
        let config = BridgeConfig::from_json_str(r#"{ "shadow-count": "12" }"#).unwrap();
        assert_eq!(config.shadow_count, 12);
    }

    #[test]
    fn test_rejects_huge_shadow_lists() {
        let err = BridgeConfig::from_json_str(r#"{ "shadow-count": 4096 }"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidConfig(_)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml() {
        let config = BridgeConfig::from_toml_str(
            r#"
            missing-token = "fail"
            shadow-count = 10
            "#,
        )
        .unwrap();

        assert_eq!(config, BridgeConfig::default().shadow_count(10));
    }
}
