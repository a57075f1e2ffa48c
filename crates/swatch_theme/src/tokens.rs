use std::{fmt, sync::LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ThemeBridge, ThemeError, deserializers::de_token_entries};

/// A reference to a design value that the host environment resolves,
/// always of the form `var(--name)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenRef(String);

impl TokenRef {
    /// Reference to the custom property `--{name}`.
    pub fn custom_property(name: impl AsRef<str>) -> Self {
        Self(format!("var(--{})", name.as_ref()))
    }

    /// Parses `var(--name)` or the shorthand `--name`.
    ///
    /// Literal values (colors, lengths) are rejected: the registry only
    /// ever holds indirections.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Some(inner) = value
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
            && inner.trim_start().starts_with("--")
            && inner.trim().len() > 2
        {
            return Some(Self(value.to_string()));
        }

        match value.strip_prefix("--") {
            Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => {
                Some(Self::custom_property(name))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TokenRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TokenRef> for String {
    fn from(value: TokenRef) -> Self {
        value.0
    }
}

static BUILTIN: LazyLock<TokenMap> =
    LazyLock::new(|| TokenMap::custom_properties(ThemeBridge::required_keys()));

/// Flat registry of semantic token names to their indirections.
///
/// Read-only once constructed. A changed token source means building a new
/// map (and a new theme from it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap {
    #[serde(deserialize_with = "de_token_entries")]
    entries: IndexMap<String, TokenRef>,
}

impl TokenMap {
    /// Registry mapping every token the theme bridge consumes to the custom
    /// property of the same name.
    pub fn builtin() -> &'static TokenMap {
        &BUILTIN
    }

    /// Maps each name to `var(--name)`.
    pub fn custom_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let token = TokenRef::custom_property(&name);
                (name, token)
            })
            .collect()
    }

    pub fn from_json_str(str: impl AsRef<str>) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(str: impl AsRef<str>) -> Result<Self, ThemeError> {
        Ok(toml::from_str(str.as_ref())?)
    }

    /// Returns a registry with `overrides` replacing or extending the entries.
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, TokenRef)>,
        S: Into<String>,
    {
        for (name, token) in overrides {
            self.entries.insert(name.into(), token);
        }
        self
    }

    /// Returns a registry without the entry for `name`.
    pub fn without(mut self, name: &str) -> Self {
        self.entries.shift_remove(name);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TokenRef> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenRef)> {
        self.entries.iter().map(|(name, token)| (name.as_str(), token))
    }
}

impl FromIterator<(String, TokenRef)> for TokenMap {
    fn from_iter<T: IntoIterator<Item = (String, TokenRef)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
