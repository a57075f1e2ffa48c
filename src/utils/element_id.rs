use std::fmt;

use serde::Serialize;

/// Stable identifier of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of a part owned by this element, e.g. `save-toggle`.
    pub fn with_suffix(&self, suffix: impl AsRef<str>) -> ElementId {
        ElementId(format!("{}-{}", self.0, suffix.as_ref()))
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&ElementId> for ElementId {
    fn from(value: &ElementId) -> Self {
        value.clone()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_nest() {
        let id = ElementId::from("export");
        assert_eq!(id.with_suffix("menu").with_suffix("csv").as_str(), "export-menu-csv");
        assert_eq!(id.as_str(), "export", "Suffixing should not change the parent id");
    }
}
