use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// A fieldless enum with a fixed set of wire strings.
pub trait WireEnum: Sized + Copy + Default + 'static {
    /// Prop name the enum is read from, for diagnostics.
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn wire_name(&self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.wire_name() == value)
    }
}

/// Reads a [`WireEnum`], falling back to its default for anything that is
/// not one of its wire strings.
pub fn de_lossy<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: WireEnum,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrOther {
        String(String),
        Other(IgnoredAny),
    }

    let parsed = match StringOrOther::deserialize(deserializer)? {
        StringOrOther::String(string) => T::from_wire(&string).ok_or(string),
        StringOrOther::Other(_) => Err(String::from("<non-string>")),
    };

    Ok(parsed.unwrap_or_else(|rejected| {
        let fallback = T::default();
        tracing::warn!(
            field = T::FIELD,
            value = %rejected,
            fallback = fallback.wire_name(),
            "unknown prop value, using default"
        );
        fallback
    }))
}
