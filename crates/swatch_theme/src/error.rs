use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("missing design token `{key}` ({total} missing in total)")]
    MissingToken { key: String, total: usize },
    #[error("could not parse token source: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "toml")]
    #[error("could not parse token source: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid bridge config: {0}")]
    InvalidConfig(String),
}
