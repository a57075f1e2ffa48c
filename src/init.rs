use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use cfg_if::cfg_if;

use crate::theme::{BridgeConfig, ThemeHandle, TokenMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Json,
    #[cfg(feature = "toml")]
    Toml,
}

cfg_if! {
    if #[cfg(feature = "toml")] {
        const SUPPORTED_SOURCES: &str = ".json or .toml";

        fn format_for(extension: &str) -> Option<SourceFormat> {
            match extension {
                "json" => Some(SourceFormat::Json),
                "toml" => Some(SourceFormat::Toml),
                _ => None,
            }
        }
    } else {
        const SUPPORTED_SOURCES: &str = ".json";

        fn format_for(extension: &str) -> Option<SourceFormat> {
            match extension {
                "json" => Some(SourceFormat::Json),
                _ => None,
            }
        }
    }
}

fn source_format(path: &Path) -> Result<SourceFormat> {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .and_then(|extension| format_for(&extension))
        .ok_or_else(|| {
            anyhow!(
                "unsupported theme source \"{}\", expected {SUPPORTED_SOURCES}",
                path.display()
            )
        })
}

fn read_source(path: &Path) -> Result<(SourceFormat, String)> {
    let format = source_format(path)?;
    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read \"{}\"", path.display()))?;

    Ok((format, source))
}

/// Reads a token registry from a `.json` (or, with the `toml` feature,
/// `.toml`) file mapping token names to `var(--name)` references.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<TokenMap> {
    let path = path.as_ref();
    let (format, source) = read_source(path)?;

    let tokens = match format {
        SourceFormat::Json => TokenMap::from_json_str(&source),
        #[cfg(feature = "toml")]
        SourceFormat::Toml => TokenMap::from_toml_str(&source),
    }
    .with_context(|| format!("invalid token registry \"{}\"", path.display()))?;

    tracing::debug!(path = %path.display(), tokens = tokens.len(), "loaded token registry");

    Ok(tokens)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<BridgeConfig> {
    let path = path.as_ref();
    let (format, source) = read_source(path)?;

    match format {
        SourceFormat::Json => BridgeConfig::from_json_str(&source),
        #[cfg(feature = "toml")]
        SourceFormat::Toml => BridgeConfig::from_toml_str(&source),
    }
    .with_context(|| format!("invalid bridge config \"{}\"", path.display()))
}

/// Loads a token registry and builds a theme from it with the default config.
pub fn load_theme(path: impl AsRef<Path>) -> Result<ThemeHandle> {
    load_theme_with_config(path, BridgeConfig::default())
}

pub fn load_theme_with_config(path: impl AsRef<Path>, config: BridgeConfig) -> Result<ThemeHandle> {
    let path = path.as_ref();
    let tokens = load_tokens(path)?;

    ThemeHandle::with_config(Arc::new(tokens), config)
        .with_context(|| format!("could not build a theme from \"{}\"", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::theme::{MissingTokenPolicy, ThemeBridge, ThemeError};

    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("swatch-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn builtin_json() -> String {
        serde_json::to_string(TokenMap::builtin()).unwrap()
    }

    #[test]
    fn test_load_theme_from_json() {
        let path = write_temp("tokens.json", &builtin_json());
        let handle = load_theme(&path).unwrap();

        assert_eq!(
            handle.theme().palette.error.main.as_str(),
            "var(--color-error-red)"
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_token_error_names_file_and_key() {
        let tokens = TokenMap::builtin().clone().without("color-primary-blue");
        let path = write_temp("partial.json", &serde_json::to_string(&tokens).unwrap());

        let error = load_theme(&path).unwrap_err();
        let message = format!("{error:#}");

        assert!(message.contains("partial.json"), "{message}");
        assert!(
            matches!(
                error.downcast_ref::<ThemeError>(),
                Some(ThemeError::MissingToken { key, .. }) if key == "color-primary-blue"
            ),
            "{message}"
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unsupported_extension() {
        let error = load_tokens("tokens.yaml").unwrap_err();
        assert!(error.to_string().contains("tokens.yaml"));
    }

    #[test]
    fn test_unreadable_file_has_context() {
        let error = load_tokens("/nonexistent/swatch/tokens.json").unwrap_err();
        assert!(error.to_string().contains("could not read"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_load_tokens_and_config_from_toml() {
        let tokens = ThemeBridge::required_keys()
            .iter()
            .map(|key| format!("\"{key}\" = \"var(--{key})\"\n"))
            .collect::<String>();
        let tokens_path = write_temp("tokens.toml", &tokens);
        let config_path = write_temp(
            "config.toml",
            "missing-token = \"unresolved\"\nshadow-count = 12\n",
        );

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.missing_token, MissingTokenPolicy::Unresolved);

        let handle = load_theme_with_config(&tokens_path, config).unwrap();
        assert_eq!(handle.theme().shadows.len(), 12);

        fs::remove_file(tokens_path).unwrap();
        fs::remove_file(config_path).unwrap();
    }
}
