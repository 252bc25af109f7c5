use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Token/base-url resolution for the CLI. The `SHORTCUT_API_TOKEN`
/// environment variable wins; otherwise `~/.useshortcut/config.toml`:
///
/// ```toml
/// token = "xxxx-xxxx"
/// base_url = "https://api.app.shortcut.com/api/v3"  # optional
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".useshortcut")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}

/// Resolve the API token: explicit flag, then `SHORTCUT_API_TOKEN`,
/// then the config file.
pub fn resolve_token(flag: Option<String>) -> Result<String> {
    let env = std::env::var("SHORTCUT_API_TOKEN").ok();
    resolve_token_from(flag, env, &config_path())
}

fn resolve_token_from(
    flag: Option<String>,
    env: Option<String>,
    config: &Path,
) -> Result<String> {
    if let Some(token) = flag {
        return Ok(token);
    }
    if let Some(token) = env.filter(|t| !t.is_empty()) {
        return Ok(token);
    }
    if let Some(token) = load_config_from(config)?.token {
        return Ok(token);
    }
    bail!(
        "No API token. Pass --token, set SHORTCUT_API_TOKEN, or add `token` to {}",
        config.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.token, None);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token = \"abc\"\nbase_url = \"http://localhost:8080\"\n")
            .unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn token_precedence_is_flag_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token = \"from-file\"\n").unwrap();

        let token = resolve_token_from(
            Some("from-flag".to_string()),
            Some("from-env".to_string()),
            &path,
        )
        .unwrap();
        assert_eq!(token, "from-flag");

        let token = resolve_token_from(None, Some("from-env".to_string()), &path).unwrap();
        assert_eq!(token, "from-env");

        let token = resolve_token_from(None, None, &path).unwrap();
        assert_eq!(token, "from-file");
    }

    #[test]
    fn empty_env_token_falls_through_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token = \"from-file\"\n").unwrap();

        let token = resolve_token_from(None, Some(String::new()), &path).unwrap();
        assert_eq!(token, "from-file");
    }

    #[test]
    fn no_token_anywhere_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_token_from(None, None, &dir.path().join("config.toml")).unwrap_err();
        assert!(err.to_string().contains("No API token"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token = [").unwrap();
        assert!(load_config_from(&path).is_err());
    }
}
