use config::{Config, Environment, File};
use nwatch_domain::config::ClientConfig;
use nwatch_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Custom error type for config loading.
#[nwatch_derive::nwatch_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// The environment layer: `NWATCH__API__BASE_URL` maps to `api.base_url`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn build<T>(path: &Path, required: bool, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// 1. **Base File**: Loads settings from a file (e.g., `client.toml`). If no path is provided,
///    it defaults to `"client"` in the working directory; the format is picked from the extension.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `NWATCH__`.
///    Nested structures are accessed using double underscores (e.g., `NWATCH__API__BASE_URL` maps to
///    `api.base_url`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use nwatch_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    build(&effective_path, true, environment())
}

/// Loads the [`ClientConfig`] used by the front-ends.
///
/// An explicit `path` must exist. Without one, the default `client` file is optional and
/// built-in defaults apply, still overlaid with `NWATCH__` environment variables.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing or any layer is malformed.
pub fn load_client_config(path: Option<impl AsRef<Path>>) -> Result<ClientConfig, ConfigError> {
    match path {
        Some(path) => load_config(Some(path)),
        None => {
            debug!("No config path given; '{DEFAULT_CONFIG_FILE}' is optional");
            build(Path::new(DEFAULT_CONFIG_FILE), false, environment())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(vars))
    }

    #[test]
    fn test_missing_optional_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let cfg: ClientConfig = build(&dir.path().join("absent"), false, env_from(&[]))?;
        assert_eq!(cfg.api.base_url, "http://localhost:8081");
        assert_eq!(cfg.navigation.redirect_delay_ms, 2000);
        Ok(())
    }

    #[test]
    fn test_missing_required_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let res: Result<ClientConfig, _> = build(&dir.path().join("absent"), true, env_from(&[]));
        assert!(matches!(res, Err(ConfigError::Config { context: Some(_), .. })));
    }

    #[test]
    fn test_environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("client.toml");
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "[api]\nbase_url = \"http://file:8081\"\n\n[navigation]\nredirect_delay_ms = 750")?;

        let cfg: ClientConfig = build(
            &path,
            true,
            env_from(&[("NWATCH__API__BASE_URL", "http://env:9090"), ("NWATCH__API__TIMEOUT_MS", "1200")]),
        )?;

        assert_eq!(cfg.api.base_url, "http://env:9090");
        assert_eq!(cfg.api.timeout_ms, Some(1200));
        assert_eq!(cfg.navigation.redirect_delay_ms, 750);
        Ok(())
    }
}
