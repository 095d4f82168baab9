//! Load configuration from XDG `config.toml` and project `.env`, then apply it to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! Everything downstream (`humidor::RecommenderConfig::from_env`, the server address) reads
//! plain environment variables, so this is the only place that knows about files.

mod dotenv;
mod xdg_toml;

#[cfg(feature = "tracing-init")]
pub mod tracing_init;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

pub use xdg_toml::config_path;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(String),
}

/// Loads `.env` and `$XDG_CONFIG_HOME/<app_name>/config.toml`, then sets environment
/// variables only for keys that are **not** already set.
///
/// * `app_name`: e.g. `"humidor"`, used for the XDG path.
/// * `override_dir`: look for `.env` here instead of the current directory.
///
/// Returns the keys that were set.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir)?;
    Ok(apply(&dotenv_map, &xdg_map))
}

fn apply(dotenv_map: &HashMap<String, String>, xdg_map: &HashMap<String, String>) -> Vec<String> {
    let keys: HashSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    let mut applied = Vec::new();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(value) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, value);
            applied.push(key.clone());
        }
    }
    applied.sort();
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    /// Tests below mutate XDG_CONFIG_HOME; run them one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_xdg<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let prev = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", dir);
        let out = f();
        match prev {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        out
    }

    fn write_config(root: &Path, app: &str, content: &str) {
        let app_dir = root.join(app);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), content).unwrap();
    }

    #[test]
    fn existing_env_wins() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(dotenv_dir.path().join(".env"), "HUMIDOR_TEST_EXISTING=from_dotenv\n").unwrap();
        env::set_var("HUMIDOR_TEST_EXISTING", "from_env");

        let xdg_dir = tempfile::tempdir().unwrap();
        let applied = with_xdg(xdg_dir.path(), || {
            load_and_apply("humidor", Some(dotenv_dir.path())).unwrap()
        });

        assert!(applied.is_empty());
        assert_eq!(env::var("HUMIDOR_TEST_EXISTING").as_deref(), Ok("from_env"));
        env::remove_var("HUMIDOR_TEST_EXISTING");
    }

    #[test]
    fn dotenv_overrides_xdg() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        write_config(xdg_dir.path(), "humidor", "[openai]\nmodel = \"from_xdg\"\n[env]\nHUMIDOR_TEST_XDG_ONLY = \"xdg\"\n");
        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(dotenv_dir.path().join(".env"), "HUMIDOR_MODEL=from_dotenv\n").unwrap();
        let prev_model = env::var("HUMIDOR_MODEL").ok();
        env::remove_var("HUMIDOR_MODEL");
        env::remove_var("HUMIDOR_TEST_XDG_ONLY");

        let applied = with_xdg(xdg_dir.path(), || {
            load_and_apply("humidor", Some(dotenv_dir.path())).unwrap()
        });
        let model = env::var("HUMIDOR_MODEL").unwrap();
        let xdg_only = env::var("HUMIDOR_TEST_XDG_ONLY").unwrap();
        env::remove_var("HUMIDOR_TEST_XDG_ONLY");
        match prev_model {
            Some(v) => env::set_var("HUMIDOR_MODEL", v),
            None => env::remove_var("HUMIDOR_MODEL"),
        }

        assert_eq!(model, "from_dotenv");
        assert_eq!(xdg_only, "xdg");
        assert_eq!(applied, vec!["HUMIDOR_MODEL", "HUMIDOR_TEST_XDG_ONLY"]);
    }

    #[test]
    fn no_files_is_ok() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        let empty_dir = tempfile::tempdir().unwrap();
        let applied = with_xdg(xdg_dir.path(), || {
            load_and_apply("humidor", Some(empty_dir.path())).unwrap()
        });
        assert!(applied.is_empty());
    }

    #[test]
    fn invalid_xdg_toml_fails_with_xdg_parse_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        write_config(xdg_dir.path(), "humidor", "invalid [[[\n");
        let empty_dir = tempfile::tempdir().unwrap();

        let result = with_xdg(xdg_dir.path(), || load_and_apply("humidor", Some(empty_dir.path())));

        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }

    #[test]
    fn config_path_uses_xdg_home() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        let path = with_xdg(xdg_dir.path(), || config_path("humidor").unwrap());
        assert_eq!(path, xdg_dir.path().join("humidor").join("config.toml"));
    }
}
