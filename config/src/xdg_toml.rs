//! Load `$XDG_CONFIG_HOME/<app>/config.toml` and flatten it into environment keys.
//!
//! ```toml
//! [server]
//! addr = "0.0.0.0:8787"
//!
//! [openai]
//! api_key = "sk-..."
//! base_url = "https://api.openai.com"
//! model = "gpt-4o-mini"
//!
//! [recommend]
//! temperature = 0.9
//! max_tokens = 700
//! fallback = true
//!
//! [env]
//! RUST_LOG = "info"
//! ```
//!
//! Typed sections map to `HUMIDOR_ADDR`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`,
//! `HUMIDOR_MODEL`, `HUMIDOR_TEMPERATURE`, `HUMIDOR_MAX_TOKENS` and `HUMIDOR_FALLBACK`.
//! The free-form `[env]` table is taken as is and wins over the typed sections.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::LoadError;

#[derive(Deserialize, Default)]
#[serde(default)]
struct ServerSection {
    addr: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct OpenAiSection {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RecommendSection {
    temperature: Option<f64>,
    max_tokens: Option<u32>,
    fallback: Option<bool>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    server: ServerSection,
    openai: OpenAiSection,
    recommend: RecommendSection,
    env: HashMap<String, String>,
}

impl ConfigFile {
    fn into_env_map(self) -> HashMap<String, String> {
        let typed = [
            ("HUMIDOR_ADDR", self.server.addr),
            ("OPENAI_API_KEY", self.openai.api_key),
            ("OPENAI_BASE_URL", self.openai.base_url),
            ("HUMIDOR_MODEL", self.openai.model),
            ("HUMIDOR_TEMPERATURE", self.recommend.temperature.map(|t| t.to_string())),
            ("HUMIDOR_MAX_TOKENS", self.recommend.max_tokens.map(|n| n.to_string())),
            ("HUMIDOR_FALLBACK", self.recommend.fallback.map(|b| b.to_string())),
        ];
        let mut map: HashMap<String, String> = typed
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
            .collect();
        map.extend(self.env);
        map
    }
}

/// `$XDG_CONFIG_HOME`, else the platform config dir.
fn config_home() -> Result<PathBuf, LoadError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir().ok_or_else(|| LoadError::XdgPath("no config directory".to_string()))
}

/// Path of the app's config file (may not exist).
pub fn config_path(app_name: &str) -> Result<PathBuf, LoadError> {
    Ok(config_home()?.join(app_name).join("config.toml"))
}

/// Environment keys from the config file. Missing file returns an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let path = config_path(app_name)?;
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.into_env_map())
}
