use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default location of the YAML settings file, overridable with `APP_CONFIG`.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

/// Configuration options of the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// SQLite database location. SQLAlchemy-style `sqlite:///` URLs are accepted.
    pub database_url: String,
    /// Glob passed to Tera when loading templates.
    pub templates_dir: String,
    /// JSON file mapping category labels to keywords.
    pub taxonomy_path: String,
    pub models: ModelConfig,
}

/// Settings of the hosted inference endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct ModelConfig {
    /// Bearer token for the inference provider. Empty means "not configured".
    pub api_token: String,
    /// Text-generation model used for extraction, translation and copy.
    pub text_model: String,
    /// Image-captioning model.
    pub caption_model: String,
    /// Base URL of the inference API.
    pub inference_url: String,
    /// Upper bound for a single captioning request.
    pub caption_timeout_secs: u64,
}

impl ServerConfig {
    /// Load settings from the file named by `APP_CONFIG` (or the default path)
    /// and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load settings from `path` layered under `APP_*` environment variables.
    ///
    /// The environment names understood by earlier deployments
    /// (`HUGGINGFACEHUB_API_TOKEN`, `LLM_REPO_ID`, `IMAGE_CAPTION_REPO_ID`,
    /// `DB_URL`) take precedence over everything else.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8000)?
            .set_default("database_url", "catalog.db")?
            .set_default("templates_dir", "templates/**/*")?
            .set_default("taxonomy_path", "data/category_map.json")?
            .set_default("models.api_token", "")?
            .set_default("models.text_model", "mistralai/Mistral-7B-Instruct-v0.3")?
            .set_default(
                "models.caption_model",
                "Salesforce/blip-image-captioning-large",
            )?
            .set_default("models.inference_url", "https://api-inference.huggingface.co")?
            .set_default("models.caption_timeout_secs", 60)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("models.api_token", env::var("HUGGINGFACEHUB_API_TOKEN").ok())?
            .set_override_option("models.text_model", env::var("LLM_REPO_ID").ok())?
            .set_override_option(
                "models.caption_model",
                env::var("IMAGE_CAPTION_REPO_ID").ok(),
            )?
            .set_override_option("database_url", env::var("DB_URL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Filesystem path of the SQLite database.
    pub fn database_path(&self) -> &str {
        let url = self.database_url.as_str();
        url.strip_prefix("sqlite:///")
            .or_else(|| url.strip_prefix("sqlite://"))
            .unwrap_or(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(database_url: &str) -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".into(),
            port: 8000,
            database_url: database_url.into(),
            templates_dir: "templates/**/*".into(),
            taxonomy_path: "data/category_map.json".into(),
            models: ModelConfig {
                api_token: String::new(),
                text_model: "model".into(),
                caption_model: "captioner".into(),
                inference_url: "http://localhost".into(),
                caption_timeout_secs: 60,
            },
        }
    }

    #[test]
    fn strips_sqlalchemy_prefix() {
        assert_eq!(
            sample_config("sqlite:///./catalog.db").database_path(),
            "./catalog.db"
        );
        assert_eq!(
            sample_config("sqlite:////var/lib/catalog.db").database_path(),
            "/var/lib/catalog.db"
        );
        assert_eq!(sample_config("catalog.db").database_path(), "catalog.db");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load_from("does/not/exist.yaml").unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.taxonomy_path, "data/category_map.json");
        assert_eq!(config.models.caption_timeout_secs, 60);
    }
}
