use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    #[serde(default = "default_cors_origin")]
    pub cors_allow_origin: String,
}

fn default_cors_origin() -> String {
    "*".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    /// Base the page is served from; relative content URLs are joined onto it.
    pub base_url: String,
    /// Where the page loads its content document from.
    #[serde(default = "default_content_url")]
    pub content_url: String,
    /// File served at `/data.json`.
    #[serde(default = "default_content_file")]
    pub content_file: String,
    /// HTML template override. The built-in template is used when unset.
    #[serde(default)]
    pub template_path: Option<String>,
}

fn default_content_url() -> String {
    "data.json".to_string()
}

fn default_content_file() -> String {
    "content/data.json".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(Environment::default().separator("__"))
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("site.base_url", "http://127.0.0.1:8080/")?
            .build()?;

        config.try_deserialize()
    }
}
