use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

// Form-contract constants — mirrored by the web client.
pub const DEFAULT_PORT: u16 = 8317;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10 MiB per photo strip
pub const MAX_CAPTION_CHARS: usize = 500;

/// Content types accepted for a photo strip upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// Top-level config (restrip.toml + RESTRIP_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestripConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Hard cap on the raw upload body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
    /// Accepted `Content-Type` values.
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
            allowed_types: default_allowed_types(),
        }
    }
}

impl Default for RestripConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

impl RestripConfig {
    /// Load config from a TOML file with RESTRIP_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.restrip/restrip.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: RestripConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("RESTRIP_").split("_"))
            .extract()
            .map_err(|e| crate::error::RestripError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.restrip/restrip.toml", home)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_max_upload_bytes() -> usize {
    MAX_UPLOAD_BYTES
}

fn default_allowed_types() -> Vec<String> {
    ALLOWED_IMAGE_TYPES.iter().map(|s| s.to_string()).collect()
}
