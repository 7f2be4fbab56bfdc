use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the catalog artifact (books + feature matrix)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the precomputed popularity list
    #[serde(default = "default_popular_path")]
    pub popular_path: String,

    /// Number of recommendations returned for a single seed title
    #[serde(default = "default_similar_top_k")]
    pub similar_top_k: usize,

    /// Number of candidates considered for multi-title recommendations
    #[serde(default = "default_personal_top_k")]
    pub personal_top_k: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

fn default_popular_path() -> String {
    "data/popular.json".to_string()
}

pub(crate) fn default_similar_top_k() -> usize {
    5
}

pub(crate) fn default_personal_top_k() -> usize {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
