use anyhow::{bail, Context, Result};

pub const DEFAULT_HISTORY_KEY: &str = "placement-analysis-history";
pub const DEFAULT_CHECKLIST_KEY: &str = "prp-test-checklist";
pub const DEFAULT_PROOF_KEY: &str = "prp_final_submission";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Redis { url: String },
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Redis { .. } => "redis",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if `STORAGE_BACKEND=redis` and `REDIS_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub port: u16,
    pub rust_log: String,
    pub history_key: String,
    pub checklist_key: String,
    pub proof_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_backend = match env_or("STORAGE_BACKEND", "memory").to_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "redis" => StorageBackend::Redis {
                url: require_env("REDIS_URL")?,
            },
            other => bail!("STORAGE_BACKEND must be 'memory' or 'redis', got '{other}'"),
        };

        Ok(Config {
            storage_backend,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            history_key: env_or("HISTORY_KEY", DEFAULT_HISTORY_KEY),
            checklist_key: env_or("CHECKLIST_KEY", DEFAULT_CHECKLIST_KEY),
            proof_key: env_or("PROOF_KEY", DEFAULT_PROOF_KEY),
        })
    }

    /// In-memory config with the default keys.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            storage_backend: StorageBackend::Memory,
            port: 0,
            rust_log: "debug".to_string(),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            checklist_key: DEFAULT_CHECKLIST_KEY.to_string(),
            proof_key: DEFAULT_PROOF_KEY.to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
