use anyhow::{Context, Result};

pub struct AppConfig {
    pub backend: BackendConfig,
    pub redis: RedisConfig,
    pub draft: DraftConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let backend = BackendConfig {
            base_url: std::env::var("BACKEND_BASE_URL")
                .context("BACKEND_BASE_URL must be set")?,
            timeout_secs: env_or("BACKEND_TIMEOUT_SECS", 10)?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST").context("REDIS_HOST must be set")?,
            port: std::env::var("REDIS_PORT")
                .context("REDIS_PORT must be set")?
                .parse()
                .context("REDIS_PORT must be a port number")?,
        };
        let draft = DraftConfig {
            // unsubmitted drafts survive two weeks unless cleared sooner
            ttl: env_or("DRAFT_TTL_SECS", 60 * 60 * 24 * 14)?,
        };
        Ok(Self {
            backend,
            redis,
            draft,
        })
    }
}

/// Location of the authoritative ToolNext backend.
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct DraftConfig {
    pub ttl: u64,
}

fn env_or(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => v
            .parse()
            .with_context(|| format!("{key} must be an integer")),
    }
}
