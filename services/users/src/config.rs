//! Users service configuration

use anyhow::Result;

/// Service configuration
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Host to bind the HTTP listener to
    pub host: String,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// TTL for cached lookup responses, in seconds
    pub cache_ttl_seconds: u64,
    /// Prefix for all cache keys written by this service
    pub cache_prefix: String,
}

impl UsersConfig {
    /// Create a new UsersConfig from environment variables
    ///
    /// # Environment Variables
    /// - `USERS_HOST`: listener host (default: "0.0.0.0")
    /// - `USERS_PORT`: listener port (default: 3000)
    /// - `USER_CACHE_TTL_SECONDS`: cached response TTL (default: 50)
    /// - `CACHE_PREFIX`: cache key prefix (default: "realtime-map-cache")
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("USERS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("USERS_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let cache_ttl_seconds = std::env::var("USER_CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "50".to_string())
            .parse()
            .unwrap_or(50);

        let cache_prefix =
            std::env::var("CACHE_PREFIX").unwrap_or_else(|_| "realtime-map-cache".to_string());

        Ok(UsersConfig {
            host,
            port,
            cache_ttl_seconds,
            cache_prefix,
        })
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
