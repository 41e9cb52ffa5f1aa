use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub feed: FeedConfig,
    pub chat: ChatConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Timing and randomness of the simulated incident feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Connect the feed as soon as the server starts
    pub auto_connect: bool,
    /// Delay before the first generated incident
    pub warmup: Duration,
    /// Lower bound of the delay between two generated incidents
    pub min_interval: Duration,
    /// Upper bound of the delay between two generated incidents
    pub max_interval: Duration,
    /// Fixed RNG seed for reproducible feeds (entropy when absent)
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Delay before the dispatcher acknowledges an operator message
    pub reply_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            feed: FeedConfig::from_env()?,
            chat: ChatConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FeedConfig {
    const DEFAULT_WARMUP_SECS: u64 = 3;
    const DEFAULT_MIN_INTERVAL_SECS: u64 = 10;
    const DEFAULT_MAX_INTERVAL_SECS: u64 = 20;

    pub fn from_env() -> Result<Self, String> {
        let auto_connect = env::var("FEED_AUTO_CONNECT")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "FEED_AUTO_CONNECT must be true or false".to_string())?;

        let warmup_secs = env::var("FEED_WARMUP_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_WARMUP_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FEED_WARMUP_SECS must be a valid number".to_string())?;

        let min_interval_secs = env::var("FEED_MIN_INTERVAL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FEED_MIN_INTERVAL_SECS must be a valid number".to_string())?;

        let max_interval_secs = env::var("FEED_MAX_INTERVAL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FEED_MAX_INTERVAL_SECS must be a valid number".to_string())?;

        if max_interval_secs < min_interval_secs {
            return Err(format!(
                "FEED_MAX_INTERVAL_SECS ({}) must not be lower than FEED_MIN_INTERVAL_SECS ({})",
                max_interval_secs, min_interval_secs
            ));
        }

        let rng_seed = match env::var("FEED_RNG_SEED").ok().filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| "FEED_RNG_SEED must be a valid number".to_string())?,
            ),
            None => None,
        };

        Ok(Self {
            auto_connect,
            warmup: Duration::from_secs(warmup_secs),
            min_interval: Duration::from_secs(min_interval_secs),
            max_interval: Duration::from_secs(max_interval_secs),
            rng_seed,
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            auto_connect: true,
            warmup: Duration::from_secs(Self::DEFAULT_WARMUP_SECS),
            min_interval: Duration::from_secs(Self::DEFAULT_MIN_INTERVAL_SECS),
            max_interval: Duration::from_secs(Self::DEFAULT_MAX_INTERVAL_SECS),
            rng_seed: None,
        }
    }
}

impl ChatConfig {
    const DEFAULT_REPLY_DELAY_MS: u64 = 2000;

    pub fn from_env() -> Result<Self, String> {
        let reply_delay_ms = env::var("CHAT_REPLY_DELAY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_REPLY_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "CHAT_REPLY_DELAY_MS must be a valid number".to_string())?;

        Ok(Self {
            reply_delay: Duration::from_millis(reply_delay_ms),
        })
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(Self::DEFAULT_REPLY_DELAY_MS),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Dispatch Desk API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Incident dispatch dashboard API".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("dispatcher".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("dispatcher:secret".to_string()));
    }

    #[test]
    fn test_feed_defaults_match_reference_timing() {
        let feed = FeedConfig::default();
        assert_eq!(feed.warmup, Duration::from_secs(3));
        assert_eq!(feed.min_interval, Duration::from_secs(10));
        assert_eq!(feed.max_interval, Duration::from_secs(20));
        assert!(feed.min_interval <= feed.max_interval);
    }
}
