use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub assistant: AssistantConfig,
    pub content: ContentConfig,
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
}

/// Chat assistant settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Simulated latency before a chat reply is appended.
    pub response_delay_ms: u64,
    /// Maximum number of live chat sessions kept in memory (LRU eviction).
    pub max_sessions: usize,
}

/// Content generator settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Simulated latency before generated content is returned.
    pub generation_delay_ms: u64,
    /// JSON file holding the generated content library.
    pub library_path: String,
    /// Pick project description templates at random. When false the first
    /// template is always used.
    pub randomize_templates: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    /// Optional JSON file overriding the built-in portfolio record.
    pub path: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 0,
            max_sessions: 1024,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: 2000,
            library_path: "folio-generated-content.json".to_string(),
            randomize_templates: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let content_defaults = ContentConfig::default();
        let assistant_defaults = AssistantConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("FOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("FOLIO_PORT", 3000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:folio.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
            },
            assistant: AssistantConfig {
                response_delay_ms: parse_env_or(
                    "ASSISTANT_RESPONSE_DELAY_MS",
                    assistant_defaults.response_delay_ms,
                ),
                max_sessions: parse_env_or(
                    "ASSISTANT_MAX_SESSIONS",
                    assistant_defaults.max_sessions,
                ),
            },
            content: ContentConfig {
                generation_delay_ms: parse_env_or(
                    "CONTENT_GENERATION_DELAY_MS",
                    content_defaults.generation_delay_ms,
                ),
                library_path: env::var("CONTENT_LIBRARY_PATH")
                    .unwrap_or(content_defaults.library_path),
                randomize_templates: parse_env_or(
                    "CONTENT_RANDOMIZE_TEMPLATES",
                    content_defaults.randomize_templates,
                ),
            },
            portfolio: PortfolioConfig {
                path: env::var("PORTFOLIO_PATH").ok(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
