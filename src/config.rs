use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const SEARCH_API_BASE_URL: &str = "https://serpapi.com/search.json";
const UPSTREAM_TIMEOUT_SECS: u64 = 15;
const SIMULATED_LATENCY_MS: u64 = 500;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Settings for the search proxy server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub search_api_base_url: String,
    pub upstream_timeout: std::time::Duration,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            search_api_base_url: SEARCH_API_BASE_URL.to_string(),
            upstream_timeout: std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Read from environment variables, falling back to defaults for anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            search_api_base_url: env::var("SEARCH_API_BASE_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.search_api_base_url),
            upstream_timeout: std::time::Duration::from_secs(env_or(
                "UPSTREAM_TIMEOUT_SECS",
                UPSTREAM_TIMEOUT_SECS,
            )),
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
        }
    }
}

/// Freshness windows and simulated latency for the travel data helpers.
#[derive(Debug, Clone)]
pub struct DataServiceConfig {
    pub flights_ttl: chrono::Duration,
    pub hotels_ttl: chrono::Duration,
    pub itinerary_ttl: chrono::Duration,
    pub attractions_ttl: chrono::Duration,
    pub latency: std::time::Duration,
}

impl Default for DataServiceConfig {
    fn default() -> Self {
        Self {
            flights_ttl: chrono::Duration::minutes(15),
            hotels_ttl: chrono::Duration::minutes(30),
            itinerary_ttl: chrono::Duration::minutes(60),
            attractions_ttl: chrono::Duration::hours(24),
            latency: std::time::Duration::from_millis(SIMULATED_LATENCY_MS),
        }
    }
}

impl DataServiceConfig {
    pub fn from_env() -> Self {
        Self {
            latency: std::time::Duration::from_millis(env_or(
                "SIMULATED_LATENCY_MS",
                SIMULATED_LATENCY_MS,
            )),
            ..Self::default()
        }
    }

    /// No artificial delay; used by tests and batch tooling.
    pub fn without_latency() -> Self {
        Self {
            latency: std::time::Duration::ZERO,
            ..Self::default()
        }
    }
}
