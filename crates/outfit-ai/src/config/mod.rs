use crate::workflows::outfit::{ColorPolicyKind, DEFAULT_PER_CATEGORY};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            recommendation: RecommendationConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Catalog source and matcher defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationConfig {
    pub catalog_path: Option<PathBuf>,
    pub per_category: usize,
    pub sampling_seed: Option<u64>,
    pub color_policy: ColorPolicyKind,
    pub apply_corrections: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            per_category: DEFAULT_PER_CATEGORY,
            sampling_seed: None,
            color_policy: ColorPolicyKind::Permissive,
            apply_corrections: true,
        }
    }
}

impl RecommendationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path = non_empty_var("OUTFIT_CATALOG_PATH").map(PathBuf::from);

        let per_category = match non_empty_var("OUTFIT_PER_CATEGORY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidPerCategory)?,
            None => defaults.per_category,
        };

        let sampling_seed = non_empty_var("OUTFIT_SAMPLING_SEED")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .map_err(|_| ConfigError::InvalidSamplingSeed)?;

        let color_policy = match non_empty_var("OUTFIT_COLOR_POLICY") {
            Some(raw) => ColorPolicyKind::parse(&raw)
                .ok_or(ConfigError::InvalidColorPolicy { value: raw })?,
            None => defaults.color_policy,
        };

        let apply_corrections = match non_empty_var("OUTFIT_APPLY_CORRECTIONS") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "OUTFIT_APPLY_CORRECTIONS",
            })?,
            None => defaults.apply_corrections,
        };

        Ok(Self {
            catalog_path,
            per_category,
            sampling_seed,
            color_policy,
            apply_corrections,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPerCategory,
    InvalidSamplingSeed,
    InvalidColorPolicy { value: String },
    InvalidFlag { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPerCategory => {
                write!(f, "OUTFIT_PER_CATEGORY must be a non-negative integer")
            }
            ConfigError::InvalidSamplingSeed => {
                write!(f, "OUTFIT_SAMPLING_SEED must be a valid u64")
            }
            ConfigError::InvalidColorPolicy { value } => write!(
                f,
                "OUTFIT_COLOR_POLICY must be 'permissive' or 'strict', got '{}'",
                value
            ),
            ConfigError::InvalidFlag { name } => {
                write!(f, "{name} must be true/false, yes/no, on/off, or 1/0")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
