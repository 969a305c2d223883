/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, BASE_URL, TEMPLATE_DIR, IDENTITY_HEADER など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_IDENTITY_HEADER: &str = "x-remote-user-display-name";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    /// Base URL of the host application, without a trailing slash.
    pub base_url: String,

    /// Overrides the built-in templates when set.
    pub template_dir: Option<PathBuf>,

    /// Trusted header carrying the caller's display name. `None` disables identity.
    pub identity_header: Option<String>,

    /// Request body limit. Pages are GET only, so this stays small.
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let base_url = match lookup("BASE_URL") {
            Some(v) => parse_base_url(&v)?,
            None => format!("http://localhost:{}", port),
        };

        let template_dir = lookup("TEMPLATE_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        // Unset falls back to the default header; an explicit empty value turns identity off.
        let identity_header = match lookup("IDENTITY_HEADER") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v.trim().to_ascii_lowercase()),
            None => Some(DEFAULT_IDENTITY_HEADER.to_string()),
        };

        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(v) => parse_positive(&v, "BODY_LIMIT_BYTES")?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_positive(&v, "REQUEST_TIMEOUT_SECS")?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            addr,
            app_env,
            base_url,
            template_dir,
            identity_header,
            body_limit_bytes,
            request_timeout,
        })
    }
}

fn parse_positive<T>(raw: &str, key: &'static str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    let value: T = raw.trim().parse().map_err(|_| ConfigError::Invalid(key))?;
    if value <= T::default() {
        return Err(ConfigError::Invalid(key));
    }
    Ok(value)
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::Missing("BASE_URL"));
    }

    let url = Url::parse(raw).map_err(|_| ConfigError::Invalid("BASE_URL"))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::Invalid("BASE_URL"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
