/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, JWT 設定, bcrypt cost など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
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

/// Token settings: issuer, HMAC secret, lifetime in minutes.
///
/// Key material is not printable via Debug.
#[derive(Clone)]
pub struct JwtProperties {
    pub issuer: String,
    pub secret_key: String,
    pub expiration_minute: i64,
}

impl fmt::Debug for JwtProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtProperties")
            .field("issuer", &self.issuer)
            .field("expiration_minute", &self.expiration_minute)
            .finish()
    }
}

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_EXPIRATION_MINUTE: i64 = 120;
/// One year.
pub const MAX_EXPIRATION_MINUTE: i64 = 60 * 24 * 366;
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // None -> in-memory user store
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    pub jwt: JwtProperties,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source (environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let database_url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS);

        let issuer = lookup("JWT_ISSUER")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_ISSUER"))?;

        let secret_key = lookup("JWT_SECRET_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET_KEY"))?;

        let expiration_minute = match lookup("JWT_EXPIRATION_MINUTE") {
            Some(v) => v
                .parse::<i64>()
                .ok()
                .filter(|m| (1..=MAX_EXPIRATION_MINUTE).contains(m))
                .ok_or(ConfigError::Invalid("JWT_EXPIRATION_MINUTE"))?,
            None => DEFAULT_EXPIRATION_MINUTE,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|c| (4..=31).contains(c))
                .ok_or(ConfigError::Invalid("BCRYPT_COST"))?,
            None => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            jwt: JwtProperties {
                issuer,
                secret_key,
                expiration_minute,
            },
            bcrypt_cost,
        })
    }
}
