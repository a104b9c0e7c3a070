//! Environment-driven configuration. `.env` is loaded by `main` before these
//! are read. Malformed numeric values abort startup.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Front-end origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this get a 408.
    pub request_timeout_secs: u64,
    /// Upper bound on waiting for the pool to close after the listener stops.
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `5000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parsed_var_or("PORT", 5000),
            cors_origins: parse_origins(&var_or("CORS_ORIGINS", "http://localhost:3000")),
            request_timeout_secs: parsed_var_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: parsed_var_or("SHUTDOWN_TIMEOUT_SECS", 30),
        }
    }
}

/// Where the connection settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// A full `postgres://` URL from `DATABASE_URL`.
    Url(String),
    /// Discrete settings. The password is passed to the driver as-is, so it
    /// may contain URL-reserved characters.
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// `DATABASE_URL` wins when set; otherwise the discrete parts are used.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | (empty)     |
    /// | `DB_NAME`            | `asset`     |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    pub fn from_env() -> Self {
        let target = match env::var("DATABASE_URL") {
            Ok(url) => DatabaseTarget::Url(url),
            Err(_) => DatabaseTarget::Parts {
                host: var_or("DB_HOST", "localhost"),
                port: parsed_var_or("DB_PORT", 5432),
                user: var_or("DB_USER", "postgres"),
                password: var_or("DB_PASSWORD", ""),
                database: var_or("DB_NAME", "asset"),
            },
        };

        Self {
            target,
            max_connections: parsed_var_or("DB_MAX_CONNECTIONS", 10),
        }
    }

    /// Driver connection options for [`assetdesk_db::create_pool`].
    ///
    /// Fails only when `DATABASE_URL` is not a valid connection URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.target {
            DatabaseTarget::Url(url) => url.parse(),
            DatabaseTarget::Parts {
                host,
                port,
                user,
                password,
                database,
            } => {
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(database);
                Ok(if password.is_empty() {
                    options
                } else {
                    options.password(password)
                })
            }
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value {raw:?}: {e:?}")),
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
