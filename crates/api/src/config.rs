use axum::http::HeaderValue;

/// Error raised when the environment does not describe a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Document store connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection URI.
    pub url: String,
    /// Database holding the articles collection (default: `articles`).
    pub name: String,
    /// Collection holding article documents (default: `go`).
    pub collection: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `10000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `10`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `10000`                    |
    /// | `DB_URL`               | required                   |
    /// | `DB_NAME`              | `articles`                 |
    /// | `DB_COLLECTION`        | `go`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `10`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "10000"), "u16")?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "header value",
                value: bad.clone(),
            });
        }

        let request_timeout_secs = parse_var(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "10"),
            "u64",
        )?;

        let url = lookup("DB_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DB_URL"))?;

        let database = DatabaseConfig {
            url,
            name: var("DB_NAME", "articles"),
            collection: var("DB_COLLECTION", "go"),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_db_url_is_set() {
        let config = load(&[("DB_URL", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 10000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "articles");
        assert_eq!(config.database.collection, "go");
    }

    #[test]
    fn missing_db_url_is_an_error() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("DB_URL")));
        assert_matches!(load(&[("DB_URL", "")]), Err(ConfigError::Missing("DB_URL")));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let result = load(&[("DB_URL", "mongodb://db"), ("PORT", "http")]);
        assert_matches!(result, Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("DB_URL", "mongodb://db"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn overrides_are_respected() {
        let config = load(&[
            ("DB_URL", "mongodb://db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_NAME", "blog"),
            ("DB_COLLECTION", "posts"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.name, "blog");
        assert_eq!(config.database.collection, "posts");
        assert_eq!(config.request_timeout_secs, 3);
    }
}
