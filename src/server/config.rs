use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,https://server-monitoring-assignment.vercel.app/";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML from config file at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to load config from environment: {0}")]
    Env(#[from] envy::Error),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub bind_address: SocketAddr,
    pub max_connections: u32,
    pub log_dir: String,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    database_url: Option<String>,
    allowed_origins: Option<String>,
    bind_address: Option<String>,
    max_connections: Option<u32>,
    log_dir: Option<String>,
}

/// Splits a comma-separated origin list. Origins never carry a path, so a
/// trailing `/` is dropped.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl ServerConfig {
    /// Loads `.env`, then the optional TOML file, then environment variables.
    /// Environment values override the file.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let file_config = match config_path {
            Some(path_str) => read_config_file(Path::new(path_str))?,
            None => PartialServerConfig::default(),
        };

        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()?;

        Self::merge(env_config, file_config)
    }

    fn merge(
        env_config: PartialServerConfig,
        file_config: PartialServerConfig,
    ) -> Result<Self, ConfigError> {
        let database_url = env_config
            .database_url
            .or(file_config.database_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let allowed_origins = parse_allowed_origins(
            env_config
                .allowed_origins
                .or(file_config.allowed_origins)
                .as_deref()
                .unwrap_or(DEFAULT_ALLOWED_ORIGINS),
        );

        let bind_raw = env_config
            .bind_address
            .or(file_config.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_raw.parse().map_err(|e| ConfigError::Invalid {
            field: "BIND_ADDRESS",
            reason: format!("{bind_raw:?}: {e}"),
        })?;

        let max_connections = env_config
            .max_connections
            .or(file_config.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                field: "MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ServerConfig {
            database_url,
            allowed_origins,
            bind_address,
            max_connections,
            log_dir: env_config
                .log_dir
                .or(file_config.log_dir)
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        })
    }
}

fn read_config_file(path: &Path) -> Result<PartialServerConfig, ConfigError> {
    if !path.exists() {
        return Ok(PartialServerConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_layer(vars: &[(&str, &str)]) -> PartialServerConfig {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        let result = ServerConfig::merge(env_layer(&[]), PartialServerConfig::default());
        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));

        let blank = ServerConfig::merge(
            env_layer(&[("DATABASE_URL", "  ")]),
            PartialServerConfig::default(),
        );
        assert!(matches!(blank, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_defaults_apply_when_only_database_url_is_set() {
        let config = ServerConfig::merge(
            env_layer(&[("DATABASE_URL", "postgres://localhost/monitor")]),
            PartialServerConfig::default(),
        )
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/monitor");
        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:5173",
                "http://localhost:3000",
                "https://server-monitoring-assignment.vercel.app",
            ]
        );
        assert_eq!(config.bind_address, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = PartialServerConfig {
            database_url: Some("postgres://file/db".to_string()),
            bind_address: Some("127.0.0.1:9000".to_string()),
            max_connections: Some(3),
            ..Default::default()
        };
        let config = ServerConfig::merge(
            env_layer(&[("DATABASE_URL", "postgres://env/db"), ("MAX_CONNECTIONS", "20")]),
            file,
        )
        .unwrap();

        assert_eq!(config.database_url, "postgres://env/db");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.bind_address, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let result = ServerConfig::merge(
            env_layer(&[("DATABASE_URL", "sqlite::memory:"), ("BIND_ADDRESS", "not-an-addr")]),
            PartialServerConfig::default(),
        );
        assert!(matches!(result, Err(ConfigError::Invalid { field: "BIND_ADDRESS", .. })));
    }

    #[test]
    fn test_origin_list_is_trimmed() {
        assert_eq!(
            parse_allowed_origins(" https://a.example/ ,, http://b.example:8080"),
            vec!["https://a.example", "http://b.example:8080"]
        );
        assert!(parse_allowed_origins("").is_empty());
    }

    #[test]
    fn test_reads_toml_file_layer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database_url = \"sqlite::memory:\"\nallowed_origins = \"https://dash.example\"\nlog_dir = \"/var/log/monitor\""
        )
        .unwrap();

        let partial = read_config_file(file.path()).unwrap();
        let config = ServerConfig::merge(env_layer(&[]), partial).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.allowed_origins, vec!["https://dash.example"]);
        assert_eq!(config.log_dir, "/var/log/monitor");
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let partial = read_config_file(Path::new("/nonexistent/monitor.toml")).unwrap();
        assert!(partial.database_url.is_none());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database_url = ").unwrap();

        assert!(matches!(
            read_config_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
