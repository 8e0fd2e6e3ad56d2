use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | data/demandflow.db | SQLite database file |
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | DEBUG | false | enables the `/debug/*` endpoints |
/// | LOG_LEVEL | info | default log level (RUST_LOG wins when set) |
/// | LOG_DIR | - | daily rolling log files go here when the directory exists |
/// | LOGIN_DELAY_MS | 300 | fixed delay applied to every login attempt |
/// | ADMIN_USERNAME | admin | superuser ensured by the seed |
/// | ADMIN_PASSWORD | admin12345 | superuser password (reset on every seed) |
///
/// JWT settings are documented on [`JwtConfig`].
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    pub environment: String,
    pub debug: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub jwt: JwtConfig,
    pub login_delay_ms: u64,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let jwt = JwtConfig::from_env(&environment)?;

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/demandflow.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            debug: std::env::var("DEBUG")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            jwt,
            login_delay_ms: std::env::var("LOGIN_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(300),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin12345".into()),
            environment,
        })
    }

    /// Configuration for tests and embedded use: explicit database, no env lookups
    pub fn for_database(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            http_port: 0,
            environment: "development".into(),
            debug: false,
            log_level: "info".into(),
            log_dir: None,
            jwt: JwtConfig::with_secret("demandflow-test-secret-key-0123456789abcdef"),
            login_delay_ms: 0,
            admin_username: "admin".into(),
            admin_password: "admin12345".into(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_for_database_disables_debug() {
        let config = Config::for_database("/tmp/x.db");
        assert!(!config.debug);
        assert!(config.is_development());
        assert_eq!(config.login_delay_ms, 0);
    }
}
