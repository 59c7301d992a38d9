//! Service configuration - environment loading with dev defaults
//!
//! Variables: `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`,
//! `PORT`. Defaults target a local MariaDB instance.

use std::net::SocketAddr;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            db_host: env_or("DB_HOST", "localhost"),
            db_port: env_or("DB_PORT", "3306").parse().unwrap_or(3306),
            db_user: env_or("DB_USER", "root"),
            db_password: env_or("DB_PASSWORD", ""),
            db_name: env_or("DB_NAME", "listas"),
            port: env_or("PORT", "3000").parse().unwrap_or(3000),
        }
    }

    /// MySQL connection URL for sqlx
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_assembly() {
        let config = Config {
            db_host: "db".into(),
            db_port: 3307,
            db_user: "app".into(),
            db_password: "secret".into(),
            db_name: "listas".into(),
            port: 3000,
        };
        assert_eq!(config.database_url(), "mysql://app:secret@db:3307/listas");
    }
}
