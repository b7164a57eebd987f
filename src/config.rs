//! Environment-backed configuration.
//!
//! `DATABASE_URL` selects the storage target; `LOGLEVEL` sets the default
//! tracing filter (overridable via `RUST_LOG`). Everything else is fixed.

use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::sync::LazyLock;

fn default_database_url() -> String {
    "sqlite:todos.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            loglevel: default_loglevel(),
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::from(Env::raw()).extract().unwrap_or_default()
});

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg = Config::default();
        assert_eq!(cfg.database_url, "sqlite:todos.db");
        assert_eq!(cfg.loglevel, "info");
    }
}
