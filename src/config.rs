use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    sync::LazyLock,
};

/// Application configuration managed by Figment.
///
/// Values come from the process environment: `DATABASE_URL` plus any
/// `FOLIO_`-prefixed variable (`FOLIO_LISTEN_PORT`, `FOLIO_STATIC_DIR`, ...)
/// merged over serialized defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server listen address. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port. Default: `8000`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Connection string for the relational store (e.g. `sqlite://folio.db`).
    /// Required; an empty value is a fatal startup condition.
    #[serde(default)]
    pub database_url: String,

    /// Log level for tracing subscriber initialization when `RUST_LOG` is
    /// unset (e.g. "error", "warn", "info", "debug", "trace").
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Directory holding the built single-page client. When set, the server
    /// serves it as the fallback for non-API routes.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            database_url: String::new(),
            loglevel: default_loglevel(),
            static_dir: None,
        }
    }
}

fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

fn default_listen_port() -> u16 {
    8000
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Builds a Figment merging defaults, `DATABASE_URL`, and `FOLIO_*` vars.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["database_url"]))
            .merge(Env::prefixed("FOLIO_"))
    }

    /// Loads configuration from the environment and validates required
    /// fields. A missing connection string is fatal at startup, never a
    /// runtime error.
    pub fn from_env() -> Self {
        let cfg: Self = Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration from environment: {err}")
        });
        if cfg.database_url.trim().is_empty() {
            panic!("DATABASE_URL must be set and non-empty");
        }
        cfg
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, IpAddr::from(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(cfg.listen_port, 8000);
        assert!(cfg.database_url.is_empty());
        assert_eq!(cfg.loglevel, "info");
    }
}
