// src/config.rs
use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Production,
    Development,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub mode: Mode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".parse().unwrap(),
            db_path: "pg_finder.sqlite3".to_string(),
            mode: Mode::Production,
        }
    }
}

impl AppConfig {
    /// Environment overrides on top of the defaults:
    /// PG_FINDER_ADDR, PG_FINDER_DB, PG_FINDER_MODE=development|production.
    /// Unparseable values fall back rather than abort.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(addr) = env::var("PG_FINDER_ADDR") {
            match addr.parse() {
                Ok(parsed) => cfg.addr = parsed,
                Err(_) => eprintln!("Ignoring bad PG_FINDER_ADDR: {addr}"),
            }
        }
        if let Ok(path) = env::var("PG_FINDER_DB") {
            cfg.db_path = path;
        }
        if let Ok(mode) = env::var("PG_FINDER_MODE") {
            cfg.mode = match mode.to_lowercase().as_str() {
                "development" | "dev" => Mode::Development,
                _ => Mode::Production,
            };
        }

        cfg
    }
}
