//! Server configuration from environment variables.

/// Runtime settings for the server binary. Every key has a default so a bare
/// `cargo run` starts against a local SQLite file.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `BIND_ADDR`, default `127.0.0.1:3000`.
    pub bind_addr: String,
    /// `DATABASE_URL`, default `sqlite:courses.db`.
    pub database_url: String,
    /// `BODY_LIMIT_BYTES`, default 65536.
    pub body_limit_bytes: usize,
}

const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:courses.db".into());
        let body_limit_bytes = std::env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT);
        ServerConfig {
            bind_addr,
            database_url,
            body_limit_bytes,
        }
    }
}
