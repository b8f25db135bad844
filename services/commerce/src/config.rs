use shopfront_core::tracing::LogFormat;

/// Commerce service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CommerceConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5001). Env var: `COMMERCE_PORT`.
    pub commerce_port: u16,
    /// Apply pending migrations before serving (default false). Env var: `COMMERCE_AUTO_MIGRATE`.
    pub auto_migrate: bool,
    /// `json` or `pretty` (default json). Env var: `COMMERCE_LOG_FORMAT`.
    pub log_format: LogFormat,
}

impl CommerceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").expect("DATABASE_URL"),
            commerce_port: lookup("COMMERCE_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5001),
            auto_migrate: lookup("COMMERCE_AUTO_MIGRATE")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_format: lookup("COMMERCE_LOG_FORMAT")
                .as_deref()
                .and_then(LogFormat::parse)
                .unwrap_or_default(),
        }
    }
}
