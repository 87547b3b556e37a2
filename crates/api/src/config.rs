use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory served as static files; asset paths resolve against it.
    pub public_dir: PathBuf,
    /// Subdirectory of `public_dir` that receives generated overlays.
    pub overlay_subdir: String,
    /// Optional JSON hotspot table replacing the built-in one.
    pub hotspot_config: Option<PathBuf>,
    /// Optional JSON sheet catalog replacing the built-in one.
    pub sheet_catalog: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_DIR`           | `public`                   |
    /// | `OVERLAY_SUBDIR`       | `overlays`                 |
    /// | `HOTSPOT_CONFIG`       | unset (built-in table)     |
    /// | `SHEET_CATALOG`        | unset (built-in catalog)   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_dir = PathBuf::from(
            std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into()),
        );

        let overlay_subdir =
            std::env::var("OVERLAY_SUBDIR").unwrap_or_else(|_| "overlays".into());

        let hotspot_config = optional_path("HOTSPOT_CONFIG");
        let sheet_catalog = optional_path("SHEET_CATALOG");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_dir,
            overlay_subdir,
            hotspot_config,
            sheet_catalog,
        }
    }

    /// Absolute-or-relative directory that generated overlays are written to.
    pub fn overlay_dir(&self) -> PathBuf {
        self.public_dir.join(&self.overlay_subdir)
    }
}

fn optional_path(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
