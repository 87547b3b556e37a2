use crate::error::StudioError;

/// Which backend answers overlay requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlaySourceConfig {
    /// Real overlay endpoint.
    Http {
        /// Base URL of the JSON API, e.g. `http://localhost:3000/api`.
        api_url: String,
        /// Per-request timeout in seconds.
        timeout_secs: u64,
    },
    /// Canned response for offline UI work; every request yields `overlay_url`.
    Fixture { overlay_url: String },
}

/// Studio client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioConfig {
    /// Base image path (relative to the public root) shown in the studio.
    pub base_image: String,
    pub source: OverlaySourceConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_image: "assets/washroom.png".into(),
            source: OverlaySourceConfig::Http {
                api_url: "http://localhost:3000/api".into(),
                timeout_secs: 30,
            },
        }
    }
}

impl StudioConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `BASE_IMAGE`           | `assets/washroom.png`          |
    /// | `OVERLAY_SOURCE`       | `http` (`http` or `fixture`)   |
    /// | `OVERLAY_API_URL`      | `http://localhost:3000/api`    |
    /// | `OVERLAY_TIMEOUT_SECS` | `30`                           |
    /// | `FIXTURE_OVERLAY_URL`  | `assets/washroomtheme2.png`    |
    pub fn from_env() -> Result<Self, StudioError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StudioError> {
        let base_image = lookup("BASE_IMAGE").unwrap_or_else(|| "assets/washroom.png".into());

        let kind = lookup("OVERLAY_SOURCE").unwrap_or_else(|| "http".into());
        let source = match kind.trim().to_ascii_lowercase().as_str() {
            "http" => {
                let api_url = lookup("OVERLAY_API_URL")
                    .unwrap_or_else(|| "http://localhost:3000/api".into())
                    .trim_end_matches('/')
                    .to_string();
                let timeout_secs = match lookup("OVERLAY_TIMEOUT_SECS") {
                    Some(raw) => raw.parse().map_err(|_| {
                        StudioError::Config(format!(
                            "OVERLAY_TIMEOUT_SECS must be a valid u64 (got '{raw}')"
                        ))
                    })?,
                    None => 30,
                };
                OverlaySourceConfig::Http {
                    api_url,
                    timeout_secs,
                }
            }
            "fixture" => OverlaySourceConfig::Fixture {
                overlay_url: lookup("FIXTURE_OVERLAY_URL")
                    .unwrap_or_else(|| "assets/washroomtheme2.png".into()),
            },
            other => {
                return Err(StudioError::Config(format!(
                    "OVERLAY_SOURCE must be 'http' or 'fixture' (got '{other}')"
                )));
            }
        };

        Ok(Self { base_image, source })
    }
}
