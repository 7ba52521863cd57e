use std::env;

use axum::http::HeaderValue;

/// Start-up configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Reported by the health check and attached to start-up logs.
    pub service_name: String,
    /// Allowed CORS origin. `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service_name: "infection-audit".to_string(),
            cors_origin: None,
        }
    }
}

impl ApiConfig {
    /// Reads `AUDIT_SERVICE_NAME` and `AUDIT_CORS_ORIGIN`.
    pub fn from_env() -> eyre::Result<Self> {
        let defaults = Self::default();

        let service_name = env::var("AUDIT_SERVICE_NAME").unwrap_or(defaults.service_name);
        let cors_origin = match env::var("AUDIT_CORS_ORIGIN") {
            Ok(origin) if !origin.is_empty() && origin != "*" => Some(
                HeaderValue::from_str(&origin)
                    .map_err(|e| eyre::eyre!("invalid AUDIT_CORS_ORIGIN {origin:?}: {e}"))?,
            ),
            _ => None,
        };

        Ok(Self {
            service_name,
            cors_origin,
        })
    }
}
