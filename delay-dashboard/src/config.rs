//! API endpoint configuration.
//!
//! The dashboard talks to one backend whose origin depends only on the
//! runtime mode: the local development server, or the deployed instance.
//! The mode is resolved once at startup; everything downstream treats the
//! base URL as a constant.

/// Base URL of the delay API when developing against a local backend.
pub const DEV_API_URL: &str = "http://localhost:3000";

/// Base URL of the deployed delay API.
pub const PROD_API_URL: &str = "https://vvs-delays.fly.dev";

/// Runtime mode of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Local development against a backend on localhost.
    #[default]
    Development,
    /// Deployed dashboard against the production backend.
    Production,
}

impl Mode {
    /// Resolve the mode from the `DASHBOARD_ENV` environment variable.
    ///
    /// Anything other than `production` (case-insensitive), including an
    /// unset variable, means development.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var("DASHBOARD_ENV").ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Mode::Production,
            _ => Mode::Development,
        }
    }
}

/// The API base URL for the given mode.
pub fn api_base_url(mode: Mode) -> &'static str {
    match mode {
        Mode::Development => DEV_API_URL,
        Mode::Production => PROD_API_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_per_mode() {
        assert_eq!(api_base_url(Mode::Development), "http://localhost:3000");
        assert_eq!(api_base_url(Mode::Production), PROD_API_URL);
    }

    #[test]
    fn mode_from_env_value() {
        assert_eq!(Mode::from_env_value(None), Mode::Development);
        assert_eq!(Mode::from_env_value(Some("development")), Mode::Development);
        assert_eq!(Mode::from_env_value(Some("production")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("PRODUCTION")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("staging")), Mode::Development);
    }

    #[test]
    fn default_is_development() {
        assert_eq!(Mode::default(), Mode::Development);
    }
}
