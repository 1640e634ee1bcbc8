#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime configuration provided to the component tree via context.
///
/// Replaces the module-level `API_URL` constant style: everything that talks
/// to the backend receives the base path from here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base path of the backend API, without a trailing slash.
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_owned(),
        }
    }
}
