//! Lead API configuration

/// Origin used when `KISAN_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:3002";

/// Where the lead endpoints live
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the origin baked in at compile time.
    ///
    /// The frontend has no runtime environment, so the override is taken from
    /// `KISAN_API_BASE` when the bundle is built.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("KISAN_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn callback_url(&self) -> String {
        format!("{}/api/callback", self.base_url)
    }

    pub fn enroll_url(&self) -> String {
        format!("{}/api/enroll", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.callback_url(), "http://localhost:3002/api/callback");
        assert_eq!(config.enroll_url(), "http://localhost:3002/api/enroll");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.kisanedge.com/");
        assert_eq!(config.callback_url(), "https://api.kisanedge.com/api/callback");
    }
}
