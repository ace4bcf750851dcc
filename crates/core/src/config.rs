/// Environment variable naming the analysis server.
pub const SERVER_URL_ENV: &str = "VIDLENS_SERVER_URL";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

pub const ANALYZE_ENDPOINT: &str = "/api/analyze-video";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub base_url: String,
    pub endpoint: &'static str,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl AnalyzerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: ANALYZE_ENDPOINT,
        }
    }

    /// Read the server URL from the environment, falling back to the local dev server.
    pub fn from_env() -> Self {
        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Full URL of the analysis endpoint
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}
