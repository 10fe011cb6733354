use crate::domain::logging::LogLevel;

pub const DEFAULT_ENDPOINT: &str = "/api/replay";

/// Initial values of the replay form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub exchange: String,
    /// `datetime-local` representation
    pub from_date: String,
    pub to_date: String,
    pub symbols: String,
    pub limit: i64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            exchange: "bitmex".to_string(),
            from_date: "2024-12-01T00:00".to_string(),
            to_date: "2024-12-01T00:10".to_string(),
            symbols: "XBTUSD".to_string(),
            limit: 50,
        }
    }
}

/// Viewer configuration. An empty `base_url` targets the page's own origin.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub base_url: String,
    pub endpoint: String,
    pub defaults: FormDefaults,
    pub log_level: LogLevel,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            defaults: FormDefaults::default(),
            log_level: if cfg!(debug_assertions) {
                LogLevel::Debug
            } else {
                LogLevel::Info
            },
        }
    }
}

impl ReplayConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full URL of the replay endpoint
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            return self.endpoint.clone();
        }
        let path = format!("/{}", self.endpoint.trim_start_matches('/'));
        if self.base_url.is_empty() {
            path
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }
}
