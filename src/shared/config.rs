/// Remote API configuration and tool defaults.

/// Host queried when `--host` is not given.
pub const DEFAULT_HOST: &str = "https://en.wikipedia.org";

/// Path of the action API below the host.
pub const API_PATH: &str = "/w/api.php";

/// Worker threads used for lookups when `--threads` is not given.
pub const DEFAULT_THREADS: usize = 4;

/// Pages shorter than this many characters are reported as too short.
pub const DEFAULT_MIN_LENGTH: u64 = 150;

/// Connection parameters for the MediaWiki action API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host, e.g. `https://en.wikipedia.org`
    pub host: String,

    /// Path of `api.php` below the host
    pub api_path: String,

    /// Contact address appended to the User-Agent
    pub contact: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_path: API_PATH.to_string(),
            contact: None,
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for the given host using the default API path
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Sets the contact address sent with every request
    pub fn with_contact(mut self, contact: Option<String>) -> Self {
        self.contact = contact.filter(|c| !c.trim().is_empty());
        self
    }

    /// Full URL of the action API endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            self.api_path.trim_start_matches('/')
        )
    }

    /// User-Agent header value identifying this tool and its operator
    pub fn user_agent(&self) -> String {
        let product = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        match &self.contact {
            Some(contact) => format!("{} ({})", product, contact),
            None => product.to_string(),
        }
    }
}
