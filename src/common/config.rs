//! Configuration file handling
//!
//! All of the tenant-specific literals (host, credentials, implicit-wait
//! timeout) live here so the suite itself stays free of deployment details.

use serde::Deserialize;
use std::path::Path;

use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Host name of the CollectionSpace instance
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the UI is served on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tenant path segment
    #[serde(default = "default_tenant")]
    pub tenant: String,

    /// Login user id
    #[serde(default = "default_username")]
    pub username: String,

    /// Login password
    #[serde(default = "default_password")]
    pub password: String,

    /// WebDriver endpoint (geckodriver, chromedriver, or a Selenium server)
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Browser to request from the WebDriver endpoint ("firefox" or "chrome")
    #[serde(default = "default_browser")]
    pub browser: String,

    /// Implicit wait applied to every element lookup, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Full override of the computed tenant base URL
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tenant: default_tenant(),
            username: default_username(),
            password: default_password(),
            webdriver_url: default_webdriver_url(),
            browser: default_browser(),
            timeout_secs: default_timeout_secs(),
            base_url: None,
        }
    }
}

fn default_host() -> String {
    "cspace".to_string()
}
fn default_port() -> u16 {
    8180
}
fn default_tenant() -> String {
    "ucjeps".to_string()
}
fn default_username() -> String {
    "admin@ucjeps.cspace.berkeley.edu".to_string()
}
fn default_password() -> String {
    "Administrator".to_string()
}
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}
fn default_browser() -> String {
    "firefox".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns default configuration if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Base URL of the tenant UI, with a trailing slash
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{}/", url),
            None => format!(
                "http://{}:{}/collectionspace/ui/{}/html/",
                self.host, self.port, self.tenant
            ),
        }
    }

    /// URL of a page under the tenant UI, e.g. `page_url("index.html")`
    pub fn page_url(&self, page: &str) -> String {
        format!("{}{}", self.base_url(), page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "cspace");
        assert_eq!(config.tenant, "ucjeps");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(
            config.base_url(),
            "http://cspace:8180/collectionspace/ui/ucjeps/html/"
        );
    }

    #[test]
    fn test_page_url() {
        let config = Config::default();
        assert_eq!(
            config.page_url("createnew.html"),
            "http://cspace:8180/collectionspace/ui/ucjeps/html/createnew.html"
        );
    }

    #[test]
    fn test_parse_overrides() {
        let config: Config = toml::from_str(
            r#"
            host = "qa.cspace.example.edu"
            port = 8080
            timeout_secs = 2
            browser = "chrome"
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "qa.cspace.example.edu");
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.browser, "chrome");
        // Unspecified fields keep their defaults
        assert_eq!(config.tenant, "ucjeps");
    }

    #[test]
    fn test_base_url_override_gets_trailing_slash() {
        let config: Config = toml::from_str(
            r#"base_url = "https://ucjeps.cspace.berkeley.edu/cspace/ucjeps/html""#,
        )
        .unwrap();

        assert_eq!(
            config.page_url("index.html"),
            "https://ucjeps.cspace.berkeley.edu/cspace/ucjeps/html/index.html"
        );
    }
}
