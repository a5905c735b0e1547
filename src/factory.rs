use crate::config::Config;
use crate::providers::openai::DEFAULT_BASE_URL;
use crate::{Error, LLMProvider, OpenAIProvider};
use reqwest::Url;
use std::env;
use tracing::info;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Configuration for creating providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
}

impl ProviderConfig {
    /// Create configuration from environment variables, scoped by `config`.
    pub fn from_env(config: &Config) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), config)
    }

    /// Read credentials from any variable source; tenant scoping comes from `config`.
    pub fn from_lookup<F>(lookup: F, config: &Config) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup(API_KEY_VAR),
            base_url: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            organization: config.organization.clone(),
            project: config.project.clone(),
        }
    }
}

/// Factory for creating chat-completion providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn LLMProvider>, Error> {
        // Announced before any validation so a failed build still shows it.
        info!(
            organization = ?config.organization,
            project = ?config.project,
            "using OpenAI scoping"
        );

        let api_key = config
            .api_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::auth(format!(
                    "{API_KEY_VAR} environment variable is required for OpenAI provider"
                ))
            })?;

        let url = Url::parse(&config.base_url).map_err(|e| {
            Error::config(format!("{BASE_URL_VAR} '{}' is not a URL: {e}", config.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "{BASE_URL_VAR} must be an http(s) URL, got '{}'",
                config.base_url
            )));
        }

        let provider = OpenAIProvider::new_with_base_url(api_key.clone(), config.base_url.clone())?
            .with_organization(config.organization.clone())
            .with_project(config.project.clone());
        Ok(Box::new(provider))
    }

    /// Create a provider from environment variables.
    pub fn from_env(config: &Config) -> Result<Box<dyn LLMProvider>, Error> {
        Self::create(&ProviderConfig::from_env(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    fn provider_config(api_key: Option<&str>, base_url: &str) -> ProviderConfig {
        ProviderConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            organization: None,
            project: None,
        }
    }

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ProviderConfig::from_lookup(|_| None, &Config::default());

        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.organization, None);
        assert_eq!(config.project, None);
    }

    #[test]
    fn test_from_lookup_copies_scoping() {
        let runner = Config {
            organization: Some("org-1".to_string()),
            project: Some("proj-1".to_string()),
            ..Config::default()
        };
        let config = ProviderConfig::from_lookup(
            |key| match key {
                "OPENAI_API_KEY" => Some("sk-test".to_string()),
                "OPENAI_BASE_URL" => Some("http://localhost:8080/v1".to_string()),
                _ => None,
            },
            &runner,
        );

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.organization.as_deref(), Some("org-1"));
        assert_eq!(config.project.as_deref(), Some("proj-1"));
    }

    #[test]
    fn test_create_without_api_key_fails() {
        let config = provider_config(Some(""), DEFAULT_BASE_URL);
        assert!(matches!(ProviderFactory::create(&config), Err(Error::Auth(_))));

        let config = provider_config(None, DEFAULT_BASE_URL);
        let err = ProviderFactory::create(&config).err().unwrap();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_create_rejects_bad_base_url() {
        for base_url in ["api.openai.com/v1", "ftp://api.openai.com/v1", ""] {
            let config = provider_config(Some("sk-test"), base_url);
            assert!(
                matches!(ProviderFactory::create(&config), Err(Error::Config(_))),
                "{base_url:?} was accepted"
            );
        }
    }

    #[test]
    fn test_create_accepts_uppercase_scheme() {
        let config = provider_config(Some("sk-test"), "HTTPS://api.openai.com/v1");
        assert!(ProviderFactory::create(&config).is_ok());
    }

    #[test]
    fn test_create_with_api_key() {
        let config = provider_config(Some("sk-test"), DEFAULT_BASE_URL);
        assert!(ProviderFactory::create(&config).is_ok());
    }

    #[test]
    fn test_scoping_logged_even_when_api_key_missing() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut config = provider_config(None, DEFAULT_BASE_URL);
        config.organization = Some("org-9".to_string());
        config.project = Some("proj-9".to_string());

        let result = tracing::subscriber::with_default(subscriber, || {
            ProviderFactory::create(&config).map(|_| ())
        });
        assert!(matches!(result, Err(Error::Auth(_))));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("using OpenAI scoping"));
        assert!(output.contains("org-9"));
        assert!(output.contains("proj-9"));
    }
}
