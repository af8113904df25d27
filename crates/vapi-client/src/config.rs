//! Configuration for VapiClient.

use assistant_core::AssistantError;
use std::env;
use std::time::Duration;

/// Default Vapi API URL.
pub const DEFAULT_API_URL: &str = "https://api.vapi.ai";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for VapiClient.
#[derive(Debug, Clone)]
pub struct VapiConfig {
    /// Vapi API URL.
    pub api_url: String,

    /// Private API key for authentication.
    pub api_key: String,

    /// URL the provider posts webhook events to.
    pub server_url: Option<String>,

    /// Timeout for each API request.
    pub timeout: Duration,

    /// Buy a phone number for every newly created assistant.
    pub provision_phone_numbers: bool,
}

impl Default for VapiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            server_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            provision_phone_numbers: false,
        }
    }
}

impl VapiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `VAPI_API_KEY` - Private API key
    ///
    /// Optional environment variables:
    /// - `VAPI_API_URL` - API URL (default: https://api.vapi.ai)
    /// - `VAPI_SERVER_URL` - Webhook URL for call events (default: none)
    /// - `VAPI_TIMEOUT_SECS` - Request timeout (default: 30)
    /// - `VAPI_PROVISION_PHONE_NUMBERS` - Provision a number per new assistant (default: false)
    pub fn from_env() -> Result<Self, AssistantError> {
        let api_key = env::var("VAPI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AssistantError::Configuration("VAPI_API_KEY not set".to_string()))?;

        let api_url = env::var("VAPI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let server_url = env::var("VAPI_SERVER_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let timeout_secs = env::var("VAPI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let provision_phone_numbers = env::var("VAPI_PROVISION_PHONE_NUMBERS")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            api_url,
            api_key,
            server_url,
            timeout: Duration::from_secs(timeout_secs),
            provision_phone_numbers,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> VapiConfigBuilder {
        VapiConfigBuilder::default()
    }

    /// Full URL of an API path, e.g. `assistant` or `assistant/{id}`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

/// Builder for VapiConfig.
#[derive(Debug, Default)]
pub struct VapiConfigBuilder {
    config: VapiConfig,
}

impl VapiConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.config.server_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn provision_phone_numbers(mut self, enable: bool) -> Self {
        self.config.provision_phone_numbers = enable;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VapiConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VapiConfig::default();

        assert_eq!(config.api_url, "https://api.vapi.ai");
        assert!(config.api_key.is_empty());
        assert!(config.server_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.provision_phone_numbers);
    }

    #[test]
    fn test_builder_all_options() {
        let config = VapiConfig::builder()
            .api_key("my-key")
            .api_url("http://localhost:9000/")
            .server_url("https://hooks.example.com/vapi")
            .timeout(Duration::from_secs(5))
            .provision_phone_numbers(true)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.server_url.as_deref(), Some("https://hooks.example.com/vapi"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.provision_phone_numbers);
        assert_eq!(config.endpoint("assistant"), "http://localhost:9000/assistant");
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_vapi_vars() {
            std::env::remove_var("VAPI_API_KEY");
            std::env::remove_var("VAPI_API_URL");
            std::env::remove_var("VAPI_SERVER_URL");
            std::env::remove_var("VAPI_TIMEOUT_SECS");
            std::env::remove_var("VAPI_PROVISION_PHONE_NUMBERS");
        }

        // Scenario 1: Missing API key should error
        clear_all_vapi_vars();
        match VapiConfig::from_env() {
            Err(AssistantError::Configuration(msg)) => assert!(msg.contains("VAPI_API_KEY")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_vapi_vars();
        std::env::set_var("VAPI_API_KEY", "test-env-key");

        let config = VapiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.vapi.ai");
        assert!(config.server_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.provision_phone_numbers);

        // Scenario 3: All vars set
        clear_all_vapi_vars();
        std::env::set_var("VAPI_API_KEY", "full-test-key");
        std::env::set_var("VAPI_API_URL", "https://test.vapi.local");
        std::env::set_var("VAPI_SERVER_URL", "https://hooks.example.com");
        std::env::set_var("VAPI_TIMEOUT_SECS", "10");
        std::env::set_var("VAPI_PROVISION_PHONE_NUMBERS", "TRUE");

        let config = VapiConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://test.vapi.local");
        assert_eq!(config.server_url.as_deref(), Some("https://hooks.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.provision_phone_numbers);

        // Scenario 4: Unparseable timeout falls back to the default
        clear_all_vapi_vars();
        std::env::set_var("VAPI_API_KEY", "test-key");
        std::env::set_var("VAPI_TIMEOUT_SECS", "soon");

        let config = VapiConfig::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));

        // Cleanup
        clear_all_vapi_vars();
    }
}
