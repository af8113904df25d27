//! VapiClient implementation using the Vapi REST API.

use assistant_core::{
    async_trait, short_hash, AssistantError, DeployableAssistant, DeploymentClient,
    DeploymentReceipt,
};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, AssistantRequest, AssistantResponse, PhoneNumberRequest, PhoneNumberResponse,
};
use crate::config::VapiConfig;

/// A deployment client that creates assistants at Vapi.
///
/// Each trait call makes one request (two when phone numbers are
/// provisioned) and never retries.
pub struct VapiClient {
    client: Client,
    config: VapiConfig,
}

impl VapiClient {
    /// Create a new VapiClient with the given configuration.
    pub fn new(config: VapiConfig) -> Result<Self, AssistantError> {
        if config.api_key.trim().is_empty() {
            return Err(AssistantError::Configuration(
                "Vapi API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AssistantError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "VapiClient initialized for {} (provision numbers: {})",
            config.api_url, config.provision_phone_numbers
        );

        Ok(Self { client, config })
    }

    /// Create a VapiClient from environment variables.
    ///
    /// See [`VapiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, AssistantError> {
        let config = VapiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &VapiConfig {
        &self.config
    }

    /// Send a JSON request and decode the JSON response.
    async fn send<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, AssistantError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("Sending {} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(body)
            .send()
            .await
            .map_err(|e| AssistantError::DeploymentFailed(format!("Failed to send request: {}", e)))?;

        let response = check_status(response).await?;

        response.json().await.map_err(|e| {
            AssistantError::DeploymentFailed(format!("Failed to parse response: {}", e))
        })
    }

    /// Buy a number and bind it to the assistant.
    async fn provision_phone_number(
        &self,
        assistant_id: &str,
        name: &str,
    ) -> Result<PhoneNumberResponse, AssistantError> {
        let request = PhoneNumberRequest::for_assistant(assistant_id, name);
        self.send(Method::POST, "phone-number", &request).await
    }

    fn request_for(&self, assistant: &DeployableAssistant) -> AssistantRequest {
        AssistantRequest::from_deployable(assistant, self.config.server_url.as_deref())
    }
}

/// Turn a non-success response into a [`AssistantError::DeploymentFailed`]
/// carrying the provider's message.
async fn check_status(response: Response) -> Result<Response, AssistantError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();

    // Try to parse as API error
    if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
        return Err(AssistantError::DeploymentFailed(format!(
            "API error ({}): {}",
            status.as_u16(),
            api_error.describe()
        )));
    }

    Err(AssistantError::DeploymentFailed(format!(
        "API error ({}): {}",
        status.as_u16(),
        error_text
    )))
}

#[async_trait]
impl DeploymentClient for VapiClient {
    async fn deploy(
        &self,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        let request = self.request_for(assistant);
        let created: AssistantResponse = self.send(Method::POST, "assistant", &request).await?;

        info!(
            "Created Vapi assistant {} for '{}' (prompt {})",
            created.id,
            assistant.name,
            short_hash(&assistant.assembled_prompt)
        );

        let receipt = DeploymentReceipt::new(created.id.clone());
        if !self.config.provision_phone_numbers {
            return Ok(receipt);
        }

        // The assistant is live either way; a missing number is reported, not fatal.
        match self.provision_phone_number(&created.id, &assistant.name).await {
            Ok(PhoneNumberResponse {
                number: Some(number),
                ..
            }) => {
                info!("Assigned {} to assistant {}", number, created.id);
                Ok(receipt.with_phone_number(number))
            }
            Ok(phone) => {
                warn!(
                    "Phone number {} for assistant {} has no dialable number yet",
                    phone.id, created.id
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(
                    "Failed to provision phone number for assistant {}: {}",
                    created.id, e
                );
                Ok(receipt)
            }
        }
    }

    async fn update(
        &self,
        remote_id: &str,
        assistant: &DeployableAssistant,
    ) -> Result<DeploymentReceipt, AssistantError> {
        let request = self.request_for(assistant);
        let path = format!("assistant/{}", remote_id);
        let updated: AssistantResponse = self.send(Method::PATCH, &path, &request).await?;

        info!(
            "Updated Vapi assistant {} for '{}' (prompt {})",
            updated.id,
            assistant.name,
            short_hash(&assistant.assembled_prompt)
        );

        Ok(DeploymentReceipt::new(updated.id))
    }

    fn name(&self) -> &str {
        "VapiClient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name() {
        let config = VapiConfig::builder().api_key("test-key").build();

        let client = VapiClient::new(config).unwrap();
        assert_eq!(client.name(), "VapiClient");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let config = VapiConfig::builder().api_key("  ").build();

        assert!(matches!(
            VapiClient::new(config),
            Err(AssistantError::Configuration(_))
        ));
    }
}
