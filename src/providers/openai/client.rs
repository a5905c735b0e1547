use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, OpenAIError, OpenAIMessage, ResponseChoice,
};
use crate::provider::LLMProvider;
use crate::{ChatCompletion, Choice, ChoiceMessage, Error, LLMRequest, Message};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default base URL of the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// OpenAI provider implementation.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    organization: Option<String>,
    project: Option<String>,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            organization: None,
            project: None,
        })
    }

    /// Bind requests to an organization. `None` uses the account default.
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }

    /// Bind requests to a project. `None` uses the account default.
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert internal request to OpenAI Chat Completions format.
    fn convert_request(&self, request: &LLMRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: request.messages.iter().map(Self::convert_message).collect(),
        }
    }

    fn convert_message(message: &Message) -> OpenAIMessage {
        OpenAIMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }

    /// Convert the wire response to our completion type, keeping the untouched body.
    fn convert_response(response: ChatCompletionResponse, raw: serde_json::Value) -> ChatCompletion {
        ChatCompletion {
            id: response.id,
            object: response.object,
            created: response.created,
            model: response.model,
            choices: response
                .choices
                .into_iter()
                .map(Self::convert_choice)
                .collect(),
            usage: response.usage,
            system_fingerprint: response.system_fingerprint,
            raw,
        }
    }

    fn convert_choice(choice: ResponseChoice) -> Choice {
        Choice {
            index: choice.index,
            message: ChoiceMessage {
                role: choice.message.role,
                content: choice.message.content,
            },
            finish_reason: choice.finish_reason,
        }
    }

    /// Pull the service's message out of an error body, falling back to the raw text.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<OpenAIError>(body) {
            Ok(err) => err.error.message,
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, request: &LLMRequest) -> Result<ChatCompletion, Error> {
        let openai_request = self.convert_request(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            url = %url,
            model = %openai_request.model,
            messages = openai_request.messages.len(),
            "sending chat completion request"
        );

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");

        if let Some(organization) = &self.organization {
            builder = builder.header("OpenAI-Organization", organization);
        }
        if let Some(project) = &self.project {
            builder = builder.header("OpenAI-Project", project);
        }

        let response = builder.json(&openai_request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(Error::provider(
                "OpenAI",
                format!("API error ({status}): {}", Self::error_message(&error_text)),
            ));
        }

        let body = response.text().await?;
        let raw: serde_json::Value = serde_json::from_str(&body)?;
        let parsed: ChatCompletionResponse = serde_json::from_value(raw.clone())?;
        debug!(id = %parsed.id, choices = parsed.choices.len(), "received chat completion");

        Ok(Self::convert_response(parsed, raw))
    }
}
