use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::operation::RequestId;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde_json::{json, Value};

use super::base::Provider;
use super::configs::BedrockProviderConfig;
use super::utils::{messages_to_nova_spec, nova_response_to_message, tools_to_nova_spec};
use crate::errors::{NovaError, NovaResult};
use crate::models::content::TextContent;
use crate::models::message::{Message, MessageResponse};
use crate::models::tool::Tool;

pub const SCHEMA_VERSION: &str = "messages-v1";

/// Raw result of a model invocation
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeOutput {
    /// Request id from the response metadata
    pub request_id: String,
    pub body: Vec<u8>,
}

/// Sends a serialized request body to a model and returns the raw response
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> NovaResult<InvokeOutput>;
}

/// `InvokeModel` against the bedrock runtime endpoint
pub struct BedrockRuntimeInvoker {
    client: Client,
}

impl BedrockRuntimeInvoker {
    /// Resolve credentials for the configured region and profile
    pub async fn new(config: &BedrockProviderConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl ModelInvoker for BedrockRuntimeInvoker {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> NovaResult<InvokeOutput> {
        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| NovaError::Transport(DisplayErrorContext(&e).to_string()))?;

        let request_id = request_id_or_empty(output.request_id());
        Ok(InvokeOutput {
            request_id,
            body: output.body.into_inner(),
        })
    }
}

fn request_id_or_empty(request_id: Option<&str>) -> String {
    match request_id {
        Some(id) => id.to_string(),
        None => {
            tracing::warn!("bedrock response carried no request id, reply id will be empty");
            String::new()
        }
    }
}

pub struct BedrockProvider<I = BedrockRuntimeInvoker> {
    invoker: I,
    config: BedrockProviderConfig,
}

impl BedrockProvider<BedrockRuntimeInvoker> {
    pub async fn new(config: BedrockProviderConfig) -> Self {
        let invoker = BedrockRuntimeInvoker::new(&config).await;
        Self { invoker, config }
    }
}

impl<I: ModelInvoker> BedrockProvider<I> {
    pub fn with_invoker(config: BedrockProviderConfig, invoker: I) -> Self {
        Self { invoker, config }
    }

    pub fn config(&self) -> &BedrockProviderConfig {
        &self.config
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Assemble the full `messages-v1` request envelope
    pub fn build_request(
        &self,
        max_tokens: u32,
        messages: &[Message],
        system: &TextContent,
        tools: &[Tool],
    ) -> NovaResult<Value> {
        let mut request = json!({
            "schemaVersion": SCHEMA_VERSION,
            "messages": messages_to_nova_spec(messages)?,
            "system": [{"text": system.text}],
            "inferenceConfig": {
                "maxTokens": max_tokens,
                "topP": self.config.top_p,
                "temperature": self.config.temperature,
            },
        });

        // Nova rejects an empty tool list, so leave toolConfig out entirely
        if !tools.is_empty() {
            request["toolConfig"] = json!({"tools": tools_to_nova_spec(tools)?});
        }

        Ok(request)
    }
}

#[async_trait]
impl<I: ModelInvoker> Provider for BedrockProvider<I> {
    async fn invoke(
        &self,
        max_tokens: u32,
        messages: &[Message],
        system: &TextContent,
        tools: &[Tool],
    ) -> NovaResult<MessageResponse> {
        let request = self.build_request(max_tokens, messages, system, tools)?;
        let body = serde_json::to_vec(&request)?;

        tracing::debug!(
            model = %self.config.model_id,
            messages = messages.len(),
            tools = tools.len(),
            "invoking nova model"
        );
        let output = self.invoker.invoke_model(&self.config.model_id, body).await?;

        let response =
            nova_response_to_message(&output.body, &output.request_id, &self.config.model_id)?;
        tracing::debug!(
            request_id = %response.id,
            stop_reason = ?response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "nova model replied"
        );
        Ok(response)
    }
}
