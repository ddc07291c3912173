use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::NovaResult;
use crate::models::content::TextContent;
use crate::models::message::{Message, MessageResponse};
use crate::models::tool::Tool;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }
}

/// Base trait for model providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the conversation to the model and return its reply in the anthropic shape
    async fn invoke(
        &self,
        max_tokens: u32,
        messages: &[Message],
        system: &TextContent,
        tools: &[Tool],
    ) -> NovaResult<MessageResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_usage_serialization() {
        let usage = Usage::new(10, 20);
        let json_value = serde_json::to_value(usage).unwrap();
        assert_eq!(json_value, json!({"input_tokens": 10, "output_tokens": 20}));

        let deserialized: Usage = serde_json::from_value(json_value).unwrap();
        assert_eq!(deserialized, usage);
    }
}
