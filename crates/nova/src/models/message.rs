use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::content::{ImageContent, TextContent, ToolResultContent};
use super::role::Role;
use crate::errors::NovaResult;
use crate::providers::base::Usage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUse {
    pub id: String,
    pub name: String,
    pub input: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_use_id: String,
    #[serde(default)]
    pub content: ToolResultContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Content passed inside a message, which can be both simple content and tool content
pub enum MessageContent {
    Text(TextContent),
    Image(ImageContent),
    ToolUse(ToolUse),
    ToolResult(ToolResult),
}

impl MessageContent {
    pub fn text<S: Into<String>>(text: S) -> Self {
        MessageContent::Text(TextContent::new(text))
    }

    pub fn image<S: Into<String>, T: Into<String>>(data: S, media_type: T) -> Self {
        MessageContent::Image(ImageContent::new(data, media_type))
    }

    pub fn tool_use<S: Into<String>, N: Into<String>>(id: S, name: N, input: Value) -> Self {
        MessageContent::ToolUse(ToolUse {
            id: id.into(),
            name: name.into(),
            input,
        })
    }

    pub fn tool_result<S: Into<String>, C: Into<ToolResultContent>>(
        tool_use_id: S,
        content: C,
    ) -> Self {
        MessageContent::ToolResult(ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
            is_error: None,
        })
    }

    /// Get the text content if this is a TextContent variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(&text.text),
            _ => None,
        }
    }

    pub fn as_tool_use(&self) -> Option<&ToolUse> {
        if let MessageContent::ToolUse(ref tool_use) = self {
            Some(tool_use)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A message to or from an LLM
pub struct Message {
    pub role: Role,
    pub content: Vec<MessageContent>,
}

impl Message {
    pub fn user() -> Self {
        Message {
            role: Role::User,
            content: Vec::new(),
        }
    }

    pub fn assistant() -> Self {
        Message {
            role: Role::Assistant,
            content: Vec::new(),
        }
    }

    /// Parse a message from its anthropic JSON form
    pub fn from_value(value: Value) -> NovaResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Add any MessageContent to the message
    pub fn with_content(mut self, content: MessageContent) -> Self {
        self.content.push(content);
        self
    }

    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        self.with_content(MessageContent::text(text))
    }

    pub fn with_image<S: Into<String>, T: Into<String>>(self, data: S, media_type: T) -> Self {
        self.with_content(MessageContent::image(data, media_type))
    }

    pub fn with_tool_use<S: Into<String>, N: Into<String>>(
        self,
        id: S,
        name: N,
        input: Value,
    ) -> Self {
        self.with_content(MessageContent::tool_use(id, name, input))
    }

    pub fn with_tool_result<S: Into<String>, C: Into<ToolResultContent>>(
        self,
        tool_use_id: S,
        content: C,
    ) -> Self {
        self.with_content(MessageContent::tool_result(tool_use_id, content))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The assistant reply returned by a provider, in the anthropic message shape
pub struct MessageResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub role: Role,
    pub model: String,
    pub content: Vec<MessageContent>,
    pub stop_reason: Option<String>,
    pub usage: Usage,
}

impl MessageResponse {
    /// Turn the reply into a message that can be appended to the conversation
    pub fn into_message(self) -> Message {
        Message {
            role: self.role,
            content: self.content,
        }
    }
}
