use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;
use strum_macros::{EnumIter, IntoStaticStr};

use super::base::Usage;
use crate::errors::{NovaError, NovaResult};
use crate::models::content::{ImageContent, ToolResultBlock, ToolResultContent};
use crate::models::message::{Message, MessageContent, MessageResponse, ToolUse};
use crate::models::role::Role;
use crate::models::tool::Tool;

/// Image formats nova accepts inside `image.format`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    pub fn from_media_type(media_type: &str) -> NovaResult<Self> {
        match media_type.trim().to_ascii_lowercase().as_str() {
            "image/png" => Ok(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Ok(ImageFormat::Jpeg),
            "image/gif" => Ok(ImageFormat::Gif),
            "image/webp" => Ok(ImageFormat::Webp),
            _ => Err(NovaError::UnsupportedMediaType(media_type.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Convert an image into the nova image block, keeping the base64 payload as is
pub fn convert_image(image: &ImageContent) -> NovaResult<Value> {
    let format = ImageFormat::from_media_type(&image.source.media_type)?;
    Ok(json!({
        "image": {
            "format": format.as_str(),
            "source": {"bytes": image.source.data}
        }
    }))
}

fn tool_result_content_to_nova(
    tool_use_id: &str,
    content: &ToolResultContent,
) -> NovaResult<Vec<Value>> {
    let results = match content {
        ToolResultContent::Text(text) => vec![json!({"text": text})],
        ToolResultContent::Blocks(blocks) => {
            let mut results = Vec::with_capacity(blocks.len());
            for block in blocks {
                match block {
                    ToolResultBlock::Text(text) => results.push(json!({"text": text.text})),
                    ToolResultBlock::Image(image) => results.push(convert_image(image)?),
                    ToolResultBlock::Unsupported => {
                        tracing::warn!(
                            tool_use_id,
                            "dropping tool result block with a type nova cannot carry"
                        );
                    }
                }
            }
            results
        }
    };

    // Nova rejects a tool result with an empty content list
    if results.is_empty() {
        return Err(NovaError::MalformedMessage(format!(
            "tool_result {} has no text or image content",
            tool_use_id
        )));
    }
    Ok(results)
}

/// Convert internal Message format to nova `messages-v1` wire messages
pub fn messages_to_nova_spec(messages: &[Message]) -> NovaResult<Vec<Value>> {
    let mut messages_spec = Vec::with_capacity(messages.len());

    for message in messages {
        let mut contents = Vec::with_capacity(message.content.len());

        for content in &message.content {
            match content {
                MessageContent::Text(text) => contents.push(json!({"text": text.text})),
                MessageContent::Image(image) => contents.push(convert_image(image)?),
                MessageContent::ToolUse(tool_use) => contents.push(json!({
                    "toolUse": {
                        "toolUseId": tool_use.id,
                        "name": tool_use.name,
                        "input": tool_use.input,
                    }
                })),
                MessageContent::ToolResult(result) => {
                    let mut tool_result = json!({
                        "toolUseId": result.tool_use_id,
                        "content": tool_result_content_to_nova(&result.tool_use_id, &result.content)?,
                    });
                    if result.is_error == Some(true) {
                        tool_result["status"] = json!("error");
                    }
                    contents.push(json!({"toolResult": tool_result}));
                }
            }
        }

        messages_spec.push(json!({
            "role": message.role,
            "content": contents,
        }));
    }

    Ok(messages_spec)
}

/// Convert internal Tool format to nova `toolConfig.tools` entries
pub fn tools_to_nova_spec(tools: &[Tool]) -> NovaResult<Vec<Value>> {
    let mut tool_names = HashSet::new();
    let mut result = Vec::with_capacity(tools.len());

    for tool in tools {
        if !tool_names.insert(&tool.name) {
            return Err(NovaError::DuplicateTool(tool.name.clone()));
        }

        result.push(json!({
            "toolSpec": {
                "name": tool.name,
                "description": tool.description,
                "inputSchema": {"json": tool.input_schema},
            }
        }));
    }

    Ok(result)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NovaToolUse {
    tool_use_id: String,
    name: String,
    input: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NovaUsage {
    input_tokens: u32,
    output_tokens: u32,
}

fn content_from_nova(block: &Value) -> NovaResult<MessageContent> {
    if let Some(text) = block.get("text") {
        let text = text
            .as_str()
            .ok_or_else(|| NovaError::MalformedMessage(format!("text block is not a string: {}", text)))?;
        return Ok(MessageContent::text(text));
    }

    if let Some(tool_use) = block.get("toolUse") {
        let tool_use: NovaToolUse = serde_json::from_value(tool_use.clone())?;
        return Ok(MessageContent::ToolUse(ToolUse {
            id: tool_use.tool_use_id,
            name: tool_use.name,
            input: tool_use.input,
        }));
    }

    let description = match block.as_object() {
        Some(object) => {
            let keys: Vec<&str> = object.keys().map(String::as_str).collect();
            format!("block with keys [{}]", keys.join(", "))
        }
        None => format!("non-object block {}", block),
    };
    Err(NovaError::UnrecognizedContent(description))
}

/// Convert a raw nova `InvokeModel` response body to the anthropic message shape
pub fn nova_response_to_message(
    body: &[u8],
    request_id: &str,
    model: &str,
) -> NovaResult<MessageResponse> {
    let response: Value = serde_json::from_slice(body)?;

    let output = response
        .get("output")
        .ok_or_else(|| NovaError::MissingField("output".to_string()))?;

    let blocks = output
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            NovaError::MalformedMessage("output.message.content is missing or not a list".into())
        })?;

    let content = blocks
        .iter()
        .map(content_from_nova)
        .collect::<NovaResult<Vec<_>>>()?;

    let usage = response
        .get("usage")
        .ok_or_else(|| NovaError::MalformedMessage("usage is missing".into()))?;
    let usage: NovaUsage = serde_json::from_value(usage.clone())?;

    let stop_reason = response
        .get("stopReason")
        .and_then(Value::as_str)
        .map(String::from);

    Ok(MessageResponse {
        id: request_id.to_string(),
        kind: "message".to_string(),
        role: Role::Assistant,
        model: model.to_string(),
        content,
        stop_reason,
        usage: Usage::new(usage.input_tokens, usage.output_tokens),
    })
}
