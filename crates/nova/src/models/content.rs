use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

impl TextContent {
    pub fn new<S: Into<String>>(text: S) -> Self {
        TextContent { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(rename = "type", default = "default_source_type")]
    pub source_type: String,
    pub media_type: String,
    /// Base64 encoded image bytes
    pub data: String,
}

fn default_source_type() -> String {
    "base64".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub source: ImageSource,
}

impl ImageContent {
    pub fn new<S: Into<String>, T: Into<String>>(data: S, media_type: T) -> Self {
        ImageContent {
            source: ImageSource {
                source_type: default_source_type(),
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A single block inside a tool result
pub enum ToolResultBlock {
    Text(TextContent),
    Image(ImageContent),
    /// Any block type nova cannot carry inside a tool result. These are dropped on conversion.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Tool results carry either a bare string or a list of blocks
pub enum ToolResultContent {
    Text(String),
    Blocks(Vec<ToolResultBlock>),
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Blocks(Vec::new())
    }
}

impl From<&str> for ToolResultContent {
    fn from(text: &str) -> Self {
        ToolResultContent::Text(text.to_string())
    }
}

impl From<String> for ToolResultContent {
    fn from(text: String) -> Self {
        ToolResultContent::Text(text)
    }
}

impl From<Vec<ToolResultBlock>> for ToolResultContent {
    fn from(blocks: Vec<ToolResultBlock>) -> Self {
        ToolResultContent::Blocks(blocks)
    }
}
