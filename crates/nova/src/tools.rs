//! Descriptions and input schemas for the computer use tools.
//!
//! These are forwarded to the model verbatim; nothing here executes an action.
pub mod bash;
pub mod computer;
pub mod text_editor;

pub use computer::DisplaySettings;

use crate::errors::NovaResult;
use crate::models::tool::Tool;

/// The computer, text editor and bash tools, in that order
pub fn default_tools(display: &DisplaySettings) -> NovaResult<Vec<Tool>> {
    Ok(vec![
        computer::tool(display)?,
        text_editor::tool(),
        bash::tool(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::utils::tools_to_nova_spec;

    #[test]
    fn test_default_tools() {
        let tools = default_tools(&DisplaySettings::default()).unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["computer", "str_replace_editor", "bash"]);

        for tool in &tools {
            assert_eq!(tool.input_schema["type"], "object");
            assert!(tool.input_schema["required"].is_array());
        }
    }

    #[test]
    fn test_default_tools_convert_to_nova() {
        let tools = default_tools(&DisplaySettings::default()).unwrap();
        let spec = tools_to_nova_spec(&tools).unwrap();

        assert_eq!(spec.len(), 3);
        assert_eq!(spec[2]["toolSpec"]["name"], "bash");
        assert_eq!(spec[2]["toolSpec"]["inputSchema"]["json"], bash::input_schema());
    }
}
