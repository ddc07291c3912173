use anyhow::{Context, Result};
use indoc::indoc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;

use crate::errors::NovaResult;
use crate::models::tool::Tool;
use crate::prompt_template::load_prompt;

pub const NAME: &str = "computer";

pub const ACTIONS: [&str; 10] = [
    "key",
    "type",
    "mouse_move",
    "left_click",
    "left_click_drag",
    "right_click",
    "middle_click",
    "double_click",
    "screenshot",
    "cursor_position",
];

const DESCRIPTION_TEMPLATE: &str = indoc! {"
    Use a mouse and keyboard to interact with a computer, and take screenshots.
    - This is an interface to a desktop GUI. You do not have access to a terminal or applications menu. You must click on desktop icons to start applications.
    - Some applications may take time to start or process actions, so you may need to wait and take successive screenshots to see the results of your actions. E.g. if you click on Firefox and a window doesn't open, try taking another screenshot.
    - The screen's resolution is {{ display_width_px }}x{{ display_height_px }}.
    {% if display_number is defined %}- The display number is {{ display_number }}
    {% endif %}- Whenever you intend to move the cursor to click on an element like an icon, you should consult a screenshot to determine the coordinates of the element before moving the cursor.
    - If you tried clicking on a program or link but it failed to load, even after waiting, try adjusting your cursor position so that the tip of the cursor visually falls on the element that you want to click.
    - Make sure to click any buttons, links, icons, etc with the cursor tip in the center of the element. Don't click boxes on their edges unless asked.
    - When you do `left_click` or `type` action, please make sure you do `mouse_move` to correct coordinates first.
"};

const ACTION_DESCRIPTION: &str = indoc! {r#"
    The action to perform. The available actions are:
    * `key`: Press a key or key-combination on the keyboard.
      - This supports xdotool's `key` syntax.
      - Examples: "a", "Return", "alt+Tab", "ctrl+s", "Up", "KP_0" (for the numpad 0 key).
    * `type`: Type a string of text on the keyboard.
    * `cursor_position`: Get the current (x, y) pixel coordinate of the cursor on the screen.
    * `mouse_move`: Move the cursor to a specified (x, y) pixel coordinate on the screen.
    * `left_click`: Click the left mouse button.
    * `left_click_drag`: Click and drag the cursor to a specified (x, y) pixel coordinate on the screen.
    * `right_click`: Click the right mouse button.
    * `middle_click`: Click the middle mouse button.
    * `double_click`: Double-click the left mouse button.
    * `screenshot`: Take a screenshot of the screen."#};

/// Geometry of the display the computer tool drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub width_px: u32,
    pub height_px: u32,
    /// X11 display number, e.g. 1 for `:1`
    #[serde(default)]
    pub display_number: Option<u32>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width_px: 1024,
            height_px: 768,
            display_number: None,
        }
    }
}

impl DisplaySettings {
    /// Read `WIDTH`, `HEIGHT` and `DISPLAY_NUM`, falling back to the defaults for unset values
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            width_px: parse_env("WIDTH")?.unwrap_or(defaults.width_px),
            height_px: parse_env("HEIGHT")?.unwrap_or(defaults.height_px),
            display_number: parse_env("DISPLAY_NUM")?,
        })
    }
}

fn parse_env(key: &str) -> Result<Option<u32>> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Environment variable '{}' must be a number", key)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[derive(Serialize)]
struct DescriptionContext {
    display_width_px: u32,
    display_height_px: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_number: Option<u32>,
}

/// Usage instructions with the display geometry filled in
pub fn description(display: &DisplaySettings) -> NovaResult<String> {
    let context = DescriptionContext {
        display_width_px: display.width_px,
        display_height_px: display.height_px,
        display_number: display.display_number,
    };
    load_prompt(DESCRIPTION_TEMPLATE, &context)
}

pub fn input_schema() -> Value {
    json!({
        "properties": {
            "action": {
                "description": ACTION_DESCRIPTION,
                "enum": ACTIONS,
                "type": "string",
            },
            "coordinate": {
                "description": "(x, y): This represents the center of the object. The x (pixels from the left edge) and y (pixels from the top edge) coordinates to move the mouse to. Required only by `action=mouse_move` and `action=left_click_drag`.",
                "type": "array",
            },
            "text": {
                "description": "Required only by `action=type` and `action=key`.",
                "type": "string",
            },
        },
        "required": ["action"],
        "type": "object",
    })
}

pub fn tool(display: &DisplaySettings) -> NovaResult<Tool> {
    Ok(Tool::new(NAME, description(display)?, input_schema()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_description_interpolates_display() {
        let display = DisplaySettings {
            width_px: 1280,
            height_px: 800,
            display_number: Some(1),
        };
        let description = description(&display).unwrap();

        assert!(description.contains("- The screen's resolution is 1280x800.\n"));
        assert!(description.contains("- The display number is 1\n- Whenever you intend"));
        assert!(!description.contains("{{"));
    }

    #[test]
    fn test_description_without_display_number() {
        let description = description(&DisplaySettings::default()).unwrap();

        assert!(description.contains("resolution is 1024x768."));
        assert!(!description.contains("display number"));
        assert!(description.contains("1024x768.\n- Whenever you intend"));
    }

    #[test]
    fn test_display_number_zero_is_rendered() {
        let display = DisplaySettings {
            display_number: Some(0),
            ..DisplaySettings::default()
        };
        assert!(description(&display)
            .unwrap()
            .contains("The display number is 0"));
    }

    #[test]
    fn test_input_schema_actions() {
        let schema = input_schema();
        assert_eq!(schema["required"], json!(["action"]));
        assert_eq!(schema["properties"]["action"]["enum"].as_array().unwrap().len(), 10);
        assert!(schema["properties"]["action"]["description"]
            .as_str()
            .unwrap()
            .starts_with("The action to perform."));
    }

    #[test]
    #[serial]
    fn test_display_settings_from_env() {
        env::set_var("WIDTH", "1920");
        env::set_var("HEIGHT", "1080");
        env::set_var("DISPLAY_NUM", "2");

        let display = DisplaySettings::from_env().unwrap();
        assert_eq!(
            display,
            DisplaySettings {
                width_px: 1920,
                height_px: 1080,
                display_number: Some(2),
            }
        );

        env::set_var("WIDTH", "wide");
        let err = DisplaySettings::from_env().unwrap_err();
        assert!(err.to_string().contains("WIDTH"));

        env::remove_var("WIDTH");
        env::remove_var("HEIGHT");
        env::remove_var("DISPLAY_NUM");
    }
}
