mod configuration;
mod error;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use nova::models::content::TextContent;
use nova::models::message::{Message, MessageContent, MessageResponse};
use nova::providers::base::Provider;
use nova::providers::bedrock::BedrockProvider;
use nova::providers::utils::tools_to_nova_spec;
use nova::tools::default_tools;
use tracing_subscriber::EnvFilter;

use crate::configuration::Settings;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant operating a Linux desktop.";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a single prompt to the model and print its reply
    Run {
        /// The user prompt
        prompt: String,

        /// System prompt sent with the request
        #[arg(short, long, default_value = DEFAULT_SYSTEM_PROMPT)]
        system: String,

        /// Overrides NOVA_PROVIDER__MAX_TOKENS
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Send the request without the computer, editor and bash tools
        #[arg(long)]
        no_tools: bool,

        /// Print the reply as anthropic message JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the nova tool configuration for the default tools
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new()?;
    let display = settings.display.into_display()?;

    match cli.command {
        Command::Tools => {
            let tools = default_tools(&display)?;
            let spec = tools_to_nova_spec(&tools)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "tools": spec }))?
            );
        }
        Command::Run {
            prompt,
            system,
            max_tokens,
            no_tools,
            json,
        } => {
            let max_tokens = max_tokens.unwrap_or(settings.provider.max_tokens);
            let config = settings.provider.into_config()?;
            let provider = BedrockProvider::new(config).await;

            let tools = if no_tools {
                Vec::new()
            } else {
                default_tools(&display)?
            };
            let messages = vec![Message::user().with_text(prompt)];

            let response = provider
                .invoke(max_tokens, &messages, &TextContent::new(system), &tools)
                .await
                .context("Failed to invoke nova model")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                render_response(&response);
            }
        }
    }

    Ok(())
}

fn render_response(response: &MessageResponse) {
    for content in &response.content {
        match content {
            MessageContent::Text(text) => println!("{}", text.text),
            MessageContent::ToolUse(tool_use) => println!(
                "{} {} {}",
                style("tool_use").cyan().bold(),
                style(&tool_use.name).cyan(),
                style(&tool_use.input).dim()
            ),
            other => println!("{}", style(format!("{:?}", other)).dim()),
        }
    }
    println!(
        "{}",
        style(format!(
            "stop_reason: {} | input_tokens: {} | output_tokens: {}",
            response.stop_reason.as_deref().unwrap_or("none"),
            response.usage.input_tokens,
            response.usage.output_tokens
        ))
        .dim()
    );
}
