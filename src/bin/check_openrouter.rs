//! Sends one message to OpenRouter and prints what comes back.

use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

use khujai_web::config::{Config, ConfigError};
use khujai_web::model::OpenRouterClient;

const PROBE_MODEL: &str = "gpt-3.5-turbo";
const PROBE_PROMPT: &str = "สวัสดี ทดสอบ";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::Missing(name)) => {
            eprintln!("❌ {} is not set, add it to the environment or .env", name);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("invalid configuration"),
    };

    let client = OpenRouterClient::new(config.openrouter_api_key, config.openrouter_base_url);

    println!("⏳ Calling the completion API ...");
    info!("Probing with model {}", PROBE_MODEL);
    let (status, body) = client
        .probe(PROBE_MODEL, PROBE_PROMPT)
        .await
        .context("request to OpenRouter failed")?;
    println!("HTTP Status: {}", status);

    match serde_json::from_str::<Value>(&body) {
        Ok(json) => println!("Response JSON: {}", serde_json::to_string_pretty(&json)?),
        Err(e) => {
            println!("⚠️ Could not read JSON: {}", e);
            println!("Raw Response: {}", body);
        }
    }
    Ok(())
}
