use crate::model::configuration::{default_log_level, default_question_bank_url, Configuration};
use crate::shared::constants::CONFIG_DIRECTORY;
use once_cell::sync::Lazy;

pub static CONFIGURATION: Lazy<Configuration> =
    Lazy::new(|| initialize().expect("Failed to initialize configuration."));

const CONFIGURATION_FILE_NAME: &str = "/config.toml";

fn initialize() -> anyhow::Result<Configuration> {
    if !std::path::Path::new(CONFIG_DIRECTORY).exists() {
        std::fs::create_dir(CONFIG_DIRECTORY)?;
    }

    let configuration_path = String::from(CONFIG_DIRECTORY) + CONFIGURATION_FILE_NAME;
    if !std::path::Path::new(&configuration_path).exists() {
        // Read from environment variables
        let configuration = Configuration {
            jwt_secret: std::env::var("JWT_SECRET")?,
            bot_user_name: std::env::var("BOT_USERNAME")?,
            bot_user_pass: std::env::var("BOT_USERPASS")?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")?,
            server_bind_point: std::env::var("SERVER_BIND_POINT")?,
            question_bank_url: std::env::var("QUESTION_BANK_URL")
                .unwrap_or_else(|_| default_question_bank_url()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
        };
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        let deserialized_toml = toml::from_str::<Configuration>(&toml)?;
        Ok(deserialized_toml)
    }
}
