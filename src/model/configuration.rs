use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Configuration {
    pub jwt_secret: String,
    pub bot_user_name: String,
    pub bot_user_pass: String,
    pub discord_bot_token: String,
    pub server_bind_point: String,
    #[serde(default = "default_question_bank_url")]
    pub question_bank_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

pub fn default_question_bank_url() -> String {
    crate::shared::constants::DEFAULT_QUESTION_BANK_URL.to_string()
}

pub fn default_log_level() -> String {
    "INFO".to_string()
}
