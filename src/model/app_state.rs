use crate::shared::discord::MessageSender;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub question_bank_url: String,
    pub jwt_secret: String,
    pub bot_user_name: String,
    pub bot_user_pass: String,
    pub sender: Arc<dyn MessageSender>,
}
