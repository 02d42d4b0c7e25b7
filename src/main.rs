use crate::controller::create_router;
use crate::model::app_state::AppState;
use crate::shared::configuration::CONFIGURATION;
use crate::shared::discord::DiscordSender;
use crate::shared::HTTP_CLIENT;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

mod controller;
mod middleware;
mod model;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = Level::from_str(&CONFIGURATION.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let state = AppState {
        http_client: HTTP_CLIENT.clone(),
        question_bank_url: CONFIGURATION.question_bank_url.clone(),
        jwt_secret: CONFIGURATION.jwt_secret.clone(),
        bot_user_name: CONFIGURATION.bot_user_name.clone(),
        bot_user_pass: CONFIGURATION.bot_user_pass.clone(),
        sender: Arc::new(DiscordSender::new(
            HTTP_CLIENT.clone(),
            CONFIGURATION.discord_bot_token.clone(),
        )),
    };

    let listener = tokio::net::TcpListener::bind(&CONFIGURATION.server_bind_point).await?;
    tracing::info!("Listening on {}.", &CONFIGURATION.server_bind_point);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
