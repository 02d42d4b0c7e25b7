use crate::model::app_state::AppState;
use axum::routing::{get, post};
use axum::Router;

pub use command_controller::*;
pub use login_controller::*;

pub mod command;
mod command_controller;
mod login_controller;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/command", get(get_commands).post(dispatch_command))
        .with_state(state)
}
