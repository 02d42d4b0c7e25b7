use crate::controller::command::quiz;
use crate::model::app_state::AppState;
use crate::model::claim::Claim;
use crate::model::command::{CommandInfo, CommandOutcome, CommandRequest, CommandResponse};
use crate::model::errors::ServerError;
use crate::model::quiz::{QuizOutcome, USAGE_MESSAGE};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn get_commands(_claim: Claim) -> Response {
    let commands = vec![CommandInfo {
        name: quiz::NAME.to_string(),
        description: quiz::DESCRIPTION.to_string(),
        args_required: true,
        usage: USAGE_MESSAGE.clone(),
    }];
    (StatusCode::OK, Json(commands)).into_response()
}

pub async fn dispatch_command(
    _claim: Claim,
    State(state): State<AppState>,
    Json(payload): Json<CommandRequest>,
) -> Response {
    match payload {
        CommandRequest::Quiz { channel_id, args } => {
            if channel_id.is_empty() {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ServerError::with_message("Channel ID cannot be empty.")),
                )
                    .into_response();
            }

            match quiz::execute(&state, &channel_id, &args).await {
                Ok(outcome) => (StatusCode::OK, Json(CommandResponse::from(outcome))).into_response(),
                Err(e) => {
                    tracing::error!("Failed to execute the quiz command: {}", e);
                    e.into_response()
                }
            }
        }
    }
}

impl From<QuizOutcome> for CommandResponse {
    fn from(value: QuizOutcome) -> Self {
        match value {
            QuizOutcome::InvalidArguments(e) => CommandResponse {
                outcome: CommandOutcome::InvalidArguments,
                messages: vec![quiz::error_reply(e)],
            },
            QuizOutcome::NoQuestions => CommandResponse {
                outcome: CommandOutcome::NoQuestions,
                messages: vec![quiz::NO_QUESTIONS_MESSAGE.to_string()],
            },
            QuizOutcome::Questions(messages) => CommandResponse {
                outcome: CommandOutcome::Questions,
                messages,
            },
        }
    }
}
