use crate::model::app_state::AppState;
use crate::model::claim::Claim;
use crate::model::errors::ServerError;
use crate::model::login_info::{LoginCredential, LoginResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsonwebtoken::{encode, EncodingKey, Header};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

pub async fn login(State(state): State<AppState>, Json(request): Json<LoginCredential>) -> Response {
    if state.bot_user_name != request.user_name || state.bot_user_pass != request.password {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ServerError::with_message("Invalid credentials.")),
        )
            .into_response();
    }

    let expiry = OffsetDateTime::now_utc() + Duration::hours(1);
    match generate_jwt_token(&state.jwt_secret, &state.bot_user_name, expiry) {
        Ok(token) => (
            StatusCode::OK,
            Json(LoginResponse {
                token,
                expiry: expiry.format(&Rfc3339).unwrap_or_default(),
            }),
        )
            .into_response(),
        Err(e) => {
            let error_message = format!("Failed to encode JWT token: {}", e);
            tracing::error!("{}", &error_message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerError::with_message(error_message)),
            )
                .into_response()
        }
    }
}

pub fn generate_jwt_token(
    secret: &str,
    user_name: &str,
    expiry: OffsetDateTime,
) -> anyhow::Result<String> {
    let claim = Claim {
        sub: user_name.into(),
        exp: expiry.unix_timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}
