use crate::model::app_state::AppState;
use crate::model::claim::Claim;
use crate::model::errors::{ApiError, ServerError};
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::{async_trait, Json, RequestPartsExt};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use jsonwebtoken::{decode, DecodingKey, Validation};
use time::OffsetDateTime;

#[async_trait]
impl<S> FromRequestParts<S> for Claim
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_e| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ServerError::with_message("Authorization header not found")),
                )
            })?;

        let state = AppState::from_ref(state);
        let secret = &state.jwt_secret;

        // Expiry is checked below so that an expired token gets its own message.
        let mut validation = Validation::default();
        validation.validate_exp = false;

        if let Ok(token) = decode::<Claim>(
            bearer.token(),
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        ) {
            tracing::debug!("{:?}", &token.claims);
            match OffsetDateTime::from_unix_timestamp(token.claims.exp as i64) {
                Ok(expiry) => {
                    if expiry > OffsetDateTime::now_utc() {
                        Ok(token.claims)
                    } else {
                        Err((
                            StatusCode::UNAUTHORIZED,
                            Json(ServerError::with_message("Token expired")),
                        ))
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to retrieve token expiration data from timestamp: {}",
                        e
                    );
                    Err((
                        StatusCode::BAD_REQUEST,
                        Json(ServerError::with_message(
                            "Failed to retrieve token expiration data from timestamp.",
                        )),
                    ))
                }
            }
        } else {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ServerError::with_message("Unauthorized")),
            ))
        }
    }
}
