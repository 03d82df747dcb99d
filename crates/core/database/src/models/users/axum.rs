use axum::{extract::FromRequestParts, http::request::Parts};

use lostfound_result::{create_error, Error, Result};

use crate::{Database, User};

#[async_trait::async_trait]
impl FromRequestParts<Database> for User {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, db: &Database) -> Result<User> {
        if let Some(Ok(session_token)) = parts.headers.get("x-session-token").map(|v| v.to_str())
        {
            db.fetch_user_by_token(session_token).await
        } else {
            Err(create_error!(NotAuthenticated))
        }
    }
}
