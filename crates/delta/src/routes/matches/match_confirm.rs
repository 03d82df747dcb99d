use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

/// # Confirm Match
///
/// Agree that both reports describe the same item.
#[utoipa::path(
    post,
    path = "/matches/{target}/confirm",
    tag = "Matches",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Match Id")),
    responses(
        (status = 200, description = "Match confirmed", body = v0::MatchStatusResponse),
        (status = 403, description = "Neither a reporter on this match nor an admin", body = lostfound_result::Error),
        (status = 404, description = "Unknown match", body = lostfound_result::Error),
        (status = 409, description = "Match already resolved", body = lostfound_result::Error)
    )
)]
pub async fn confirm(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<Json<v0::MatchStatusResponse>> {
    let mut r#match = Reference::from_unchecked(&target).as_match(&db).await?;
    if !user.privileged() && !r#match.is_participant(&db, &user).await? {
        return Err(create_error!(NotPrivileged));
    }

    r#match.confirm(&db).await?;

    Ok(Json(v0::MatchStatusResponse {
        status: r#match.status,
    }))
}
