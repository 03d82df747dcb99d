use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

/// # Fetch Match
///
/// Fetch a match together with both of its reports.
#[utoipa::path(
    get,
    path = "/matches/{target}",
    tag = "Matches",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Match Id")),
    responses(
        (status = 200, description = "Match detail", body = v0::MatchDetail),
        (status = 403, description = "Not a participant", body = lostfound_result::Error),
        (status = 404, description = "Unknown match", body = lostfound_result::Error)
    )
)]
pub async fn fetch(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<Json<v0::MatchDetail>> {
    let r#match = Reference::from_unchecked(&target).as_match(&db).await?;
    let (lost, found) = r#match.fetch_reports(&db).await?;

    if !user.privileged() && lost.reporter_id != user.id && found.reporter_id != user.id {
        return Err(create_error!(NotPrivileged));
    }

    Ok(Json(r#match.into_detail(lost, found)))
}
