use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

/// # Fetch Report Matches
///
/// List matches referencing a report you submitted.
#[utoipa::path(
    get,
    path = "/reports/{target}/matches",
    tag = "Reports",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Report Id")),
    responses(
        (status = 200, description = "Matches referencing the report", body = Vec<v0::Match>),
        (status = 403, description = "Not the reporter", body = lostfound_result::Error)
    )
)]
pub async fn matches(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<Json<Vec<v0::Match>>> {
    let report = Reference::from_unchecked(&target).as_report(&db).await?;
    if !report.can_manage(&user) {
        return Err(create_error!(NotOwner));
    }

    let matches = db.fetch_matches_by_reports(&[report.id]).await?;
    Ok(Json(matches.into_iter().map(Into::into).collect()))
}
