use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_result::{create_error, Result};

/// # Delete Report
///
/// Delete a report along with any matches referencing it.
#[utoipa::path(
    delete,
    path = "/reports/{target}",
    tag = "Reports",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Report Id")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 403, description = "Not the reporter", body = lostfound_result::Error),
        (status = 404, description = "Unknown report", body = lostfound_result::Error)
    )
)]
pub async fn delete(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
) -> Result<StatusCode> {
    let report = Reference::from_unchecked(&target).as_report(&db).await?;
    if !report.can_manage(&user) {
        return Err(create_error!(NotOwner));
    }

    report.delete(&db).await?;
    Ok(StatusCode::NO_CONTENT)
}
