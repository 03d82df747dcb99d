use axum::{
    extract::{Path, State},
    Json,
};
use lostfound_database::{util::reference::Reference, Database, User};
use lostfound_models::v0;
use lostfound_result::{create_error, Result};

use crate::util::json::Validate;

/// # Edit Report
///
/// Edit a report you submitted. Matching is not run again.
#[utoipa::path(
    patch,
    path = "/reports/{target}",
    tag = "Reports",
    security(("User Token" = [])),
    params(("target" = String, Path, description = "Report Id")),
    request_body = v0::DataEditReport,
    responses(
        (status = 200, description = "Updated report", body = v0::Report),
        (status = 403, description = "Not the reporter", body = lostfound_result::Error),
        (status = 404, description = "Unknown report", body = lostfound_result::Error)
    )
)]
pub async fn edit(
    State(db): State<Database>,
    user: User,
    Path(target): Path<String>,
    Validate(data): Validate<v0::DataEditReport>,
) -> Result<Json<v0::Report>> {
    let mut report = Reference::from_unchecked(&target).as_report(&db).await?;
    if !report.can_manage(&user) {
        return Err(create_error!(NotOwner));
    }

    report.update(&db, data.into()).await?;
    Ok(Json(report.into()))
}
