use axum::{
    routing::{get, post},
    Router,
};
use lostfound_database::Database;

pub mod report_create;
pub mod report_delete;
pub mod report_edit;
pub mod report_fetch;
pub mod report_list;
pub mod report_matches;

pub fn router() -> Router<Database> {
    Router::new()
        .route("/", post(report_create::create).get(report_list::list))
        .route(
            "/:target",
            get(report_fetch::fetch)
                .patch(report_edit::edit)
                .delete(report_delete::delete),
        )
        .route("/:target/matches", get(report_matches::matches))
}
