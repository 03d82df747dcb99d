use axum::{routing::get, Router};
use lostfound_database::Database;

pub mod categories;
pub mod dashboard;
pub mod matches;
pub mod notifications;
pub mod reports;
pub mod root;

pub fn router() -> Router<Database> {
    Router::new()
        .route("/", get(root::root))
        .nest("/reports", reports::router())
        .nest("/matches", matches::router())
        .nest("/notifications", notifications::router())
        .nest("/categories", categories::router())
        .nest("/dashboard", dashboard::router())
}
