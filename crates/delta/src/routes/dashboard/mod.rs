use axum::{routing::get, Router};
use lostfound_database::Database;

pub mod dashboard_stats;

pub fn router() -> Router<Database> {
    Router::new().route("/stats", get(dashboard_stats::stats))
}
