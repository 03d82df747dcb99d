use axum::{
    routing::{patch, post},
    Router,
};
use lostfound_database::Database;

pub mod category_create;
pub mod category_delete;
pub mod category_edit;
pub mod category_list;

pub fn router() -> Router<Database> {
    Router::new()
        .route(
            "/",
            post(category_create::create).get(category_list::list),
        )
        .route(
            "/:target",
            patch(category_edit::edit).delete(category_delete::delete),
        )
}
