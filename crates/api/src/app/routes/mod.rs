use axum::Router;

pub mod categories;
pub mod system;

pub fn router() -> Router {
    Router::new().nest("/categories", categories::router())
}
