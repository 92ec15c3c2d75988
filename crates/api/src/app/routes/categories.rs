use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    routing::post,
};

use catalog_category::{DeleteCategoryInput, GetCategoryInput};
use catalog_core::UseCase;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/:id",
            get(get_category).patch(update_category).delete(delete_category),
        )
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    match services.create_category.execute(body.into()).await {
        Ok(output) => (StatusCode::CREATED, Json(output)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_categories.execute(()).await {
        Ok(outputs) => Json(outputs).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.get_category.execute(GetCategoryInput { id }).await {
        Ok(output) => Json(output).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCategoryRequest>,
) -> axum::response::Response {
    match services.update_category.execute(body.into_input(id)).await {
        Ok(output) => Json(output).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.delete_category.execute(DeleteCategoryInput { id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
