// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::modules::list_public_modules,
        crate::presentation::http::controllers::modules::get_module_by_identifier,
        crate::presentation::http::controllers::modules::list_admin_modules,
        crate::presentation::http::controllers::modules::create_module,
        crate::presentation::http::controllers::modules::update_module,
        crate::presentation::http::controllers::modules::delete_module,
        crate::presentation::http::controllers::modules::set_publish_state,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::delete_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::controllers::modules::CreateModuleRequest,
            crate::presentation::http::controllers::modules::UpdateModuleRequest,
            crate::presentation::http::controllers::modules::PublishRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::application::dto::ModuleEntryDto,
            crate::application::dto::CustomFieldDto,
            crate::application::dto::CategoryDto
        )
    ),
    tags(
        (name = "Modules", description = "Public content module endpoints"),
        (name = "Categories", description = "Public category endpoints"),
        (name = "Admin", description = "Back-office CRUD endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Compass API",
        description = "Multi-vertical content back-office",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
