// src/presentation/http/controllers/modules.rs
use crate::application::{
    commands::modules::{
        CreateModuleCommand, DeleteModuleCommand, SetPublishStateCommand, UpdateModuleCommand,
    },
    dto::{CustomFieldDto, ModuleEntryDto},
    queries::modules::{GetModuleByIdentifierQuery, ListModulesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PublicListParams {
    /// Restrict to one category label.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminListParams {
    /// Content vertical.
    pub module_type: String,
    /// Omit for drafts and published alike.
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateModuleRequest {
    pub module_type: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldDto>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateModuleRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub custom_fields: Option<Vec<CustomFieldDto>>,
    pub highlights: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub gallery_images: Option<Vec<String>>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

/// Public listing: published entries only; the store itself has no notion of
/// who is asking, so the restriction is pinned here.
#[utoipa::path(
    get,
    path = "/api/v1/modules/{module_type}",
    params(("module_type" = String, Path, description = "Content vertical"), PublicListParams),
    responses(
        (status = 200, description = "Published entries for the vertical.", body = [ModuleEntryDto]),
        (status = 400, description = "Unknown vertical.")
    ),
    tag = "Modules"
)]
pub async fn list_public_modules(
    Extension(state): Extension<HttpState>,
    Path(module_type): Path<String>,
    Query(params): Query<PublicListParams>,
) -> HttpResult<Json<Vec<ModuleEntryDto>>> {
    state
        .services
        .module_queries
        .list_modules(ListModulesQuery {
            module_type,
            published: Some(true),
            category: params.category,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/modules/entry/{identifier}",
    params(("identifier" = String, Path, description = "Record id, slug, or stale hyphenated title")),
    responses(
        (status = 200, description = "The resolved entry.", body = ModuleEntryDto),
        (status = 404, description = "Nothing matched the identifier.")
    ),
    tag = "Modules"
)]
pub async fn get_module_by_identifier(
    Extension(state): Extension<HttpState>,
    Path(identifier): Path<String>,
) -> HttpResult<Json<ModuleEntryDto>> {
    state
        .services
        .module_queries
        .get_module_by_identifier(GetModuleByIdentifierQuery { identifier })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/modules",
    params(AdminListParams),
    responses((status = 200, description = "All entries for the vertical.", body = [ModuleEntryDto])),
    tag = "Admin"
)]
pub async fn list_admin_modules(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<Vec<ModuleEntryDto>>> {
    state
        .services
        .module_queries
        .list_modules(ListModulesQuery {
            module_type: params.module_type,
            published: params.published,
            category: params.category,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/modules",
    request_body = CreateModuleRequest,
    responses(
        (status = 200, description = "Created entry, slug derived when absent.", body = ModuleEntryDto),
        (status = 409, description = "Slug already in use (globally, across verticals).")
    ),
    tag = "Admin"
)]
pub async fn create_module(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateModuleRequest>,
) -> HttpResult<Json<ModuleEntryDto>> {
    let command = CreateModuleCommand {
        module_type: payload.module_type,
        title: payload.title,
        summary: payload.summary,
        description: payload.description,
        category: payload.category,
        custom_fields: payload.custom_fields,
        highlights: payload.highlights,
        cover_image: payload.cover_image,
        gallery_images: payload.gallery_images,
        slug: payload.slug,
        publish: payload.publish,
    };

    state
        .services
        .module_commands
        .create_module(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/modules/{id}",
    params(("id" = String, Path, description = "Record id")),
    request_body = UpdateModuleRequest,
    responses((status = 200, description = "Updated entry; slug is never regenerated.", body = ModuleEntryDto)),
    tag = "Admin"
)]
pub async fn update_module(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateModuleRequest>,
) -> HttpResult<Json<ModuleEntryDto>> {
    let command = UpdateModuleCommand {
        id,
        title: payload.title,
        summary: payload.summary,
        description: payload.description,
        category: payload.category,
        custom_fields: payload.custom_fields,
        highlights: payload.highlights,
        cover_image: payload.cover_image,
        gallery_images: payload.gallery_images,
        publish: payload.publish,
    };

    state
        .services
        .module_commands
        .update_module(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/modules/{id}",
    params(("id" = String, Path, description = "Record id")),
    responses((status = 200, description = "Entry deleted.")),
    tag = "Admin"
)]
pub async fn delete_module(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .module_commands
        .delete_module(DeleteModuleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/modules/{id}/publish",
    params(("id" = String, Path, description = "Record id")),
    request_body = PublishRequest,
    responses((status = 200, description = "Entry with its new visibility.", body = ModuleEntryDto)),
    tag = "Admin"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ModuleEntryDto>> {
    state
        .services
        .module_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}
