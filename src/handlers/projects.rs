// src/handlers/projects.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::project::Project};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub client_id: Uuid,

    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Migração ERP")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "em_andamento")]
    pub status: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-07-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2026-12-20")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    pub client_id: Option<Uuid>,
}

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projetos",
    params(
        ("clientId" = Option<Uuid>, Query, description = "Filtra pelos projetos de um cliente")
    ),
    responses(
        (status = 200, description = "Lista de projetos", body = Vec<Project>)
    )
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let projects = app_state.project_service.list(query.client_id).await?;

    Ok((StatusCode::OK, Json(projects)))
}

// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projetos",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Projeto criado", body = Project),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn create_project(
    State(app_state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let project = app_state
        .project_service
        .create(
            payload.client_id,
            &payload.name,
            payload.description.as_deref(),
            payload.status.as_deref(),
            payload.start_date,
            payload.end_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

// GET /api/projects/{id}
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projetos",
    params(
        ("id" = Uuid, Path, description = "ID do projeto")
    ),
    responses(
        (status = 200, description = "Projeto", body = Project),
        (status = 404, description = "Projeto não encontrado")
    )
)]
pub async fn get_project(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let project = app_state.project_service.get(id).await?;

    Ok((StatusCode::OK, Json(project)))
}

// PUT /api/projects/{id}
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projetos",
    request_body = ProjectPayload,
    params(
        ("id" = Uuid, Path, description = "ID do projeto")
    ),
    responses(
        (status = 200, description = "Projeto atualizado", body = Project),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Projeto não encontrado")
    )
)]
pub async fn update_project(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let project = app_state
        .project_service
        .update(
            id,
            payload.client_id,
            &payload.name,
            payload.description.as_deref(),
            payload.status.as_deref(),
            payload.start_date,
            payload.end_date,
        )
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

// DELETE /api/projects/{id}
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projetos",
    params(
        ("id" = Uuid, Path, description = "ID do projeto")
    ),
    responses(
        (status = 204, description = "Projeto excluído"),
        (status = 404, description = "Projeto não encontrado")
    )
)]
pub async fn delete_project(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.project_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
