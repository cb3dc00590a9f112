// src/handlers/documents.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::document::Document};

// O upload em si é delegado ao object storage (URL assinada);
// aqui só registramos a referência.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub client_id: Option<Uuid>,

    #[validate(length(min = 1, message = "O título é obrigatório"))]
    #[schema(example = "Contrato de prestação de serviços")]
    pub title: String,

    #[schema(example = "contratos")]
    pub category: Option<String>,

    #[validate(url(message = "URL inválida"))]
    #[schema(example = "https://storage.example.com/docs/abc123.pdf")]
    pub file_url: Option<String>,
}

// GET /api/documents
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "Documentos",
    responses(
        (status = 200, description = "Lista de documentos", body = Vec<Document>)
    )
)]
pub async fn list_documents(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let documents = app_state.document_service.list().await?;

    Ok((StatusCode::OK, Json(documents)))
}

// POST /api/documents
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "Documentos",
    request_body = DocumentPayload,
    responses(
        (status = 201, description = "Documento registrado", body = Document),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_document(
    State(app_state): State<AppState>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let document = app_state
        .document_service
        .create(
            payload.client_id,
            &payload.title,
            payload.category.as_deref(),
            payload.file_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}

// GET /api/documents/{id}
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = "Documentos",
    params(
        ("id" = Uuid, Path, description = "ID do documento")
    ),
    responses(
        (status = 200, description = "Documento", body = Document),
        (status = 404, description = "Documento não encontrado")
    )
)]
pub async fn get_document(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let document = app_state.document_service.get(id).await?;

    Ok((StatusCode::OK, Json(document)))
}

// PUT /api/documents/{id}
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = "Documentos",
    request_body = DocumentPayload,
    params(
        ("id" = Uuid, Path, description = "ID do documento")
    ),
    responses(
        (status = 200, description = "Documento atualizado", body = Document),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Documento não encontrado")
    )
)]
pub async fn update_document(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let document = app_state
        .document_service
        .update(
            id,
            payload.client_id,
            &payload.title,
            payload.category.as_deref(),
            payload.file_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(document)))
}

// DELETE /api/documents/{id}
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "Documentos",
    params(
        ("id" = Uuid, Path, description = "ID do documento")
    ),
    responses(
        (status = 204, description = "Documento excluído"),
        (status = 404, description = "Documento não encontrado")
    )
)]
pub async fn delete_document(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.document_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
