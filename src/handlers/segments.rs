// src/handlers/segments.rs

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

use crate::{common::error::AppError, config::AppState, models::marketing::CustomerSegment};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Indústria - Grande porte")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "faturamento > 10M, setor industrial")]
    pub criteria: Option<String>,
}

// GET /api/segments
#[utoipa::path(
    get,
    path = "/api/segments",
    tag = "Segmentos",
    responses(
        (status = 200, description = "Lista de segmentos", body = Vec<CustomerSegment>)
    )
)]
pub async fn list_segments(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let segments = app_state.marketing_service.list_segments().await?;

    Ok((StatusCode::OK, Json(segments)))
}

// POST /api/segments
#[utoipa::path(
    post,
    path = "/api/segments",
    tag = "Segmentos",
    request_body = SegmentPayload,
    responses(
        (status = 201, description = "Segmento criado", body = CustomerSegment),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_segment(
    State(app_state): State<AppState>,
    Json(payload): Json<SegmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let segment = app_state
        .marketing_service
        .create_segment(
            &payload.name,
            payload.description.as_deref(),
            payload.criteria.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(segment)))
}

// GET /api/segments/{id}
#[utoipa::path(
    get,
    path = "/api/segments/{id}",
    tag = "Segmentos",
    params(
        ("id" = Uuid, Path, description = "ID do segmento")
    ),
    responses(
        (status = 200, description = "Segmento", body = CustomerSegment),
        (status = 404, description = "Segmento não encontrado")
    )
)]
pub async fn get_segment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let segment = app_state.marketing_service.get_segment(id).await?;

    Ok((StatusCode::OK, Json(segment)))
}

// PUT /api/segments/{id}
#[utoipa::path(
    put,
    path = "/api/segments/{id}",
    tag = "Segmentos",
    request_body = SegmentPayload,
    params(
        ("id" = Uuid, Path, description = "ID do segmento")
    ),
    responses(
        (status = 200, description = "Segmento atualizado", body = CustomerSegment),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Segmento não encontrado")
    )
)]
pub async fn update_segment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SegmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let segment = app_state
        .marketing_service
        .update_segment(
            id,
            &payload.name,
            payload.description.as_deref(),
            payload.criteria.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(segment)))
}

// DELETE /api/segments/{id}
#[utoipa::path(
    delete,
    path = "/api/segments/{id}",
    tag = "Segmentos",
    params(
        ("id" = Uuid, Path, description = "ID do segmento")
    ),
    responses(
        (status = 204, description = "Segmento excluído"),
        (status = 404, description = "Segmento não encontrado"),
        (status = 409, description = "Segmento possui campanhas vinculadas")
    )
)]
pub async fn delete_segment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.marketing_service.delete_segment(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
