// src/handlers/certifications.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::certification::Certification};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "ISO 9001")]
    pub name: String,

    #[schema(example = "Bureau Veritas")]
    pub issuer: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-03-15")]
    pub issue_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2027-03-15")]
    pub expiry_date: Option<NaiveDate>,

    pub description: Option<String>,
}

// GET /api/certifications
#[utoipa::path(
    get,
    path = "/api/certifications",
    tag = "Certificações",
    responses(
        (status = 200, description = "Lista de certificações", body = Vec<Certification>)
    )
)]
pub async fn list_certifications(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let certifications = app_state.certification_service.list().await?;

    Ok((StatusCode::OK, Json(certifications)))
}

// POST /api/certifications
#[utoipa::path(
    post,
    path = "/api/certifications",
    tag = "Certificações",
    request_body = CertificationPayload,
    responses(
        (status = 201, description = "Certificação criada", body = Certification),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_certification(
    State(app_state): State<AppState>,
    Json(payload): Json<CertificationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let certification = app_state
        .certification_service
        .create(
            &payload.name,
            payload.issuer.as_deref(),
            payload.issue_date,
            payload.expiry_date,
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(certification)))
}

// GET /api/certifications/{id}
#[utoipa::path(
    get,
    path = "/api/certifications/{id}",
    tag = "Certificações",
    params(
        ("id" = Uuid, Path, description = "ID da certificação")
    ),
    responses(
        (status = 200, description = "Certificação", body = Certification),
        (status = 404, description = "Certificação não encontrada")
    )
)]
pub async fn get_certification(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let certification = app_state.certification_service.get(id).await?;

    Ok((StatusCode::OK, Json(certification)))
}

// PUT /api/certifications/{id}
#[utoipa::path(
    put,
    path = "/api/certifications/{id}",
    tag = "Certificações",
    request_body = CertificationPayload,
    params(
        ("id" = Uuid, Path, description = "ID da certificação")
    ),
    responses(
        (status = 200, description = "Certificação atualizada", body = Certification),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Certificação não encontrada")
    )
)]
pub async fn update_certification(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CertificationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let certification = app_state
        .certification_service
        .update(
            id,
            &payload.name,
            payload.issuer.as_deref(),
            payload.issue_date,
            payload.expiry_date,
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(certification)))
}

// DELETE /api/certifications/{id}
#[utoipa::path(
    delete,
    path = "/api/certifications/{id}",
    tag = "Certificações",
    params(
        ("id" = Uuid, Path, description = "ID da certificação")
    ),
    responses(
        (status = 204, description = "Certificação excluída"),
        (status = 404, description = "Certificação não encontrada")
    )
)]
pub async fn delete_certification(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.certification_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
