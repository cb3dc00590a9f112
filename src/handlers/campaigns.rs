// src/handlers/campaigns.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::marketing::MarketingCampaign};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    pub segment_id: Option<Uuid>,

    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Campanha Q4 - Indústria")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "email")]
    pub channel: Option<String>,

    #[schema(example = "ativa")]
    pub status: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-10-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2026-12-31")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = "5000.00")]
    pub budget: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCampaignsQuery {
    pub segment_id: Option<Uuid>,
}

// GET /api/campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns",
    tag = "Campanhas",
    params(
        ("segmentId" = Option<Uuid>, Query, description = "Filtra pelas campanhas de um segmento")
    ),
    responses(
        (status = 200, description = "Lista de campanhas", body = Vec<MarketingCampaign>)
    )
)]
pub async fn list_campaigns(
    State(app_state): State<AppState>,
    Query(query): Query<ListCampaignsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let campaigns = app_state
        .marketing_service
        .list_campaigns(query.segment_id)
        .await?;

    Ok((StatusCode::OK, Json(campaigns)))
}

// POST /api/campaigns
#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = "Campanhas",
    request_body = CampaignPayload,
    responses(
        (status = 201, description = "Campanha criada", body = MarketingCampaign),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Segmento não encontrado")
    )
)]
pub async fn create_campaign(
    State(app_state): State<AppState>,
    Json(payload): Json<CampaignPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let campaign = app_state
        .marketing_service
        .create_campaign(
            payload.segment_id,
            &payload.name,
            payload.description.as_deref(),
            payload.channel.as_deref(),
            payload.status.as_deref(),
            payload.start_date,
            payload.end_date,
            payload.budget,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(campaign)))
}

// GET /api/campaigns/{id}
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    tag = "Campanhas",
    params(
        ("id" = Uuid, Path, description = "ID da campanha")
    ),
    responses(
        (status = 200, description = "Campanha", body = MarketingCampaign),
        (status = 404, description = "Campanha não encontrada")
    )
)]
pub async fn get_campaign(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let campaign = app_state.marketing_service.get_campaign(id).await?;

    Ok((StatusCode::OK, Json(campaign)))
}

// PUT /api/campaigns/{id}
#[utoipa::path(
    put,
    path = "/api/campaigns/{id}",
    tag = "Campanhas",
    request_body = CampaignPayload,
    params(
        ("id" = Uuid, Path, description = "ID da campanha")
    ),
    responses(
        (status = 200, description = "Campanha atualizada", body = MarketingCampaign),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Campanha não encontrada")
    )
)]
pub async fn update_campaign(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CampaignPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let campaign = app_state
        .marketing_service
        .update_campaign(
            id,
            payload.segment_id,
            &payload.name,
            payload.description.as_deref(),
            payload.channel.as_deref(),
            payload.status.as_deref(),
            payload.start_date,
            payload.end_date,
            payload.budget,
        )
        .await?;

    Ok((StatusCode::OK, Json(campaign)))
}

// DELETE /api/campaigns/{id}
#[utoipa::path(
    delete,
    path = "/api/campaigns/{id}",
    tag = "Campanhas",
    params(
        ("id" = Uuid, Path, description = "ID da campanha")
    ),
    responses(
        (status = 204, description = "Campanha excluída"),
        (status = 404, description = "Campanha não encontrada")
    )
)]
pub async fn delete_campaign(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.marketing_service.delete_campaign(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
