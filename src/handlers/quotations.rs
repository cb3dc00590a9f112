// src/handlers/quotations.rs

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

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::invoices::LineItemPayload,
    models::billing::{DocumentStatus, Quotation, QuotationDetail},
    services::totals::LineItemInput,
};

// Mesma forma da fatura, com validade no lugar do vencimento.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotationPayload {
    #[validate(length(min = 1, message = "O número do orçamento é obrigatório"))]
    #[schema(example = "ORC-2026-0017")]
    pub quotation_number: String,

    pub client_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2026-08-01")]
    pub issue_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-09-01")]
    pub valid_until: NaiveDate,

    #[serde(default)]
    pub status: DocumentStatus,

    pub notes: Option<String>,

    #[validate(nested)]
    pub items: Vec<LineItemPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuotationsQuery {
    pub client_id: Option<Uuid>,
}

// GET /api/quotations
#[utoipa::path(
    get,
    path = "/api/quotations",
    tag = "Orçamentos",
    params(
        ("clientId" = Option<Uuid>, Query, description = "Filtra pelos orçamentos de um cliente")
    ),
    responses(
        (status = 200, description = "Lista de orçamentos", body = Vec<Quotation>)
    )
)]
pub async fn list_quotations(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuotationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let quotations = app_state
        .billing_service
        .list_quotations(query.client_id)
        .await?;

    Ok((StatusCode::OK, Json(quotations)))
}

// POST /api/quotations
#[utoipa::path(
    post,
    path = "/api/quotations",
    tag = "Orçamentos",
    request_body = QuotationPayload,
    responses(
        (status = 201, description = "Orçamento criado, com totais calculados", body = QuotationDetail),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado"),
        (status = 409, description = "Número de orçamento já existe")
    )
)]
pub async fn create_quotation(
    State(app_state): State<AppState>,
    Json(payload): Json<QuotationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let items: Vec<LineItemInput> = payload.items.into_iter().map(Into::into).collect();

    let detail = app_state
        .billing_service
        .create_quotation(
            &app_state.db_pool,
            &payload.quotation_number,
            payload.client_id,
            payload.issue_date,
            payload.valid_until,
            payload.status,
            payload.notes.as_deref(),
            items,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

// GET /api/quotations/{id}
#[utoipa::path(
    get,
    path = "/api/quotations/{id}",
    tag = "Orçamentos",
    params(
        ("id" = Uuid, Path, description = "ID do orçamento")
    ),
    responses(
        (status = 200, description = "Orçamento com itens", body = QuotationDetail),
        (status = 404, description = "Orçamento não encontrado")
    )
)]
pub async fn get_quotation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state
        .billing_service
        .get_quotation(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// PUT /api/quotations/{id}
#[utoipa::path(
    put,
    path = "/api/quotations/{id}",
    tag = "Orçamentos",
    request_body = QuotationPayload,
    params(
        ("id" = Uuid, Path, description = "ID do orçamento")
    ),
    responses(
        (status = 200, description = "Orçamento atualizado, itens substituídos e totais recalculados", body = QuotationDetail),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Orçamento não encontrado"),
        (status = 409, description = "Número de orçamento já existe")
    )
)]
pub async fn update_quotation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<QuotationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let items: Vec<LineItemInput> = payload.items.into_iter().map(Into::into).collect();

    let detail = app_state
        .billing_service
        .update_quotation(
            &app_state.db_pool,
            id,
            &payload.quotation_number,
            payload.client_id,
            payload.issue_date,
            payload.valid_until,
            payload.status,
            payload.notes.as_deref(),
            items,
        )
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// DELETE /api/quotations/{id}
#[utoipa::path(
    delete,
    path = "/api/quotations/{id}",
    tag = "Orçamentos",
    params(
        ("id" = Uuid, Path, description = "ID do orçamento")
    ),
    responses(
        (status = 204, description = "Orçamento excluído"),
        (status = 404, description = "Orçamento não encontrado")
    )
)]
pub async fn delete_quotation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.billing_service.delete_quotation(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
