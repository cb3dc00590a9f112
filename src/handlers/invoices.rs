// src/handlers/invoices.rs

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

use crate::{
    common::error::AppError,
    config::AppState,
    models::billing::{DocumentStatus, Invoice, InvoiceDetail},
    services::totals::LineItemInput,
};

/// Item de linha, compartilhado entre faturas e orçamentos.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    #[schema(example = "Consultoria de processos (horas)")]
    pub description: String,

    #[schema(example = "2")]
    pub quantity: Decimal,

    #[schema(example = "100.00")]
    pub unit_price: Decimal,

    #[serde(default)]
    #[schema(example = "16.00")]
    pub tax_rate: Decimal,
}

impl From<LineItemPayload> for LineItemInput {
    fn from(payload: LineItemPayload) -> Self {
        Self {
            description: payload.description,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
            tax_rate: payload.tax_rate,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    #[validate(length(min = 1, message = "O número da fatura é obrigatório"))]
    #[schema(example = "FAT-2026-0042")]
    pub invoice_number: String,

    pub client_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2026-08-01")]
    pub issue_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-08-31")]
    pub due_date: NaiveDate,

    #[serde(default)]
    pub status: DocumentStatus,

    pub notes: Option<String>,

    #[validate(nested)]
    pub items: Vec<LineItemPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvoicesQuery {
    pub client_id: Option<Uuid>,
}

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Faturas",
    params(
        ("clientId" = Option<Uuid>, Query, description = "Filtra pelas faturas de um cliente")
    ),
    responses(
        (status = 200, description = "Lista de faturas", body = Vec<Invoice>)
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    Query(query): Query<ListInvoicesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.billing_service.list_invoices(query.client_id).await?;

    Ok((StatusCode::OK, Json(invoices)))
}

// POST /api/invoices
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = "Faturas",
    request_body = InvoicePayload,
    responses(
        (status = 201, description = "Fatura criada, com totais calculados", body = InvoiceDetail),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado"),
        (status = 409, description = "Número de fatura já existe")
    )
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let items: Vec<LineItemInput> = payload.items.into_iter().map(Into::into).collect();

    let detail = app_state
        .billing_service
        .create_invoice(
            &app_state.db_pool,
            &payload.invoice_number,
            payload.client_id,
            payload.issue_date,
            payload.due_date,
            payload.status,
            payload.notes.as_deref(),
            items,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

// GET /api/invoices/{id}
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Faturas",
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura com itens", body = InvoiceDetail),
        (status = 404, description = "Fatura não encontrada")
    )
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state
        .billing_service
        .get_invoice(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// PUT /api/invoices/{id}
#[utoipa::path(
    put,
    path = "/api/invoices/{id}",
    tag = "Faturas",
    request_body = InvoicePayload,
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    responses(
        (status = 200, description = "Fatura atualizada, itens substituídos e totais recalculados", body = InvoiceDetail),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Fatura não encontrada"),
        (status = 409, description = "Número de fatura já existe")
    )
)]
pub async fn update_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<InvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let items: Vec<LineItemInput> = payload.items.into_iter().map(Into::into).collect();

    let detail = app_state
        .billing_service
        .update_invoice(
            &app_state.db_pool,
            id,
            &payload.invoice_number,
            payload.client_id,
            payload.issue_date,
            payload.due_date,
            payload.status,
            payload.notes.as_deref(),
            items,
        )
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// DELETE /api/invoices/{id}
#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    tag = "Faturas",
    params(
        ("id" = Uuid, Path, description = "ID da fatura")
    ),
    responses(
        (status = 204, description = "Fatura excluída"),
        (status = 404, description = "Fatura não encontrada")
    )
)]
pub async fn delete_invoice(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.billing_service.delete_invoice(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_with_items(items: Vec<LineItemPayload>) -> InvoicePayload {
        InvoicePayload {
            invoice_number: "FAT-2026-0001".to_string(),
            client_id: Uuid::new_v4(),
            issue_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            status: DocumentStatus::Draft,
            notes: None,
            items,
        }
    }

    #[test]
    fn payload_without_number_is_rejected() {
        let mut payload = payload_with_items(vec![]);
        payload.invoice_number = String::new();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("invoice_number"));
    }

    #[test]
    fn item_without_description_is_rejected() {
        let payload = payload_with_items(vec![LineItemPayload {
            description: String::new(),
            quantity: Decimal::from(1),
            unit_price: Decimal::from(10),
            tax_rate: Decimal::ZERO,
        }]);

        assert!(payload.validate().is_err());
    }

    #[test]
    fn items_convert_preserving_values() {
        let input: LineItemInput = LineItemPayload {
            description: "Consultoria".to_string(),
            quantity: Decimal::from(2),
            unit_price: Decimal::from(100),
            tax_rate: Decimal::from(16),
        }
        .into();

        assert_eq!(input.quantity, Decimal::from(2));
        assert_eq!(input.unit_price, Decimal::from(100));
        assert_eq!(input.tax_rate, Decimal::from(16));
    }
}
