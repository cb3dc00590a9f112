// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Agregado do período pedido: somas de faturamento e contagens de entidades.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[schema(value_type = String, format = Date, example = "2026-07-01")]
    pub from: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-07-31")]
    pub to: NaiveDate,

    #[schema(example = "12500.00")]
    pub invoiced_total: Decimal,
    #[schema(example = "8200.00")]
    pub paid_total: Decimal,

    pub invoice_count: i64,
    pub quotation_count: i64,
    pub client_count: i64,
    pub project_count: i64,
}
