// src/models/billing.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

// Status livre, sem máquina de transição: o front define o valor diretamente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "document_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Sent,
    Viewed,
    Paid,
    Overdue,
    Cancelled,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,

    #[schema(example = "FAT-2026-0042")]
    pub invoice_number: String,

    pub client_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2026-08-01")]
    pub issue_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-08-31")]
    pub due_date: NaiveDate,

    pub status: DocumentStatus,
    pub notes: Option<String>,

    // Totais derivados e armazenados (recalculados sempre que os itens mudam)
    #[schema(example = "250.00")]
    pub subtotal: Decimal,
    #[schema(example = "32.00")]
    pub tax_amount: Decimal,
    #[schema(example = "282.00")]
    pub total_amount: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: Uuid,
    pub invoice_id: Uuid,

    #[schema(example = "Consultoria de processos (horas)")]
    pub description: String,

    #[schema(example = "2")]
    pub quantity: Decimal,
    #[schema(example = "100.00")]
    pub unit_price: Decimal,
    #[schema(example = "16.00")]
    pub tax_rate: Decimal,

    // amount = quantity * unit_price (derivado, armazenado)
    #[schema(example = "200.00")]
    pub amount: Decimal,
}

/// Fatura com seus itens, na ordem em que foram enviados.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
}

// Orçamento: estruturalmente idêntico à fatura, com validade no lugar do vencimento.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: Uuid,

    #[schema(example = "ORC-2026-0017")]
    pub quotation_number: String,

    pub client_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2026-08-01")]
    pub issue_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-09-01")]
    pub valid_until: NaiveDate,

    pub status: DocumentStatus,
    pub notes: Option<String>,

    #[schema(example = "250.00")]
    pub subtotal: Decimal,
    #[schema(example = "32.00")]
    pub tax_amount: Decimal,
    #[schema(example = "282.00")]
    pub total_amount: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    pub id: Uuid,
    pub quotation_id: Uuid,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_rate: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDetail {
    #[serde(flatten)]
    pub quotation: Quotation,
    pub items: Vec<QuotationItem>,
}
