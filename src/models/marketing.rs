// src/models/marketing.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSegment {
    pub id: Uuid,

    #[schema(example = "Indústria - Grande porte")]
    pub name: String,

    pub description: Option<String>,

    // Critério descritivo (texto livre); a segmentação em si acontece fora daqui
    #[schema(example = "faturamento > 10M, setor industrial")]
    pub criteria: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCampaign {
    pub id: Uuid,
    pub segment_id: Option<Uuid>,

    #[schema(example = "Campanha Q4 - Indústria")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "email")]
    pub channel: Option<String>,

    // Texto livre, sem validação de transição
    #[schema(example = "ativa")]
    pub status: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-10-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2026-12-31")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = "5000.00")]
    pub budget: Option<Decimal>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
