// src/models/certification.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Certificações da própria consultoria (ISO, parcerias etc.)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,

    #[schema(example = "ISO 9001")]
    pub name: String,

    #[schema(example = "Bureau Veritas")]
    pub issuer: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2024-03-15")]
    pub issue_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2027-03-15")]
    pub expiry_date: Option<NaiveDate>,

    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}
