// src/models/project.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub client_id: Uuid,

    #[schema(example = "Migração ERP")]
    pub name: String,

    pub description: Option<String>,

    // Texto livre, sem validação de transição
    #[schema(example = "em_andamento")]
    pub status: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-07-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2026-12-20")]
    pub end_date: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
