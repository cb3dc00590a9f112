// src/models/document.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,

    // O arquivo vive no object storage externo; aqui fica só a referência
    pub client_id: Option<Uuid>,

    #[schema(example = "Contrato de prestação de serviços")]
    pub title: String,

    #[schema(example = "contratos")]
    pub category: Option<String>,

    #[schema(example = "https://storage.example.com/docs/abc123.pdf")]
    pub file_url: Option<String>,

    pub created_at: DateTime<Utc>,
}
