// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Indústrias Acme Ltda")]
    pub name: String,

    #[schema(example = "João Pereira")]
    pub contact_name: Option<String>,

    #[schema(example = "contato@acme.com")]
    pub email: Option<String>,

    #[schema(example = "+55 11 99999-0000")]
    pub phone: Option<String>,

    pub address: Option<String>,

    #[schema(example = "12.345.678/0001-90")]
    pub tax_id: Option<String>,

    #[schema(example = "Manufatura")]
    pub industry: Option<String>,

    pub website: Option<String>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
