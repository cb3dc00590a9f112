// src/handlers/clients.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::client::Client};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Indústrias Acme Ltda")]
    pub name: String,

    #[schema(example = "João Pereira")]
    pub contact_name: Option<String>,

    #[validate(email(message = "E-mail inválido"))]
    #[schema(example = "contato@acme.com")]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub address: Option<String>,

    #[schema(example = "12.345.678/0001-90")]
    pub tax_id: Option<String>,

    pub industry: Option<String>,

    #[validate(url(message = "URL inválida"))]
    pub website: Option<String>,

    pub notes: Option<String>,
}

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Client>)
    )
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.client_service.list().await?;

    Ok((StatusCode::OK, Json(clients)))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clientes",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .client_service
        .create(
            &payload.name,
            payload.contact_name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address.as_deref(),
            payload.tax_id.as_deref(),
            payload.industry.as_deref(),
            payload.website.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Cliente", body = Client),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn get_client(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let client = app_state.client_service.get(id).await?;

    Ok((StatusCode::OK, Json(client)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clientes",
    request_body = ClientPayload,
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .client_service
        .update(
            id,
            &payload.name,
            payload.contact_name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address.as_deref(),
            payload.tax_id.as_deref(),
            payload.industry.as_deref(),
            payload.website.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(client)))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    ),
    responses(
        (status = 204, description = "Cliente excluído"),
        (status = 404, description = "Cliente não encontrado"),
        (status = 409, description = "Cliente possui faturas ou projetos vinculados")
    )
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.client_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ClientPayload {
        ClientPayload {
            name: "Indústrias Acme Ltda".to_string(),
            contact_name: None,
            email: Some("contato@acme.com".to_string()),
            phone: None,
            address: None,
            tax_id: None,
            industry: None,
            website: None,
            notes: None,
        }
    }

    #[test]
    fn payload_without_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = String::new();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn payload_with_invalid_email_is_rejected() {
        let mut payload = valid_payload();
        payload.email = Some("não-é-um-email".to_string());

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }
}
