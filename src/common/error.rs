use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante mapeia para exatamente um status HTTP no IntoResponse abaixo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Item de fatura/orçamento malformado (quantidade, preço ou alíquota negativos)
    #[error("Item inválido: {0}")]
    InvalidLineItem(&'static str),

    // A mensagem já vem completa do serviço (ex: "Fatura não encontrada.")
    #[error("{0}")]
    NotFound(&'static str),

    // Guarda de integridade referencial: a mensagem nomeia o vínculo que bloqueia
    #[error("{0}")]
    DeleteBlocked(&'static str),

    #[error("{0}")]
    DuplicateNumber(&'static str),

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidLineItem(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::DeleteBlocked(msg) => (StatusCode::CONFLICT, msg.to_string()),
            AppError::DuplicateNumber(msg) => (StatusCode::CONFLICT, msg.to_string()),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O detalhe fica no log; o cliente recebe uma mensagem genérica.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Dummy {
        #[validate(length(min = 1, message = "O nome é obrigatório"))]
        name: String,
    }

    #[test]
    fn validation_error_maps_to_400() {
        let dummy = Dummy { name: String::new() };
        let err = AppError::from(dummy.validate().unwrap_err());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Cliente não encontrado.");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn delete_blocked_and_duplicate_map_to_409() {
        let blocked =
            AppError::DeleteBlocked("Não é possível excluir o cliente: existem faturas vinculadas.");
        assert_eq!(blocked.into_response().status(), StatusCode::CONFLICT);

        let duplicate = AppError::DuplicateNumber("Este número de fatura já está em uso.");
        assert_eq!(duplicate.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unexpected_errors_map_to_500_without_detail() {
        let err = AppError::DatabaseError(sqlx::Error::PoolClosed);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_line_item_maps_to_400() {
        let err = AppError::InvalidLineItem("a quantidade não pode ser negativa");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
