// src/services/document_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::DocumentRepository, models::document::Document};

// Referência opcional a cliente: `None` = documento avulso, sempre aceito;
// `Some(false)` = o id informado não existe no banco.
fn check_client_reference(lookup: Option<bool>) -> Result<(), AppError> {
    if lookup == Some(false) {
        return Err(AppError::NotFound("Cliente não encontrado."));
    }

    Ok(())
}

#[derive(Clone)]
pub struct DocumentService {
    repo: DocumentRepository,
}

impl DocumentService {
    pub fn new(repo: DocumentRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Document, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Documento não encontrado."))
    }

    pub async fn create(
        &self,
        client_id: Option<Uuid>,
        title: &str,
        category: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Document, AppError> {
        self.check_client(client_id).await?;

        self.repo.create(client_id, title, category, file_url).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        client_id: Option<Uuid>,
        title: &str,
        category: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Document, AppError> {
        self.check_client(client_id).await?;

        self.repo
            .update(id, client_id, title, category, file_url)
            .await?
            .ok_or(AppError::NotFound("Documento não encontrado."))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Documento não encontrado."));
        }

        Ok(())
    }

    async fn check_client(&self, client_id: Option<Uuid>) -> Result<(), AppError> {
        let lookup = match client_id {
            Some(client_id) => Some(self.repo.client_exists(client_id).await?),
            None => None,
        };

        check_client_reference(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_reference_is_not_found() {
        assert!(matches!(
            check_client_reference(Some(false)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn existing_client_reference_is_accepted() {
        assert!(check_client_reference(Some(true)).is_ok());
    }

    #[test]
    fn document_without_client_is_accepted() {
        assert!(check_client_reference(None).is_ok());
    }
}
