// src/services/client_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::ClientRepository, models::client::Client};

// Decisão da guarda de exclusão, separada do acesso a dados:
// o conflito nomeia o vínculo que bloqueia.
fn check_deletable(invoices: i64, projects: i64) -> Result<(), AppError> {
    if invoices > 0 {
        return Err(AppError::DeleteBlocked(
            "Não é possível excluir o cliente: existem faturas vinculadas.",
        ));
    }
    if projects > 0 {
        return Err(AppError::DeleteBlocked(
            "Não é possível excluir o cliente: existem projetos vinculados.",
        ));
    }

    Ok(())
}

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Client, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Cliente não encontrado."))
    }

    pub async fn create(
        &self,
        name: &str,
        contact_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        tax_id: Option<&str>,
        industry: Option<&str>,
        website: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError> {
        self.repo
            .create(name, contact_name, email, phone, address, tax_id, industry, website, notes)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        contact_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        tax_id: Option<&str>,
        industry: Option<&str>,
        website: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError> {
        self.repo
            .update(id, name, contact_name, email, phone, address, tax_id, industry, website, notes)
            .await?
            .ok_or(AppError::NotFound("Cliente não encontrado."))
    }

    /// Exclui um cliente, desde que nada mais aponte para ele.
    ///
    /// A guarda é aplicada na aplicação (não há cascade exposto): se houver
    /// faturas ou projetos vinculados, a exclusão falha com conflito nomeando
    /// o vínculo bloqueante.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let (invoices, projects) = self.repo.count_dependents(id).await?;
        check_deletable(invoices, projects)?;

        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_with_invoices_cannot_be_deleted() {
        let err = check_deletable(3, 0).unwrap_err();
        match err {
            AppError::DeleteBlocked(msg) => assert!(msg.contains("faturas")),
            other => panic!("esperava DeleteBlocked, veio {other:?}"),
        }
    }

    #[test]
    fn client_with_projects_cannot_be_deleted() {
        let err = check_deletable(0, 1).unwrap_err();
        match err {
            AppError::DeleteBlocked(msg) => assert!(msg.contains("projetos")),
            other => panic!("esperava DeleteBlocked, veio {other:?}"),
        }
    }

    #[test]
    fn client_without_dependents_can_be_deleted() {
        assert!(check_deletable(0, 0).is_ok());
    }
}
