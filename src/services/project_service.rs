// src/services/project_service.rs

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{common::error::AppError, db::ProjectRepository, models::project::Project};

#[derive(Clone)]
pub struct ProjectService {
    repo: ProjectRepository,
}

impl ProjectService {
    pub fn new(repo: ProjectRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, client_id: Option<Uuid>) -> Result<Vec<Project>, AppError> {
        self.repo.list(client_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Project, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Projeto não encontrado."))
    }

    pub async fn create(
        &self,
        client_id: Uuid,
        name: &str,
        description: Option<&str>,
        status: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Project, AppError> {
        if !self.repo.client_exists(client_id).await? {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        self.repo
            .create(client_id, name, description, status, start_date, end_date)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        client_id: Uuid,
        name: &str,
        description: Option<&str>,
        status: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Project, AppError> {
        if !self.repo.client_exists(client_id).await? {
            return Err(AppError::NotFound("Cliente não encontrado."));
        }

        self.repo
            .update(id, client_id, name, description, status, start_date, end_date)
            .await?
            .ok_or(AppError::NotFound("Projeto não encontrado."))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Projeto não encontrado."));
        }

        Ok(())
    }
}
