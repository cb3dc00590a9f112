// src/services/certification_service.rs

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    common::error::AppError, db::CertificationRepository, models::certification::Certification,
};

#[derive(Clone)]
pub struct CertificationService {
    repo: CertificationRepository,
}

impl CertificationService {
    pub fn new(repo: CertificationRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Certification>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Certification, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Certificação não encontrada."))
    }

    pub async fn create(
        &self,
        name: &str,
        issuer: Option<&str>,
        issue_date: Option<NaiveDate>,
        expiry_date: Option<NaiveDate>,
        description: Option<&str>,
    ) -> Result<Certification, AppError> {
        self.repo
            .create(name, issuer, issue_date, expiry_date, description)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        issuer: Option<&str>,
        issue_date: Option<NaiveDate>,
        expiry_date: Option<NaiveDate>,
        description: Option<&str>,
    ) -> Result<Certification, AppError> {
        self.repo
            .update(id, name, issuer, issue_date, expiry_date, description)
            .await?
            .ok_or(AppError::NotFound("Certificação não encontrada."))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Certificação não encontrada."));
        }

        Ok(())
    }
}
