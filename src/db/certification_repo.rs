// src/db/certification_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::certification::Certification};

#[derive(Clone)]
pub struct CertificationRepository {
    pool: PgPool,
}

impl CertificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Certification>, AppError> {
        let certifications =
            sqlx::query_as::<_, Certification>("SELECT * FROM certifications ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(certifications)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Certification>, AppError> {
        let certification =
            sqlx::query_as::<_, Certification>("SELECT * FROM certifications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(certification)
    }

    pub async fn create(
        &self,
        name: &str,
        issuer: Option<&str>,
        issue_date: Option<NaiveDate>,
        expiry_date: Option<NaiveDate>,
        description: Option<&str>,
    ) -> Result<Certification, AppError> {
        let certification = sqlx::query_as::<_, Certification>(
            r#"
            INSERT INTO certifications (name, issuer, issue_date, expiry_date, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(issuer)
        .bind(issue_date)
        .bind(expiry_date)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(certification)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        issuer: Option<&str>,
        issue_date: Option<NaiveDate>,
        expiry_date: Option<NaiveDate>,
        description: Option<&str>,
    ) -> Result<Option<Certification>, AppError> {
        let certification = sqlx::query_as::<_, Certification>(
            r#"
            UPDATE certifications
            SET name = $2, issuer = $3, issue_date = $4, expiry_date = $5, description = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(issuer)
        .bind(issue_date)
        .bind(expiry_date)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certification)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
