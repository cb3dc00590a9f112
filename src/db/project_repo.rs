// src/db/project_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::project::Project};

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, client_id: Option<Uuid>) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE ($1::uuid IS NULL OR client_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
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
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (client_id, name, description, status, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
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
    ) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET client_id = $2, name = $3, description = $4, status = $5,
                start_date = $6, end_date = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(client_id)
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn client_exists(&self, client_id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(client_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
