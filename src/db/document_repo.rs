// src/db/document_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::document::Document};

#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        let documents =
            sqlx::query_as::<_, Document>("SELECT * FROM documents ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(documents)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document)
    }

    pub async fn create(
        &self,
        client_id: Option<Uuid>,
        title: &str,
        category: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (client_id, title, category, file_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(title)
        .bind(category)
        .bind(file_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    pub async fn update(
        &self,
        id: Uuid,
        client_id: Option<Uuid>,
        title: &str,
        category: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            UPDATE documents
            SET client_id = $2, title = $3, category = $4, file_url = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(client_id)
        .bind(title)
        .bind(category)
        .bind(file_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
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
