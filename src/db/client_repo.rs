// src/db/client_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::client::Client};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
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
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, contact_name, email, phone, address, tax_id, industry, website, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(contact_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(tax_id)
        .bind(industry)
        .bind(website)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
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
    ) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, contact_name = $3, email = $4, phone = $5, address = $6,
                tax_id = $7, industry = $8, website = $9, notes = $10, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(contact_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(tax_id)
        .bind(industry)
        .bind(website)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Guarda de integridade referencial: quantos registros ainda apontam
    // para este cliente (faturas, projetos).
    pub async fn count_dependents(&self, id: Uuid) -> Result<(i64, i64), AppError> {
        let counts = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM invoices WHERE client_id = $1),
                (SELECT COUNT(*) FROM projects WHERE client_id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }
}
