// src/db/billing_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::billing::{DocumentStatus, Invoice, InvoiceItem, Quotation, QuotationItem},
    services::totals::{DocumentTotals, LineItemInput},
};
use rust_decimal::Decimal;

#[derive(Clone)]
pub struct BillingRepository {
    pool: PgPool,
}

impl BillingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn client_exists<'e, E>(&self, executor: E, client_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(client_id)
            .fetch_one(executor)
            .await?;

        Ok(exists)
    }

    // =========================================================================
    //  FATURAS
    // =========================================================================

    pub async fn list_invoices(&self, client_id: Option<Uuid>) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT * FROM invoices
            WHERE ($1::uuid IS NULL OR client_id = $1)
            ORDER BY issue_date DESC, created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn find_invoice(&self, id: Uuid) -> Result<Option<Invoice>, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(invoice)
    }

    pub async fn list_invoice_items<'e, E>(
        &self,
        executor: E,
        invoice_id: Uuid,
    ) -> Result<Vec<InvoiceItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, InvoiceItem>(
            "SELECT * FROM invoice_items WHERE invoice_id = $1 ORDER BY position ASC",
        )
        .bind(invoice_id)
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    pub async fn insert_invoice<'e, E>(
        &self,
        executor: E,
        invoice_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        totals: DocumentTotals,
    ) -> Result<Invoice, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (invoice_number, client_id, issue_date, due_date, status, notes,
                                  subtotal, tax_amount, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(invoice_number)
        .bind(client_id)
        .bind(issue_date)
        .bind(due_date)
        .bind(status)
        .bind(notes)
        .bind(totals.subtotal)
        .bind(totals.tax_amount)
        .bind(totals.total_amount)
        .fetch_one(executor)
        .await
        .map_err(|e| Self::map_unique_violation(e, "Este número de fatura já está em uso."))
    }

    pub async fn update_invoice<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        invoice_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        totals: DocumentTotals,
    ) -> Result<Option<Invoice>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET invoice_number = $2, client_id = $3, issue_date = $4, due_date = $5,
                status = $6, notes = $7, subtotal = $8, tax_amount = $9, total_amount = $10,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(invoice_number)
        .bind(client_id)
        .bind(issue_date)
        .bind(due_date)
        .bind(status)
        .bind(notes)
        .bind(totals.subtotal)
        .bind(totals.tax_amount)
        .bind(totals.total_amount)
        .fetch_optional(executor)
        .await
        .map_err(|e| Self::map_unique_violation(e, "Este número de fatura já está em uso."))
    }

    pub async fn insert_invoice_item<'e, E>(
        &self,
        executor: E,
        invoice_id: Uuid,
        item: &LineItemInput,
        amount: Decimal,
        position: i32,
    ) -> Result<InvoiceItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, InvoiceItem>(
            r#"
            INSERT INTO invoice_items (invoice_id, description, quantity, unit_price, tax_rate, amount, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(invoice_id)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(item.tax_rate)
        .bind(amount)
        .bind(position)
        .fetch_one(executor)
        .await?;

        Ok(item)
    }

    pub async fn delete_invoice_items<'e, E>(&self, executor: E, invoice_id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM invoice_items WHERE invoice_id = $1")
            .bind(invoice_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    // Os itens caem junto via ON DELETE CASCADE
    pub async fn delete_invoice(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  ORÇAMENTOS
    // =========================================================================

    pub async fn list_quotations(&self, client_id: Option<Uuid>) -> Result<Vec<Quotation>, AppError> {
        let quotations = sqlx::query_as::<_, Quotation>(
            r#"
            SELECT * FROM quotations
            WHERE ($1::uuid IS NULL OR client_id = $1)
            ORDER BY issue_date DESC, created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotations)
    }

    pub async fn find_quotation(&self, id: Uuid) -> Result<Option<Quotation>, AppError> {
        let quotation = sqlx::query_as::<_, Quotation>("SELECT * FROM quotations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(quotation)
    }

    pub async fn list_quotation_items<'e, E>(
        &self,
        executor: E,
        quotation_id: Uuid,
    ) -> Result<Vec<QuotationItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, QuotationItem>(
            "SELECT * FROM quotation_items WHERE quotation_id = $1 ORDER BY position ASC",
        )
        .bind(quotation_id)
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    pub async fn insert_quotation<'e, E>(
        &self,
        executor: E,
        quotation_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        valid_until: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        totals: DocumentTotals,
    ) -> Result<Quotation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Quotation>(
            r#"
            INSERT INTO quotations (quotation_number, client_id, issue_date, valid_until, status, notes,
                                    subtotal, tax_amount, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(quotation_number)
        .bind(client_id)
        .bind(issue_date)
        .bind(valid_until)
        .bind(status)
        .bind(notes)
        .bind(totals.subtotal)
        .bind(totals.tax_amount)
        .bind(totals.total_amount)
        .fetch_one(executor)
        .await
        .map_err(|e| Self::map_unique_violation(e, "Este número de orçamento já está em uso."))
    }

    pub async fn update_quotation<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        quotation_number: &str,
        client_id: Uuid,
        issue_date: NaiveDate,
        valid_until: NaiveDate,
        status: DocumentStatus,
        notes: Option<&str>,
        totals: DocumentTotals,
    ) -> Result<Option<Quotation>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Quotation>(
            r#"
            UPDATE quotations
            SET quotation_number = $2, client_id = $3, issue_date = $4, valid_until = $5,
                status = $6, notes = $7, subtotal = $8, tax_amount = $9, total_amount = $10,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(quotation_number)
        .bind(client_id)
        .bind(issue_date)
        .bind(valid_until)
        .bind(status)
        .bind(notes)
        .bind(totals.subtotal)
        .bind(totals.tax_amount)
        .bind(totals.total_amount)
        .fetch_optional(executor)
        .await
        .map_err(|e| Self::map_unique_violation(e, "Este número de orçamento já está em uso."))
    }

    pub async fn insert_quotation_item<'e, E>(
        &self,
        executor: E,
        quotation_id: Uuid,
        item: &LineItemInput,
        amount: Decimal,
        position: i32,
    ) -> Result<QuotationItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, QuotationItem>(
            r#"
            INSERT INTO quotation_items (quotation_id, description, quantity, unit_price, tax_rate, amount, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(quotation_id)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(item.tax_rate)
        .bind(amount)
        .bind(position)
        .fetch_one(executor)
        .await?;

        Ok(item)
    }

    pub async fn delete_quotation_items<'e, E>(&self, executor: E, quotation_id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM quotation_items WHERE quotation_id = $1")
            .bind(quotation_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete_quotation(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM quotations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Converte violação de chave única em um erro mais amigável (409)
    fn map_unique_violation(e: sqlx::Error, message: &'static str) -> AppError {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return AppError::DuplicateNumber(message);
            }
        }
        AppError::DatabaseError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A violação de chave única em si só acontece contra o banco; aqui
    // garantimos que os demais erros de banco não viram 409 por engano.
    #[test]
    fn non_unique_database_errors_pass_through() {
        let err = BillingRepository::map_unique_violation(
            sqlx::Error::PoolClosed,
            "Este número de fatura já está em uso.",
        );

        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[test]
    fn row_not_found_is_not_a_duplicate() {
        let err = BillingRepository::map_unique_violation(
            sqlx::Error::RowNotFound,
            "Este número de orçamento já está em uso.",
        );

        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
