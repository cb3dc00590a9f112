// src/db/dashboard_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{billing::DocumentStatus, dashboard::DashboardSummary},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Agregado do período: somas de faturamento e contagens de entidades.
    pub async fn get_summary(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DashboardSummary, AppError> {
        // Transação para um snapshot consistente das leituras
        let mut tx = self.pool.begin().await?;

        let invoiced_total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)
            FROM invoices
            WHERE issue_date BETWEEN $1 AND $2
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await?;

        let paid_total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)
            FROM invoices
            WHERE issue_date BETWEEN $1 AND $2
              AND status = $3
            "#,
        )
        .bind(from)
        .bind(to)
        .bind(DocumentStatus::Paid)
        .fetch_one(&mut *tx)
        .await?;

        let invoice_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM invoices WHERE issue_date BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await?;

        let quotation_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM quotations WHERE issue_date BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await?;

        let client_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clients WHERE created_at::date BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await?;

        let project_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM projects WHERE created_at::date BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DashboardSummary {
            from,
            to,
            invoiced_total,
            paid_total,
            invoice_count,
            quotation_count,
            client_count,
            project_count,
        })
    }
}
