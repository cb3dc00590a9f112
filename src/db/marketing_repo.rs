// src/db/marketing_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::marketing::{CustomerSegment, MarketingCampaign},
};

#[derive(Clone)]
pub struct MarketingRepository {
    pool: PgPool,
}

impl MarketingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  SEGMENTOS DE CLIENTES
    // =========================================================================

    pub async fn list_segments(&self) -> Result<Vec<CustomerSegment>, AppError> {
        let segments =
            sqlx::query_as::<_, CustomerSegment>("SELECT * FROM customer_segments ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(segments)
    }

    pub async fn find_segment(&self, id: Uuid) -> Result<Option<CustomerSegment>, AppError> {
        let segment =
            sqlx::query_as::<_, CustomerSegment>("SELECT * FROM customer_segments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(segment)
    }

    pub async fn create_segment(
        &self,
        name: &str,
        description: Option<&str>,
        criteria: Option<&str>,
    ) -> Result<CustomerSegment, AppError> {
        let segment = sqlx::query_as::<_, CustomerSegment>(
            r#"
            INSERT INTO customer_segments (name, description, criteria)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(criteria)
        .fetch_one(&self.pool)
        .await?;

        Ok(segment)
    }

    pub async fn update_segment(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        criteria: Option<&str>,
    ) -> Result<Option<CustomerSegment>, AppError> {
        let segment = sqlx::query_as::<_, CustomerSegment>(
            r#"
            UPDATE customer_segments
            SET name = $2, description = $3, criteria = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(criteria)
        .fetch_optional(&self.pool)
        .await?;

        Ok(segment)
    }

    pub async fn delete_segment(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM customer_segments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Guarda de integridade referencial do segmento
    pub async fn count_segment_campaigns(&self, id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM marketing_campaigns WHERE segment_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // =========================================================================
    //  CAMPANHAS
    // =========================================================================

    pub async fn list_campaigns(
        &self,
        segment_id: Option<Uuid>,
    ) -> Result<Vec<MarketingCampaign>, AppError> {
        let campaigns = sqlx::query_as::<_, MarketingCampaign>(
            r#"
            SELECT * FROM marketing_campaigns
            WHERE ($1::uuid IS NULL OR segment_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(segment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(campaigns)
    }

    pub async fn find_campaign(&self, id: Uuid) -> Result<Option<MarketingCampaign>, AppError> {
        let campaign =
            sqlx::query_as::<_, MarketingCampaign>("SELECT * FROM marketing_campaigns WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(campaign)
    }

    pub async fn create_campaign(
        &self,
        segment_id: Option<Uuid>,
        name: &str,
        description: Option<&str>,
        channel: Option<&str>,
        status: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        budget: Option<Decimal>,
    ) -> Result<MarketingCampaign, AppError> {
        let campaign = sqlx::query_as::<_, MarketingCampaign>(
            r#"
            INSERT INTO marketing_campaigns (segment_id, name, description, channel, status,
                                             start_date, end_date, budget)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(segment_id)
        .bind(name)
        .bind(description)
        .bind(channel)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .bind(budget)
        .fetch_one(&self.pool)
        .await?;

        Ok(campaign)
    }

    pub async fn update_campaign(
        &self,
        id: Uuid,
        segment_id: Option<Uuid>,
        name: &str,
        description: Option<&str>,
        channel: Option<&str>,
        status: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        budget: Option<Decimal>,
    ) -> Result<Option<MarketingCampaign>, AppError> {
        let campaign = sqlx::query_as::<_, MarketingCampaign>(
            r#"
            UPDATE marketing_campaigns
            SET segment_id = $2, name = $3, description = $4, channel = $5, status = $6,
                start_date = $7, end_date = $8, budget = $9, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(segment_id)
        .bind(name)
        .bind(description)
        .bind(channel)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .bind(budget)
        .fetch_optional(&self.pool)
        .await?;

        Ok(campaign)
    }

    pub async fn delete_campaign(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM marketing_campaigns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn segment_exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM customer_segments WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
