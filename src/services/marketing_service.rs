// src/services/marketing_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::MarketingRepository,
    models::marketing::{CustomerSegment, MarketingCampaign},
};

// Mesma guarda de integridade dos clientes: um segmento referenciado
// por campanhas não pode ser excluído.
fn check_segment_deletable(campaigns: i64) -> Result<(), AppError> {
    if campaigns > 0 {
        return Err(AppError::DeleteBlocked(
            "Não é possível excluir o segmento: existem campanhas vinculadas.",
        ));
    }

    Ok(())
}

#[derive(Clone)]
pub struct MarketingService {
    repo: MarketingRepository,
}

impl MarketingService {
    pub fn new(repo: MarketingRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  SEGMENTOS
    // =========================================================================

    pub async fn list_segments(&self) -> Result<Vec<CustomerSegment>, AppError> {
        self.repo.list_segments().await
    }

    pub async fn get_segment(&self, id: Uuid) -> Result<CustomerSegment, AppError> {
        self.repo
            .find_segment(id)
            .await?
            .ok_or(AppError::NotFound("Segmento não encontrado."))
    }

    pub async fn create_segment(
        &self,
        name: &str,
        description: Option<&str>,
        criteria: Option<&str>,
    ) -> Result<CustomerSegment, AppError> {
        self.repo.create_segment(name, description, criteria).await
    }

    pub async fn update_segment(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        criteria: Option<&str>,
    ) -> Result<CustomerSegment, AppError> {
        self.repo
            .update_segment(id, name, description, criteria)
            .await?
            .ok_or(AppError::NotFound("Segmento não encontrado."))
    }

    pub async fn delete_segment(&self, id: Uuid) -> Result<(), AppError> {
        let campaigns = self.repo.count_segment_campaigns(id).await?;
        check_segment_deletable(campaigns)?;

        let rows = self.repo.delete_segment(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Segmento não encontrado."));
        }

        Ok(())
    }

    // =========================================================================
    //  CAMPANHAS
    // =========================================================================

    pub async fn list_campaigns(
        &self,
        segment_id: Option<Uuid>,
    ) -> Result<Vec<MarketingCampaign>, AppError> {
        self.repo.list_campaigns(segment_id).await
    }

    pub async fn get_campaign(&self, id: Uuid) -> Result<MarketingCampaign, AppError> {
        self.repo
            .find_campaign(id)
            .await?
            .ok_or(AppError::NotFound("Campanha não encontrada."))
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
        if let Some(segment_id) = segment_id {
            if !self.repo.segment_exists(segment_id).await? {
                return Err(AppError::NotFound("Segmento não encontrado."));
            }
        }

        self.repo
            .create_campaign(segment_id, name, description, channel, status, start_date, end_date, budget)
            .await
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
    ) -> Result<MarketingCampaign, AppError> {
        if let Some(segment_id) = segment_id {
            if !self.repo.segment_exists(segment_id).await? {
                return Err(AppError::NotFound("Segmento não encontrado."));
            }
        }

        self.repo
            .update_campaign(id, segment_id, name, description, channel, status, start_date, end_date, budget)
            .await?
            .ok_or(AppError::NotFound("Campanha não encontrada."))
    }

    pub async fn delete_campaign(&self, id: Uuid) -> Result<(), AppError> {
        let rows = self.repo.delete_campaign(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Campanha não encontrada."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_with_campaigns_cannot_be_deleted() {
        assert!(matches!(
            check_segment_deletable(2),
            Err(AppError::DeleteBlocked(_))
        ));
    }

    #[test]
    fn segment_without_campaigns_can_be_deleted() {
        assert!(check_segment_deletable(0).is_ok());
    }
}
