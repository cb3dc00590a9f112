// src/services/dashboard_service.rs

use chrono::{Days, NaiveDate, Utc};

use crate::{common::error::AppError, db::DashboardRepository, models::dashboard::DashboardSummary};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    /// Resumo do período. Sem parâmetros, cobre os últimos 30 dias.
    pub async fn get_summary(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<DashboardSummary, AppError> {
        let to = to.unwrap_or_else(|| Utc::now().date_naive());
        let from = from.unwrap_or_else(|| to.checked_sub_days(Days::new(30)).unwrap_or(to));

        self.repo.get_summary(from, to).await
    }
}
