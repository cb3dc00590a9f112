// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{common::error::AppError, config::AppState, models::dashboard::DashboardSummary};

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    params(
        ("from" = Option<String>, Query, description = "Início do período (AAAA-MM-DD); padrão: 30 dias atrás"),
        ("to" = Option<String>, Query, description = "Fim do período (AAAA-MM-DD); padrão: hoje")
    ),
    responses(
        (status = 200, description = "Resumo do período", body = DashboardSummary),
        (status = 400, description = "Datas inválidas")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .dashboard_service
        .get_summary(query.from, query.to)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}
