// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        BillingRepository, CertificationRepository, ClientRepository, DashboardRepository,
        DocumentRepository, MarketingRepository, ProjectRepository,
    },
    services::{
        BillingService, CertificationService, ClientService, DashboardService, DocumentService,
        MarketingService, ProjectService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub client_service: ClientService,
    pub billing_service: BillingService,
    pub project_service: ProjectService,
    pub document_service: DocumentService,
    pub certification_service: CertificationService,
    pub marketing_service: MarketingService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let client_service = ClientService::new(ClientRepository::new(db_pool.clone()));
        let billing_service = BillingService::new(BillingRepository::new(db_pool.clone()));
        let project_service = ProjectService::new(ProjectRepository::new(db_pool.clone()));
        let document_service = DocumentService::new(DocumentRepository::new(db_pool.clone()));
        let certification_service =
            CertificationService::new(CertificationRepository::new(db_pool.clone()));
        let marketing_service = MarketingService::new(MarketingRepository::new(db_pool.clone()));
        let dashboard_service = DashboardService::new(DashboardRepository::new(db_pool.clone()));

        Ok(Self {
            db_pool,
            client_service,
            billing_service,
            project_service,
            document_service,
            certification_service,
            marketing_service,
            dashboard_service,
        })
    }
}
