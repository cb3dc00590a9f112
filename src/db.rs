pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod billing_repo;
pub use billing_repo::BillingRepository;
pub mod project_repo;
pub use project_repo::ProjectRepository;
pub mod document_repo;
pub use document_repo::DocumentRepository;
pub mod certification_repo;
pub use certification_repo::CertificationRepository;
pub mod marketing_repo;
pub use marketing_repo::MarketingRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
