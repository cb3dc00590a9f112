pub mod totals;

pub mod billing_service;
pub use billing_service::BillingService;
pub mod certification_service;
pub use certification_service::CertificationService;
pub mod client_service;
pub use client_service::ClientService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod document_service;
pub use document_service::DocumentService;
pub mod marketing_service;
pub use marketing_service::MarketingService;
pub mod project_service;
pub use project_service::ProjectService;
