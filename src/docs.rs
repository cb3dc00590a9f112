// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clientes ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Faturas ---
        handlers::invoices::list_invoices,
        handlers::invoices::create_invoice,
        handlers::invoices::get_invoice,
        handlers::invoices::update_invoice,
        handlers::invoices::delete_invoice,

        // --- Orçamentos ---
        handlers::quotations::list_quotations,
        handlers::quotations::create_quotation,
        handlers::quotations::get_quotation,
        handlers::quotations::update_quotation,
        handlers::quotations::delete_quotation,

        // --- Projetos ---
        handlers::projects::list_projects,
        handlers::projects::create_project,
        handlers::projects::get_project,
        handlers::projects::update_project,
        handlers::projects::delete_project,

        // --- Documentos ---
        handlers::documents::list_documents,
        handlers::documents::create_document,
        handlers::documents::get_document,
        handlers::documents::update_document,
        handlers::documents::delete_document,

        // --- Certificações ---
        handlers::certifications::list_certifications,
        handlers::certifications::create_certification,
        handlers::certifications::get_certification,
        handlers::certifications::update_certification,
        handlers::certifications::delete_certification,

        // --- Segmentos ---
        handlers::segments::list_segments,
        handlers::segments::create_segment,
        handlers::segments::get_segment,
        handlers::segments::update_segment,
        handlers::segments::delete_segment,

        // --- Campanhas ---
        handlers::campaigns::list_campaigns,
        handlers::campaigns::create_campaign,
        handlers::campaigns::get_campaign,
        handlers::campaigns::update_campaign,
        handlers::campaigns::delete_campaign,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Clientes ---
            models::client::Client,
            handlers::clients::ClientPayload,

            // --- Faturamento ---
            models::billing::DocumentStatus,
            models::billing::Invoice,
            models::billing::InvoiceItem,
            models::billing::InvoiceDetail,
            models::billing::Quotation,
            models::billing::QuotationItem,
            models::billing::QuotationDetail,
            handlers::invoices::LineItemPayload,
            handlers::invoices::InvoicePayload,
            handlers::quotations::QuotationPayload,

            // --- Projetos ---
            models::project::Project,
            handlers::projects::ProjectPayload,

            // --- Documentos ---
            models::document::Document,
            handlers::documents::DocumentPayload,

            // --- Certificações ---
            models::certification::Certification,
            handlers::certifications::CertificationPayload,

            // --- Marketing ---
            models::marketing::CustomerSegment,
            models::marketing::MarketingCampaign,
            handlers::segments::SegmentPayload,
            handlers::campaigns::CampaignPayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
        )
    ),
    tags(
        (name = "Clientes", description = "Cadastro de clientes da consultoria"),
        (name = "Faturas", description = "Faturas e seus itens, com totais calculados"),
        (name = "Orçamentos", description = "Orçamentos e seus itens, com totais calculados"),
        (name = "Projetos", description = "Projetos vinculados a clientes"),
        (name = "Documentos", description = "Biblioteca de documentos"),
        (name = "Certificações", description = "Certificações da consultoria"),
        (name = "Segmentos", description = "Segmentos de clientes para marketing"),
        (name = "Campanhas", description = "Campanhas de marketing"),
        (name = "Dashboard", description = "Indicadores do período")
    )
)]
pub struct ApiDoc;
