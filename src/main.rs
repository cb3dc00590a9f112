//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let client_routes = Router::new()
        .route(
            "/",
            post(handlers::clients::create_client).get(handlers::clients::list_clients),
        )
        .route(
            "/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        );

    let invoice_routes = Router::new()
        .route(
            "/",
            post(handlers::invoices::create_invoice).get(handlers::invoices::list_invoices),
        )
        .route(
            "/{id}",
            get(handlers::invoices::get_invoice)
                .put(handlers::invoices::update_invoice)
                .delete(handlers::invoices::delete_invoice),
        );

    let quotation_routes = Router::new()
        .route(
            "/",
            post(handlers::quotations::create_quotation)
                .get(handlers::quotations::list_quotations),
        )
        .route(
            "/{id}",
            get(handlers::quotations::get_quotation)
                .put(handlers::quotations::update_quotation)
                .delete(handlers::quotations::delete_quotation),
        );

    let project_routes = Router::new()
        .route(
            "/",
            post(handlers::projects::create_project).get(handlers::projects::list_projects),
        )
        .route(
            "/{id}",
            get(handlers::projects::get_project)
                .put(handlers::projects::update_project)
                .delete(handlers::projects::delete_project),
        );

    let document_routes = Router::new()
        .route(
            "/",
            post(handlers::documents::create_document).get(handlers::documents::list_documents),
        )
        .route(
            "/{id}",
            get(handlers::documents::get_document)
                .put(handlers::documents::update_document)
                .delete(handlers::documents::delete_document),
        );

    let certification_routes = Router::new()
        .route(
            "/",
            post(handlers::certifications::create_certification)
                .get(handlers::certifications::list_certifications),
        )
        .route(
            "/{id}",
            get(handlers::certifications::get_certification)
                .put(handlers::certifications::update_certification)
                .delete(handlers::certifications::delete_certification),
        );

    let segment_routes = Router::new()
        .route(
            "/",
            post(handlers::segments::create_segment).get(handlers::segments::list_segments),
        )
        .route(
            "/{id}",
            get(handlers::segments::get_segment)
                .put(handlers::segments::update_segment)
                .delete(handlers::segments::delete_segment),
        );

    let campaign_routes = Router::new()
        .route(
            "/",
            post(handlers::campaigns::create_campaign).get(handlers::campaigns::list_campaigns),
        )
        .route(
            "/{id}",
            get(handlers::campaigns::get_campaign)
                .put(handlers::campaigns::update_campaign)
                .delete(handlers::campaigns::delete_campaign),
        );

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard/summary", get(handlers::dashboard::get_summary))
        .nest("/api/clients", client_routes)
        .nest("/api/invoices", invoice_routes)
        .nest("/api/quotations", quotation_routes)
        .nest("/api/projects", project_routes)
        .nest("/api/documents", document_routes)
        .nest("/api/certifications", certification_routes)
        .nest("/api/segments", segment_routes)
        .nest("/api/campaigns", campaign_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
