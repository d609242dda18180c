use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use polypdf_core::catalog::Catalog;
use polypdf_export::pdf::PrintPdfEngine;
use polypdf_export::pipeline::PdfPipeline;
use polypdf_export::render::TemplateRenderer;
use polypdf_server::config::{LogFormat, ServerConfig};
use polypdf_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let catalog = Catalog::load(&config.languages_dir)?;

    let templates = TemplateRenderer::from_dir(&config.templates_dir)?;
    if !templates.has_template(&config.template) {
        return Err(eyre::eyre!(
            "template {} not found in {}",
            config.template,
            config.templates_dir.display()
        ));
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        pipeline: Arc::new(PdfPipeline::new(templates, Arc::new(PrintPdfEngine))),
        template: Arc::from(config.template.as_str()),
        response_mode: config.response_mode,
        bom: config.bom,
    };

    let app = polypdf_server::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        response_mode = ?config.response_mode,
        bom = config.bom,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
