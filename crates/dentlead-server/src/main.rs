//! dentlead - lead intake service for the clinic's landing pages.
//!
//! Validates contact forms with the per-country phone rules and forwards
//! accepted leads to the CRM.

mod config;
mod routes;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dentlead_adapters::http::{HttpGeoLocator, HttpLeadSink};
use dentlead_adapters::i18n::CatalogTranslator;
use dentlead_app::inference::DialCodeInference;
use dentlead_app::intake::LeadIntakeService;

use config::{InferenceStrategy, ServerConfig};
use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dentlead=info,dentlead_app=info,dentlead_adapters=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ServerConfig::load()?;

    let sink = HttpLeadSink::new(config.crm.endpoint.clone(), config.crm_timeout())?;
    let inference = match config.inference {
        InferenceStrategy::Slug => DialCodeInference::Slug,
        InferenceStrategy::GeoIp => DialCodeInference::GeoIp(Arc::new(HttpGeoLocator::new(
            config.geo.base_url.clone(),
            config.geo_timeout(),
        )?)),
    };

    let mut translator = CatalogTranslator::english();
    if let Some(path) = &config.catalog {
        translator = translator.merged_with(CatalogTranslator::load(path)?);
    }

    let state = AppState {
        intake: Arc::new(LeadIntakeService::new(sink, inference, config.lead.clone())),
        translator: Arc::new(translator),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(
        addr = %config.bind,
        crm = %config.crm.endpoint,
        inference = ?config.inference,
        "dentlead listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
