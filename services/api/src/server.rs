use crate::cli::ServeArgs;
use crate::infra::{snapshot_store, AppState};
use crate::routes::with_partnership_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gonogo::config::AppConfig;
use gonogo::error::AppError;
use gonogo::telemetry;
use gonogo::workflows::partnership::PartnershipService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(snapshot_store(&config));
    let snapshot_dir = store.dir().display().to_string();
    let partnership_service = Arc::new(PartnershipService::new(store));

    let app = with_partnership_routes(partnership_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, %snapshot_dir, "go/no-go service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
