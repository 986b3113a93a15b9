use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDirectory};
use crate::routes::with_workforce_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use staffboard::config::AppConfig;
use staffboard::error::AppError;
use staffboard::telemetry;
use staffboard::workforce::WorkforceService;
use std::sync::atomic::Ordering;
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
    if let Some(roster) = args.roster.take() {
        config.roster.path = Some(roster);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(InMemoryDirectory::load(config.roster.path.as_deref())?);
    let employees = directory.len();
    let service = Arc::new(WorkforceService::new(directory));

    let app = with_workforce_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, employees, "staff dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
