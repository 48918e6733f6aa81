use crate::cli::ServeArgs;
use crate::infra::{AppState, LogMailer};
use crate::routes::api_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use innkeeper::config::AppConfig;
use innkeeper::error::AppError;
use innkeeper::inquiries::InquiryService;
use innkeeper::storage::{self, SqliteInquiryStore, SqliteRoomStore};
use innkeeper::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pool = storage::connect(&config.database.url).await?;
    storage::ensure_schema(&pool).await?;

    let rooms = Arc::new(SqliteRoomStore::new(pool.clone()));
    let inquiries = Arc::new(SqliteInquiryStore::new(pool));
    let mailer = Arc::new(LogMailer::new(config.mail.sender.clone()));
    let service = Arc::new(InquiryService::new(
        inquiries,
        rooms.clone(),
        mailer,
        config.mail.business.clone(),
    ));

    let app = api_router(rooms, service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "guest house booking api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
