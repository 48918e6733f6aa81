use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use innkeeper::inquiries::notify::Mailer;
use innkeeper::inquiries::repository::InquiryStore;
use innkeeper::inquiries::{inquiries_router, InquiryService};
use innkeeper::rooms::repository::RoomStore;
use innkeeper::rooms::rooms_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn api_router<S, R, M>(
    rooms: Arc<R>,
    service: Arc<InquiryService<S, R, M>>,
) -> axum::Router
where
    S: InquiryStore + 'static,
    R: RoomStore + 'static,
    M: Mailer + 'static,
{
    rooms_router(rooms)
        .merge(inquiries_router(service))
        .route("/api/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": "guest-house booking api" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_prometheus::PrometheusMetricLayer;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn healthcheck_reports_healthy() {
        let Json(payload) = healthcheck().await;
        assert_eq!(payload["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let (_, handle) = PrometheusMetricLayer::pair();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(handle),
        };

        let response = readiness_endpoint(Extension(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
