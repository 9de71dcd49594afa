//! # REST API for Mental Health Check-ins

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use shared::{CheckInListResponse, RecordCheckInRequest, SessionId, TrendResponse};
use tracing::info;

use super::error_response;
use super::mappers::wellbeing_mapper::WellbeingMapper;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecentCheckInsQuery {
    /// Falls back to the configured `recent_limit`
    pub limit: Option<usize>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/wellbeing", get(list_check_ins).post(record_check_in))
        .route("/sessions/:session_id/wellbeing/trend", get(get_trend))
}

pub async fn list_check_ins(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Query(query): Query<RecentCheckInsQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(state.config.recent_limit);
    info!("GET /api/sessions/{}/wellbeing - limit {}", session_id, limit);
    match state.wellbeing_service.list_recent(session_id, Some(limit)) {
        Ok(check_ins) => (StatusCode::OK, Json(CheckInListResponse { check_ins })).into_response(),
        Err(e) => error_response("list check-ins", e),
    }
}

pub async fn record_check_in(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<RecordCheckInRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/wellbeing", session_id);
    let command = WellbeingMapper::to_record_command(request);
    match state.wellbeing_service.record_check_in(session_id, command) {
        Ok(recorded) => (StatusCode::CREATED, Json(WellbeingMapper::to_check_in_response(recorded))).into_response(),
        Err(e) => error_response("record check-in", e),
    }
}

pub async fn get_trend(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/wellbeing/trend", session_id);
    match state.wellbeing_service.trend(session_id) {
        Ok(trend) => (StatusCode::OK, Json(TrendResponse { trend })).into_response(),
        Err(e) => error_response("compute wellbeing trend", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, start_session, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    fn check_in(stress: &str, mood: &str, date: &str) -> Value {
        json!({
            "stress_level": stress,
            "energy_level": "Moderate",
            "mood": mood,
            "sleep_quality": "Fair",
            "support_feeling": "Neutral",
            "coping_ability": "Okay",
            "date": date
        })
    }

    #[tokio::test]
    async fn test_record_flags_support_and_trend_improves() {
        let app = test_app();
        let session = start_session(&app).await;
        let uri = format!("/api/sessions/{}/wellbeing", session);

        let (status, body) = send(&app, Method::GET, &format!("{}/trend", uri), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["trend"].is_null());

        let (status, body) = send(&app, Method::POST, &uri, Some(check_in("Very High", "Low", "2026-05-01"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["needs_support"], true);
        assert!(body["suggestion"].is_string());

        let (_, body) = send(&app, Method::POST, &uri, Some(check_in("Low", "Good", "2026-05-08"))).await;
        assert_eq!(body["needs_support"], false);
        assert!(body["suggestion"].is_null());

        let (_, body) = send(&app, Method::GET, &format!("{}/trend", uri), None).await;
        assert_eq!(body["trend"]["stress"], "improving");
        assert_eq!(body["trend"]["mood"], "improving");
        assert_eq!(body["trend"]["latest_date"], "2026-05-08");
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let app = test_app();
        let session = start_session(&app).await;
        let uri = format!("/api/sessions/{}/wellbeing", session);

        for day in ["2026-05-01", "2026-05-02", "2026-05-03"] {
            send(&app, Method::POST, &uri, Some(check_in("Moderate", "Neutral", day))).await;
        }

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["check_ins"].as_array().unwrap().len(), 3);

        let (_, body) = send(&app, Method::GET, &format!("{}?limit=2", uri), None).await;
        let check_ins = body["check_ins"].as_array().unwrap();
        assert_eq!(check_ins.len(), 2);
        assert_eq!(check_ins[0]["date"], "2026-05-03");
    }

    #[tokio::test]
    async fn test_unknown_scale_value_is_rejected() {
        let app = test_app();
        let session = start_session(&app).await;
        let uri = format!("/api/sessions/{}/wellbeing", session);

        let (status, _) = send(&app, Method::POST, &uri, Some(check_in("Extreme", "Low", "2026-05-01"))).await;
        assert!(status.is_client_error());
    }
}
