//! HTTP request handlers for the salary breakdown API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::SalaryFormRequest;
use super::response::{ApiError, ApiErrorResponse, BreakdownResponse, FormResponse, SubmitResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary", get(form_handler).post(submit_handler))
        .route("/breakdown", get(breakdown_handler))
        .route("/notifications", get(notifications_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /salary.
///
/// Applies the submitted form values and presses the calculate button.
/// Publication is acknowledged with 202; the breakdown updates asynchronously.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryFormRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let outcome = {
        let mut collector = state.collector();
        request.apply_to(&mut collector);
        collector.handle_button_click()
    };

    match outcome {
        Ok(subscribers) => {
            info!(
                correlation_id = %correlation_id,
                subscribers,
                "Salary inputs published"
            );
            json_response(StatusCode::ACCEPTED, SubmitResponse::published(subscribers))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary submission rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /salary.
async fn form_handler(State(state): State<AppState>) -> Response {
    let form = FormResponse::from(&*state.collector());
    json_response(StatusCode::OK, form)
}

/// Handler for GET /breakdown.
async fn breakdown_handler(State(state): State<AppState>) -> Response {
    let snapshot = state.presenter().snapshot();
    json_response(StatusCode::OK, BreakdownResponse::from(&snapshot))
}

/// Handler for GET /notifications.
async fn notifications_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.notifications().entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::service::{
        CalculationRequest, CalculationResponse, CalculationService, ServiceFailure,
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EchoService;

    #[async_trait]
    impl CalculationService for EchoService {
        async fn calculate_salary(
            &self,
            request: CalculationRequest,
        ) -> Result<CalculationResponse, ServiceFailure> {
            Ok(CalculationResponse {
                annual_income: request.input_salary,
                annual_taxable_income: request.input_salary,
                annual_super: Decimal::ZERO,
                annual_taxes: Decimal::ZERO,
                annual_income_tax: Decimal::ZERO,
                annual_med_levy: Decimal::ZERO,
                annual_lio: Decimal::ZERO,
            })
        }
    }

    fn create_test_state() -> AppState {
        AppState::with_configured_divisors(&ConfigLoader::builtin(), Arc::new(EchoService))
    }

    fn post_salary(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/salary")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_submission_returns_202() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_salary(r#"{ "salary": "52000", "super_rate": "11" }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let json = body_json(response).await;
        assert_eq!(json["status"], "published");
        assert_eq!(json["subscribers"], 1);
    }

    #[tokio::test]
    async fn test_zero_salary_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(post_salary(r#"{ "salary": "0", "super_rate": "11" }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Please enter valid salary with number format");
        assert_eq!(
            state.notifications().messages(),
            vec!["Please enter valid salary with number format".to_string()]
        );
    }

    #[tokio::test]
    async fn test_both_fields_invalid_returns_combined_message() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_salary(r#"{ "salary": "abc", "super_rate": "xyz" }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["message"],
            "Please enter valid salary and superannuation rate with number format"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_salary("{ not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_salary_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_salary(r#"{ "super_rate": "11" }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_form_reports_defaults_and_options() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/salary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["pay_period"], "Annually");
        assert_eq!(json["tax_year"], "2023 - 2024");
        assert_eq!(json["time_period_options"].as_array().unwrap().len(), 6);
        assert_eq!(json["time_period_options"][0]["value"], "Annually");
    }

    #[tokio::test]
    async fn test_breakdown_before_any_calculation() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/breakdown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["income"][0]["label"], "Take home pay");
        assert_eq!(json["income"][0]["annual"], "0.00");
        assert_eq!(json["calculations"], 0);
    }
}
