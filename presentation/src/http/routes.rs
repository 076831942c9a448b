//! API routes

use super::dto::{CheckRequest, GenerateRequest, GenerateResponse, HealthResponse};
use super::error::ApiError;
use super::state::AppState;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use quizcheck_application::{
    CheckAnswerOutput, CheckAnswerUseCase, GenerateQuestionsUseCase, ValidateBatchUseCase,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

type SharedState = Arc<AppState>;

/// Build the full router with request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/questions", post(generate_questions))
        .route("/api/check", post(check_answer))
        .route("/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

async fn generate_questions(
    State(state): State<SharedState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;
    let delegate = state.delegate()?;

    let validator =
        ValidateBatchUseCase::new(delegate.clone()).with_diagnostics(state.diagnostics());
    let use_case = GenerateQuestionsUseCase::new(delegate, validator);
    let questions = use_case.execute(request.into_input()).await?;

    info!(returned = questions.len(), "Questions generated");
    Ok(Json(GenerateResponse { questions }))
}

async fn check_answer(
    State(state): State<SharedState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckAnswerOutput>, ApiError> {
    let Json(request) = payload?;
    let delegate = state.delegate()?;

    let output = CheckAnswerUseCase::new(delegate)
        .execute(request.into_input())
        .await?;
    Ok(Json(output))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use quizcheck_application::{
        DelegateCredential, DiagnosticSink, GatewayError, LlmGateway, StaticCredential,
    };
    use quizcheck_domain::{Rejection, Subject};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tower::ServiceExt;

    // ==================== Test Mocks ====================

    /// Gateway that hands out queued replies in order.
    struct QueuedGateway {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: Mutex<usize>,
    }

    impl QueuedGateway {
        fn new(replies: Vec<Result<Value, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(|v| v.to_string()))
                        .collect(),
                ),
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LlmGateway for QueuedGateway {
        async fn complete(
            &self,
            _credential: &DelegateCredential,
            _system_prompt: &str,
            _task: &str,
        ) -> Result<String, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::ConnectionError("no reply queued".into())))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        positions: Mutex<Vec<usize>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn record(&self, _subject: &Subject, rejection: &Rejection) {
            self.positions.lock().unwrap().push(rejection.position);
        }
    }

    fn state_with(gateway: Arc<QueuedGateway>) -> AppState {
        AppState::new(
            gateway,
            Arc::new(StaticCredential(Some("sk-test-12345678".to_string()))),
        )
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn check_body(choices: &[&str], user_index: i64) -> Value {
        json!({
            "subject": "math",
            "question": {
                "prompt": "What is 1/2 + 1/4?",
                "choices": choices,
                "userIndex": user_index
            }
        })
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_health() {
        let app = router(state_with(QueuedGateway::new(vec![])));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_questions_keep_only_confirmed_candidates() {
        let gateway = QueuedGateway::new(vec![
            Ok(json!({"questions": [
                {"prompt": "What is 1/2 + 1/4?", "choices": ["1/4", "3/4", "1", "1/2"],
                 "topic": "fractions", "difficulty": "easy"},
                {"prompt": "Pick one", "choices": ["1", "2", "3"],
                 "topic": "fractions", "difficulty": "easy"},
                {"prompt": "What is 2 * 3?", "choices": [5, 6, 7, 8],
                 "topic": "fractions", "difficulty": "easy"}
            ]})),
            Ok(json!({"finalAnswer": 0.75, "solution": "1/2 + 1/4 = 3/4"})),
            Ok(json!({"finalAnswer": "6", "solution": "2 * 3 = 6"})),
        ]);
        let sink = Arc::new(RecordingSink::default());
        let app = router(state_with(gateway.clone()).with_diagnostics(sink.clone()));

        let (status, body) = post_json(
            app,
            "/api/questions",
            json!({"subject": "math", "topic": "fractions", "difficulty": "easy", "count": 3}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0]["correctIndex"], 1);
        assert_eq!(questions[0]["correctAnswer"], "3/4");
        assert_eq!(questions[1]["correctIndex"], 1);
        assert_eq!(questions[1]["correctAnswer"], "6");
        assert!(questions[0].get("passage").is_none());

        // Generation plus two solves; the 3-choice candidate never reached the delegate
        assert_eq!(gateway.calls(), 3);
        assert_eq!(*sink.positions.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_questions_drop_unreadable_entry_only() {
        let gateway = QueuedGateway::new(vec![
            Ok(json!({"questions": [
                {"prompt": "What is 1/2 + 1/4?", "choices": ["1/4", "3/4", "1", "1/2"]},
                {"prompt": "Broken", "choices": ["1", "2", null, "4"]}
            ]})),
            Ok(json!({"finalAnswer": 0.75, "solution": "1/2 + 1/4 = 3/4"})),
        ]);
        let sink = Arc::new(RecordingSink::default());
        let app = router(state_with(gateway.clone()).with_diagnostics(sink.clone()));

        let (status, body) =
            post_json(app, "/api/questions", json!({"subject": "math", "count": 2})).await;

        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["correctAnswer"], "3/4");
        assert_eq!(gateway.calls(), 2);
        assert_eq!(*sink.positions.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_questions_with_unreachable_solver_returns_empty_list() {
        let gateway = QueuedGateway::new(vec![Ok(json!({"questions": [
            {"prompt": "What is 1 + 1?", "choices": ["1", "2", "3", "4"]}
        ]}))]);
        let app = router(state_with(gateway));

        let (status, body) =
            post_json(app, "/api/questions", json!({"subject": "math", "count": 1})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"], json!([]));
    }

    #[tokio::test]
    async fn test_questions_generation_failure_is_fatal() {
        let gateway = QueuedGateway::new(vec![Err(GatewayError::Status {
            status: 503,
            body: "overloaded".into(),
        })]);
        let app = router(state_with(gateway));

        let (status, body) =
            post_json(app, "/api/questions", json!({"subject": "math"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "upstream_error");
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration_error() {
        let gateway = QueuedGateway::new(vec![]);
        let app = router(AppState::new(gateway.clone(), Arc::new(StaticCredential(None))));

        let (status, body) =
            post_json(app, "/api/check", check_body(&["1/4", "3/4", "1", "1/2"], 1)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "configuration_error");
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_check_correct_answer() {
        let gateway = QueuedGateway::new(vec![Ok(json!({
            "finalAnswer": 0.75,
            "solution": "1/2 + 1/4 = 3/4"
        }))]);
        let app = router(state_with(gateway));

        let (status, body) =
            post_json(app, "/api/check", check_body(&["1/4", "3/4", "1", "1/2"], 1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["correctIndex"], 1);
        assert_eq!(body["isCorrect"], true);
        assert_eq!(body["solution"], "1/2 + 1/4 = 3/4");
    }

    #[tokio::test]
    async fn test_check_wrong_choice_count_is_bad_request() {
        let gateway = QueuedGateway::new(vec![]);
        let app = router(state_with(gateway.clone()));

        let (status, body) = post_json(app, "/api/check", check_body(&["1", "2", "3"], 0)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "shape_error");
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_check_no_match_is_unprocessable() {
        let gateway = QueuedGateway::new(vec![Ok(json!({
            "finalAnswer": 10,
            "solution": "..."
        }))]);
        let app = router(state_with(gateway));

        let (status, body) =
            post_json(app, "/api/check", check_body(&["1/4", "3/4", "1", "1/2"], 1)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "match_error");
    }

    #[tokio::test]
    async fn test_check_upstream_failure_is_bad_gateway() {
        let gateway = QueuedGateway::new(vec![Err(GatewayError::Timeout)]);
        let app = router(state_with(gateway));

        let (status, body) =
            post_json(app, "/api/check", check_body(&["1/4", "3/4", "1", "1/2"], 1)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "upstream_error");
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_envelope() {
        let app = router(state_with(QueuedGateway::new(vec![])));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_request");
    }
}
