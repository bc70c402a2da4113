pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::form::handlers as form;
use crate::policy::handlers as policy;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Recommendation
        .route("/recommend", post(recommend::handle_recommend))
        .route("/recommend/enhance", post(recommend::handle_enhance))
        // Policy simplification
        .route(
            "/policy/simplify",
            post(policy::handle_simplify).layer(DefaultBodyLimit::max(policy::MAX_PDF_BYTES)),
        )
        // Static catalog
        .route("/survey", get(catalog::handle_survey))
        .route("/survey/questions", get(catalog::handle_survey_questions))
        .route("/claim/guide", get(catalog::handle_claim_guide))
        .route("/admin", get(catalog::handle_admin))
        .route("/admin/stats", get(catalog::handle_admin_stats))
        // Forms
        .route("/form", get(form::handle_form))
        .route("/form/assist", post(form::handle_form_assist))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::LlmConfig;
    use crate::llm_client::{LlmClient, LlmError, Provider, TextGenerator};
    use crate::recommend::refiner::FALLBACK_TRUST_REASON;
    use crate::recommend::RuleTable;

    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn app_with(llm: Arc<dyn TextGenerator>) -> Router {
        build_router(AppState::new(
            llm,
            RuleTable::default(),
            Duration::from_secs(5),
        ))
    }

    fn offline_app() -> Router {
        let client = LlmClient::new(LlmConfig::unconfigured(Provider::OpenAi)).unwrap();
        app_with(Arc::new(client))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn multipart_upload(file_name: &str, field: &str, content: &[u8]) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/policy/simplify")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = offline_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn recommend_returns_rule_engine_result() {
        let response = offline_app()
            .oneshot(post_json(
                "/recommend",
                json!({"occupation": "farmer", "income": 12000, "family_size": 4}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["plans"].as_array().unwrap().len(), 3);
        assert_eq!(body["plans"][0]["name"], "Crop Insurance");
        assert_eq!(body["trust_score"], 0.88);
        assert_eq!(body["total_premium"], 7300.0);
        assert!(body.get("improved_plans").is_none());
    }

    #[tokio::test]
    async fn recommend_with_refine_falls_back_when_offline() {
        let response = offline_app()
            .oneshot(post_json(
                "/recommend?refine=true",
                json!({"occupation": "teacher", "income": 50000, "family_size": 2}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["enrichment_source"], "fallback");
        assert_eq!(body["plans"][0]["name"], "Standard Life Cover");
        assert_eq!(body["improved_plans"][0]["trust_reason"], FALLBACK_TRUST_REASON);
    }

    #[tokio::test]
    async fn enhance_accepts_free_form_plans() {
        let canned = json!({"improved_plans": [{"name": "Micro Insurance", "trust_score": 0.7}]});
        let app = app_with(Arc::new(CannedGenerator(format!("Result: {canned}"))));

        let response = app
            .oneshot(post_json(
                "/recommend/enhance",
                json!({
                    "plans": [{"name": "Micro Insurance", "estimated_premium": "300"}],
                    "survey_data": {"income": "9000"}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["enrichment_source"], "llm");
        assert_eq!(body["improved_plans"], canned["improved_plans"]);
    }

    #[tokio::test]
    async fn enhance_rejects_empty_plan_list() {
        let response = offline_app()
            .oneshot(post_json("/recommend/enhance", json!({"plans": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn claim_guide_lookup() {
        let response = offline_app()
            .oneshot(get_request("/claim/guide?policy_type=%20Crop"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["policy_type"], "crop");
        assert_eq!(body["guide"]["expected_time"], "7-21 days (depends on inspection)");

        let response = offline_app()
            .oneshot(get_request("/claim/guide?policy_type=motor"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = offline_app().oneshot(get_request("/claim/guide")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn survey_questions_listed() {
        let response = offline_app()
            .oneshot(get_request("/survey/questions"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["questions"][0]["key"], "family_size");
    }

    #[tokio::test]
    async fn admin_stats_are_static() {
        let response = offline_app().oneshot(get_request("/admin/stats")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total_chats"], 1245);
        assert_eq!(body["recommendation_counts"]["crop"], 420);
    }

    #[tokio::test]
    async fn form_assist_reports_missing_fields() {
        let response = offline_app()
            .oneshot(post_json(
                "/form/assist",
                json!({"name": "Sita", "aadhaar": "1234 5678 9012"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["missing_fields"], json!(["address", "phone", "age"]));
        assert_eq!(body["aadhaar_valid"], true);
    }

    #[tokio::test]
    async fn simplify_rejects_non_pdf_upload() {
        let response = offline_app()
            .oneshot(multipart_upload("notes.txt", "pdf", b"hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "Only PDF files are supported."
        );
    }

    #[tokio::test]
    async fn simplify_requires_pdf_field() {
        let response = offline_app()
            .oneshot(multipart_upload("policy.pdf", "document", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn simplify_rejects_unreadable_pdf() {
        let response = offline_app()
            .oneshot(multipart_upload("policy.pdf", "pdf", b"not really a pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"]["message"],
            "Could not extract text from PDF."
        );
    }
}
