use std::sync::Arc;

use ipl_stats_core::{ModelChoice, ProviderConfig, ResultSet};
use ipl_stats_llm::ProviderRouter;

use crate::ask_service::{AskService, EMPTY_QUESTION_MESSAGE};
use crate::error::ServiceError;
use crate::pipeline::QueryPipeline;
use crate::test_support::StubExecutor;

fn service(google_key: Option<&str>, groq_key: Option<&str>) -> AskService {
    let executor = Arc::new(StubExecutor::returning(ResultSet::default()));
    let pipeline = QueryPipeline::new(executor, "SCHEMA", 10);
    // Port 9 (discard) is never contacted by these tests.
    let endpoint = |key: Option<&str>| ProviderConfig {
        api_key: key.map(str::to_owned),
        base_url: "http://127.0.0.1:9".to_owned(),
    };
    let router = ProviderRouter::new(endpoint(google_key), endpoint(groq_key)).unwrap();
    AskService::new(pipeline, router)
}

#[tokio::test]
async fn test_empty_question_rejected() {
    let svc = service(Some("g"), Some("q"));
    for question in ["", "   ", "\n\t"] {
        let err = svc.ask(question, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(err.to_string(), EMPTY_QUESTION_MESSAGE);
        assert_eq!(err.stage(), None);
    }
}

#[tokio::test]
async fn test_overlong_question_rejected() {
    let svc = service(Some("g"), None);
    let err = svc.ask(&"six ".repeat(1_000), None).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert!(err.to_string().contains("too long"));
}

#[tokio::test]
async fn test_unsupported_model_rejected() {
    let svc = service(Some("g"), Some("q"));
    let err = svc.ask("most sixes", Some("gpt-4o")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Model(_)));
    assert_eq!(err.to_string(), "Unsupported model: gpt-4o");
}

#[tokio::test]
async fn test_missing_provider_key_is_not_configured() {
    let svc = service(Some("g"), None);
    let err = svc.ask("most sixes", Some("llama-3.3-70b-versatile")).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotConfigured(_)));
    assert!(err.to_string().contains("GROQ_API_KEY"));
    assert!(!err.is_upstream());
}

#[test]
fn test_models_report_availability() {
    let svc = service(None, Some("q"));
    assert_eq!(
        svc.models(),
        vec![
            (ModelChoice::Gemini20Flash, false),
            (ModelChoice::Llama33Versatile, true),
            (ModelChoice::Gemini25FlashPreview, false),
        ]
    );
    assert_eq!(svc.table_info(), "SCHEMA");
}
