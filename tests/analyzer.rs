use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use fake_news_detector::analyzer::EMPTY_INPUT_WARNING;
use fake_news_detector::{Analyzer, GenerateError, Outcome, TextGenerator};

struct StubGenerator {
    reply: Result<String, GenerateError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl StubGenerator {
    fn replying(text: &str) -> Self {
        Self::with(Ok(text.to_string()))
    }

    fn failing(error: GenerateError) -> Self {
        Self::with(Err(error))
    }

    fn with(reply: Result<String, GenerateError>) -> Self {
        StubGenerator {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((model.to_string(), prompt.to_string()));
        self.reply.clone()
    }
}

#[tokio::test]
async fn analyze_passes_model_output_through() {
    let stub = StubGenerator::replying("Likelihood: Low. Confidence: 80%.");
    let analyzer = Analyzer::new(&stub, "models/test-model");

    let result = analyzer.analyze("RBI kept repo rate at 6.5%.").await;

    assert_eq!(result.unwrap(), "Likelihood: Low. Confidence: 80%.");
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn analyze_sends_prompt_with_article_to_configured_model() {
    let stub = StubGenerator::replying("ok");
    let analyzer = Analyzer::new(&stub, "models/test-model");

    analyzer.analyze("RBI kept repo rate at 6.5%.").await.unwrap();

    let (model, prompt) = stub.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(model, "models/test-model");
    assert!(prompt.contains("News Article to Analyze:"));
    assert!(prompt.contains("RBI kept repo rate at 6.5%."));
}

#[tokio::test]
async fn analyze_propagates_typed_errors() {
    let stub = StubGenerator::failing(GenerateError::Quota("Resource has been exhausted".into()));
    let analyzer = Analyzer::new(&stub, "m");

    let err = analyzer.analyze("some article").await.unwrap_err();

    assert!(err.is_quota());
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn submit_rejects_empty_input_without_calling_model() {
    let stub = StubGenerator::replying("should not be used");
    let analyzer = Analyzer::new(&stub, "m");

    let outcome = analyzer.submit("").await;

    assert_eq!(outcome, Outcome::Warning(EMPTY_INPUT_WARNING));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn submit_reports_failure_as_message() {
    let stub = StubGenerator::failing(GenerateError::Transport("connection refused".into()));
    let analyzer = Analyzer::new(&stub, "m");

    let outcome = analyzer.submit("Breaking: aliens endorse candidate").await;

    assert!(!outcome.is_complete());
    let message = outcome.to_string();
    assert!(message.starts_with("An error occurred during analysis:"));
    assert!(message.contains("connection refused"));
    assert!(outcome
        .hints()
        .iter()
        .any(|h| h.contains("network issues")));
}

#[tokio::test]
async fn submit_quota_failure_suggests_waiting() {
    let stub = StubGenerator::failing(GenerateError::Quota("429".into()));
    let analyzer = Analyzer::new(&stub, "m");

    let outcome = analyzer.submit("article").await;

    assert!(outcome.hints().iter().any(|h| h.contains("wait a minute")));
}

#[tokio::test]
async fn submit_completes_with_exact_text() {
    let stub = StubGenerator::replying("Likelihood: Low. Confidence: 80%.");
    let analyzer = Analyzer::new(Box::new(stub) as Box<dyn TextGenerator>, "m");

    let outcome = analyzer.submit("RBI kept repo rate at 6.5%.").await;

    assert_eq!(
        outcome,
        Outcome::Complete("Likelihood: Low. Confidence: 80%.".to_string())
    );
}
