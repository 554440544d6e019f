use std::fmt;

use tracing::{info, warn};

use crate::error::GenerateError;
use crate::prompt::fake_news_detection_prompt;
use crate::TextGenerator;

pub const EMPTY_INPUT_WARNING: &str = "Please paste a news article into the text area to analyze.";

/// Runs the detection prompt against one model.
pub struct Analyzer<G> {
    generator: G,
    model: String,
}

/// What a user-facing surface shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty input; no request was made.
    Warning(&'static str),
    Complete(String),
    Failed(GenerateError),
}

impl Outcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, Outcome::Complete(_))
    }

    /// Extra lines shown under a failure.
    pub fn hints(&self) -> Vec<&'static str> {
        match self {
            Outcome::Failed(e) => e.hints(),
            _ => vec![],
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Warning(message) => f.write_str(message),
            Outcome::Complete(text) => f.write_str(text),
            Outcome::Failed(e) => write!(f, "An error occurred during analysis: {}", e),
        }
    }
}

impl<G: TextGenerator> Analyzer<G> {
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Analyzer {
            generator,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the article to the model and returns its text unchanged.
    pub async fn analyze(&self, article_text: &str) -> Result<String, GenerateError> {
        let prompt = fake_news_detection_prompt(article_text);
        info!(
            "Analyzing article ({} characters) with {}",
            article_text.chars().count(),
            self.model
        );
        self.generator.generate(&self.model, &prompt).await
    }

    /// Like `analyze`, but refuses empty input and folds failures into an
    /// `Outcome` the caller can display.
    pub async fn submit(&self, article_text: &str) -> Outcome {
        if article_text.is_empty() {
            warn!("Refusing to analyze an empty article");
            return Outcome::Warning(EMPTY_INPUT_WARNING);
        }
        match self.analyze(article_text).await {
            Ok(text) => Outcome::Complete(text),
            Err(e) => {
                warn!("Analysis failed: {}", e);
                Outcome::Failed(e)
            }
        }
    }
}
