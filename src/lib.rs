use async_trait::async_trait;

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logging;
pub mod prompt;

pub use analyzer::{Analyzer, Outcome};
pub use config::Config;
pub use error::GenerateError;
pub use gemini::{GeminiClient, ModelInfo};
pub use prompt::{fake_news_detection_prompt, Likelihood};

/// A remote text-generation capability: one prompt in, the model's text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError>;
}

#[async_trait]
impl<T> TextGenerator for &T
where
    T: TextGenerator + ?Sized,
{
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        (**self).generate(model, prompt).await
    }
}

#[async_trait]
impl<T> TextGenerator for Box<T>
where
    T: TextGenerator + ?Sized,
{
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        (**self).generate(model, prompt).await
    }
}
