use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Quota exceeded (429): {0}")]
    Quota(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("No text in response")]
    EmptyResponse,
}

impl GenerateError {
    /// Maps a non-success HTTP response onto the taxonomy. `api_status` is
    /// the `error.status` string of a Google error body, when present.
    pub fn from_status(status: u16, api_status: Option<&str>, message: String) -> Self {
        match (status, api_status) {
            (429, _) | (_, Some("RESOURCE_EXHAUSTED")) => GenerateError::Quota(message),
            (401, _) | (403, _) | (_, Some("UNAUTHENTICATED")) | (_, Some("PERMISSION_DENIED")) => {
                GenerateError::Configuration(message)
            }
            (400, _) if message.to_lowercase().contains("api key") => {
                GenerateError::Configuration(message)
            }
            (404, _) | (_, Some("NOT_FOUND")) => GenerateError::InvalidModel(message),
            _ => GenerateError::Api { status, message },
        }
    }

    pub fn is_quota(&self) -> bool {
        matches!(self, GenerateError::Quota(_))
    }

    /// Suggestions shown to the user next to the error message.
    pub fn hints(&self) -> Vec<&'static str> {
        let mut hints =
            vec!["Please ensure your API key is correct and you have an active internet connection."];
        match self {
            GenerateError::Quota(_) => hints.push(
                "If you encounter a quota error (429), wait a minute or two and try again. \
                 Consider using 'gemini-1.5-flash-latest' for higher free-tier limits.",
            ),
            GenerateError::InvalidModel(_) => hints.push(
                "Also check if the model is available in your region or for your API key.",
            ),
            _ => hints.push(
                "This could be due to quota limits, network issues, or an invalid model name.",
            ),
        }
        hints
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerateError::InvalidResponse(e.to_string())
        } else {
            GenerateError::Transport(e.to_string())
        }
    }
}
