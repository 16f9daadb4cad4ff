use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },

    #[error("'{0}' not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl StockroomError {
    /// Message suitable for inline display next to a list or inside a modal.
    ///
    /// `Validation` carries the backend's own message verbatim; `Server`
    /// falls back to the raw body when one was retained.
    pub fn display_message(&self) -> String {
        match self {
            StockroomError::Validation(msg) => msg.clone(),
            StockroomError::Server { status, body } => {
                if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    format!("HTTP {status}: {body}")
                }
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for StockroomError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => StockroomError::Server {
                status: status.as_u16(),
                body: String::new(),
            },
            None => StockroomError::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StockroomError>;
