use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that can happen while configuring reveal animations.
///
/// Nothing here is ever shown to a visitor. A section whose configuration
/// fails simply renders in its final resting state.
#[derive(Debug, Error)]
pub enum RevealError {
    #[error("invalid root margin `{0}`")]
    InvalidMargin(String),

    #[error("invalid trigger start `{0}`, expected something like `top 80%`")]
    InvalidTriggerStart(String),

    #[error("unknown ease `{0}`")]
    UnknownEase(String),

    #[error("failed to parse reveal config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("dom error: {0}")]
    Dom(String),
}

impl From<JsValue> for RevealError {
    fn from(value: JsValue) -> Self {
        RevealError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, RevealError>;
