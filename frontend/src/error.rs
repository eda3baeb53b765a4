use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("window object is not available")]
    MissingWindow,
    #[error("document is not available")]
    MissingDocument,
    #[error("scroll offset {0} is not a finite number")]
    InvalidScrollOffset(f64),
    #[error("failed to {action}: {message}")]
    Dom {
        action: &'static str,
        message: String,
    },
    #[error("invalid site configuration: {0}")]
    Config(String),
    #[error("failed to mount stylesheet: {0}")]
    Style(String),
}

/// Adapter for `map_err` on web-sys calls.
pub fn dom_error(action: &'static str) -> impl FnOnce(JsValue) -> PageError {
    move |value| PageError::Dom {
        action,
        message: value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    }
}
