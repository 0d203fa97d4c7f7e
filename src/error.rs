//! API Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("не удалось сформировать запрос: {0}")]
    Request(String),

    #[error("сеть недоступна: {0}")]
    Network(String),

    #[error("сервер ответил {status}")]
    Status { status: u16 },

    #[error("некорректный ответ сервера: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn network(value: JsValue) -> Self {
        ApiError::Network(js_error_text(&value))
    }

    pub(crate) fn request(value: JsValue) -> Self {
        ApiError::Request(js_error_text(&value))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Best-effort message out of a thrown JS value
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status { status: 422 };
        assert_eq!(err.to_string(), "сервер ответил 422");
    }

    #[test]
    fn test_json_errors_become_decode() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
