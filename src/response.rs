//! Status-code translation and body decoding for a fully received response.
//!
//! Kept free of I/O so the error policy can be tested without a server.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone)]
pub(crate) struct Reply {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    fn is_json(&self) -> bool {
        self.content_type.contains("application/json")
    }

    /// Human-readable error text: the `detail` field of a JSON error body,
    /// else the trimmed body, else `HTTP <status>`.
    pub fn detail(&self) -> String {
        if self.is_json() {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&self.body) {
                match map.get("detail") {
                    Some(Value::String(s)) => return s.clone(),
                    Some(other) => return other.to_string(),
                    None => {}
                }
            }
        }
        match self.body.trim() {
            "" => format!("HTTP {}", self.status),
            text => text.to_string(),
        }
    }

    /// Pass 2xx replies through; turn everything else into a typed error.
    pub fn error_for_status(self) -> Result<Self> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(Error::http(self.status, self.detail()))
        }
    }

    /// Decode the body into `T`, whatever content type the server declared.
    pub fn json<T: DeserializeOwned>(&self, what: &str) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            Error::malformed(
                self.status,
                format!("malformed {what} response: {e}"),
                Some(Box::new(e)),
            )
        })
    }

    /// JSON bodies are decoded as-is; anything else is wrapped as `{"raw": text}`.
    pub fn into_value(self) -> Result<Value> {
        if self.content_type.starts_with("application/json") {
            self.json("JSON")
        } else {
            Ok(serde_json::json!({ "raw": self.body }))
        }
    }
}
