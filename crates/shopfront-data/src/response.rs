//! HTTP response handling.

use crate::ApiError;
use serde::de::DeserializeOwned;

/// A catalog API response, decoupled from the transport.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Status text reported by the server.
    pub status_text: String,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, status_text: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Whether the response carries a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, ApiError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| ApiError::Parse(format!("invalid UTF-8: {}", e)))
    }

    /// Decode the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Convert to a `Result`, mapping non-2xx statuses to `ApiError::Request`.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Request {
                status: self.status,
                status_text: self.status_text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, status_text: &str, body: &[u8]) -> Response {
        Response::new(status, status_text, body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, "OK", b"").is_success());
        assert!(make_response(204, "No Content", b"").is_success());
        assert!(!make_response(301, "Moved Permanently", b"").is_success());
        assert!(!make_response(404, "Not Found", b"").is_success());
    }

    #[test]
    fn test_response_text() {
        let resp = make_response(200, "OK", b"hello");
        assert_eq!(resp.text().unwrap(), "hello");
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, "OK", &[0xff, 0xfe]);
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_response_json() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Data {
            value: i32,
        }

        let resp = make_response(200, "OK", br#"{"value": 42}"#);
        let data: Data = resp.json().unwrap();
        assert_eq!(data, Data { value: 42 });
    }

    #[test]
    fn test_error_for_status_success_passes_through() {
        let resp = make_response(200, "OK", b"body");
        assert!(resp.error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_carries_status_text() {
        let resp = make_response(500, "Internal Server Error", b"");
        match resp.error_for_status() {
            Err(ApiError::Request {
                status,
                status_text,
            }) => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
