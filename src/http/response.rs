//! HTTP response building module
//!
//! Builders for every response the server sends. None of them panic: a
//! builder failure is logged and replaced by a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::ext::ReasonPhrase;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Build 200 response with pretty-printed (2-space) JSON body
pub fn build_json_response<T: Serialize>(body: &T, is_head: bool) -> Response<Full<Bytes>> {
    match serde_json::to_string_pretty(body) {
        Ok(json) => build_ok_response(json, CONTENT_TYPE_JSON, is_head),
        Err(e) => {
            log_error(&format!("Failed to serialize response: {e}"));
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", CONTENT_TYPE_JSON)
                .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
        }
    }
}

/// Build 200 plain text response
pub fn build_text_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    build_ok_response(content, CONTENT_TYPE_TEXT, is_head)
}

fn build_ok_response(content: String, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response for unknown paths
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 404 response carrying `reason` as both reason phrase and body
pub fn build_not_found_response(reason: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", CONTENT_TYPE_TEXT)
        .extension(ReasonPhrase::from_static(reason.as_bytes()))
        .body(Full::new(Bytes::from(reason)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(reason)))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", CONTENT_TYPE_TEXT)
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    log_error(&format!("Failed to build {status} response: {error}"));
}

fn log_error(message: &str) {
    crate::logger::log_error(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_is_pretty_printed() {
        let resp = build_json_response(&serde_json::json!({ "id": ["a", "b"] }), false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], CONTENT_TYPE_JSON);
        assert_eq!(body_string(resp).await, "{\n  \"id\": [\n    \"a\",\n    \"b\"\n  ]\n}");
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let resp = build_text_response("abc\ndef".to_string(), true);
        assert_eq!(resp.headers()["Content-Length"], "7");
        assert_eq!(body_string(resp).await, "");
    }

    #[tokio::test]
    async fn test_not_found_reason_phrase() {
        let resp = build_not_found_response("ID Not Found");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let reason = resp.extensions().get::<ReasonPhrase>().unwrap();
        assert_eq!(reason.as_bytes(), b"ID Not Found");
        assert_eq!(body_string(resp).await, "ID Not Found");
    }

    #[tokio::test]
    async fn test_plain_404_and_405() {
        let resp = build_404_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(resp).await, "404 Not Found");

        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }
}
