//! Response construction.
//!
//! # Responsibilities
//! - Build HTML page and not-found responses
//! - Echo the request id on the way out

use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::http::request::{RequestId, X_REQUEST_ID};

/// 200 response carrying an HTML document.
pub fn page(document: String, request_id: Option<&RequestId>) -> Response {
    with_request_id(Html(document).into_response(), request_id)
}

/// 404 response for a path absent from the route table.
pub fn not_found(request_id: Option<&RequestId>) -> Response {
    with_request_id(
        (StatusCode::NOT_FOUND, "page not found").into_response(),
        request_id,
    )
}

fn with_request_id(mut response: Response, request_id: Option<&RequestId>) -> Response {
    if let Some(id) = request_id {
        if let Ok(value) = HeaderValue::from_str(id.as_str()) {
            response.headers_mut().insert(X_REQUEST_ID, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_html() {
        let response = page("<p>hi</p>".to_string(), None);
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[test]
    fn test_request_id_is_echoed() {
        let id = RequestId::from("abc-123");
        let response = not_found(Some(&id));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(X_REQUEST_ID).unwrap(),
            &HeaderValue::from_static("abc-123")
        );
    }
}
