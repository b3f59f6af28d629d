//! Request ID generation and response header helpers.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(header_value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
        }
        Err(source) => {
            warn!(
                request_id,
                "could not encode request id for response header: {source}"
            );
        }
    }
}

pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_header_gets_fresh_id() {
        let id = resolve_request_id(Some("   ".to_string()));

        assert!(Uuid::parse_str(&id).is_ok(), "expected a generated uuid, got {id}");
    }

    #[test]
    fn test_existing_header_is_kept() {
        assert_eq!(resolve_request_id(Some("req-1".to_string())), "req-1");
    }

    #[test]
    fn test_missing_status_defaults_to_ok() {
        assert_eq!(response_status_or_ok(None), StatusCode::OK);
        assert_eq!(
            response_status_or_ok(Some(StatusCode::BAD_GATEWAY)),
            StatusCode::BAD_GATEWAY
        );
    }
}
