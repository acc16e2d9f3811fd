use super::*;

#[test]
fn opportunity_endpoint_formats_expected_path() {
    assert_eq!(opportunity_endpoint(42), "/api/opportunities/42");
}

#[test]
fn search_url_returns_base_for_blank_query() {
    assert_eq!(search_url("/api/opportunities", ""), "/api/opportunities");
    assert_eq!(search_url("/api/opportunities", "   "), "/api/opportunities");
}

#[test]
fn search_url_encodes_query() {
    assert_eq!(
        search_url("/api/opportunities", " food bank & pantry "),
        "/api/opportunities?search=food%20bank%20%26%20pantry"
    );
}

#[test]
fn search_url_appends_to_existing_query() {
    assert_eq!(search_url("/api/opportunities?page=2", "trail"), "/api/opportunities?page=2&search=trail");
}

#[test]
fn basic_auth_header_encodes_credentials() {
    assert_eq!(basic_auth_header("jordan", "secret"), "Basic am9yZGFuOnNlY3JldA==");
}

#[test]
fn bearer_auth_header_prefixes_token() {
    assert_eq!(bearer_auth_header("T"), "Bearer T");
}

#[test]
fn status_error_display_uses_reason_phrase() {
    assert_eq!(ApiError::status(401, "UNAUTHORIZED").to_string(), "401 UNAUTHORIZED");
}

#[test]
fn status_error_falls_back_when_reason_missing() {
    assert_eq!(ApiError::status(500, "  ").to_string(), "500 Request Failed");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on(fetch_json("/api/opportunities"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
