use super::*;

#[test]
fn deliver_passes_body_through_unchanged() {
    let body = serde_json::json!({ "items": [{ "id": 1, "name": "X" }] });
    let mut got = None;
    deliver(Ok(body.clone()), |v| got = Some(v), |_| panic!("no error expected"));
    assert_eq!(got, Some(body));
}

#[test]
fn deliver_routes_failures_to_error_callback() {
    let mut got = None;
    deliver(
        Err(ApiError::status(500, "INTERNAL SERVER ERROR")),
        |_| panic!("no result expected"),
        |e| got = Some(e),
    );
    assert_eq!(got, Some(ApiError::status(500, "INTERNAL SERVER ERROR")));
}

#[test]
fn deliver_does_not_interpret_shape() {
    let mut got = None;
    deliver(Ok(serde_json::json!([1, 2, 3])), |v| got = Some(v), |_| panic!("no error expected"));
    assert_eq!(got, Some(serde_json::json!([1, 2, 3])));
}
