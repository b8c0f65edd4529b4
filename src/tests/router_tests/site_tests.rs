// src/tests/router_tests/site_tests.rs

use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, stub_state};

#[test]
fn home_links_both_views() {
    let (state, _) = stub_state(Ok(vec![]), Ok(vec![]), 10);

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains(r#"href="/search""#));
    assert!(body.contains(r#"href="/liked""#));
}

#[test]
fn serves_embedded_assets() {
    let (state, _) = stub_state(Ok(vec![]), Ok(vec![]), 10);

    let css = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(css.headers()["Content-Type"], "text/css; charset=utf-8");

    let js = body_string(handle(get("/static/map.js"), &state).unwrap());
    assert!(js.contains("data-markers"));
}

#[test]
fn unknown_route_is_a_404_page() {
    let (state, _) = stub_state(Ok(vec![]), Ok(vec![]), 10);

    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let page = error_response(err);
    assert_eq!(page.status(), 404);
    assert!(body_string(page).contains(r#"data-status="404""#));
}

#[test]
fn only_get_is_routed() {
    let (state, _) = stub_state(Ok(vec![]), Ok(vec![]), 10);

    let req = http::Request::builder()
        .method("POST")
        .uri("/liked")
        .body(astra::Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}
