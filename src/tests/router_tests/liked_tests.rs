// src/tests/router_tests/liked_tests.rs

use crate::domain::FetchError;
use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, estates, get, stub_state};

#[test]
fn liked_page_starts_in_loading_state() {
    let (state, _) = stub_state(Ok(estates(2)), Ok(vec![]), 10);

    let resp = handle(get("/liked"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"hx-get="/liked/results""#));
    assert!(body.contains(r#"aria-busy="true""#));
    assert!(!body.contains("Rue du Trône"));
}

#[test]
fn liked_results_show_decorated_estates() {
    let (state, _) = stub_state(Ok(estates(3)), Ok(vec![]), 10);

    let body = body_string(handle(get("/liked/results"), &state).unwrap());

    assert_eq!(body.matches(r#"<article class="estate-card"#).count(), 3);
    assert!(body.contains("350\u{202f}000 €"));
    assert!(body.contains("1050 Ixelles"));
    assert!(body.contains("05 Mar 2024 ("));
    assert!(!body.contains("Load more"));
}

#[test]
fn liked_results_map_not_found_status() {
    let err = FetchError::http_status(404, vec!["No user named lawrensylvan".into()], "{}");
    let (state, _) = stub_state(Err(err), Ok(vec![]), 10);

    let resp = handle(get("/liked/results"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"data-status="404""#));
    assert!(body.contains("Received status code 404"));
    assert!(body.contains("No user named lawrensylvan"));
    assert!(!body.contains("estate-grid"));
}

#[test]
fn liked_results_network_failure_is_generic() {
    let (state, _) = stub_state(
        Err(FetchError::network("connection refused")),
        Ok(vec![]),
        10,
    );

    let body = body_string(handle(get("/liked/results"), &state).unwrap());

    assert!(body.contains(r#"data-status="error""#));
    assert!(body.contains("connection refused"));
}

#[test]
fn liked_export_downloads_a_workbook() {
    let (state, _) = stub_state(Ok(estates(2)), Ok(vec![]), 10);

    let resp = handle(get("/liked/export.xlsx"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"liked_estates.xlsx\""
    );
    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn liked_export_failure_is_a_bad_gateway_page() {
    let (state, _) = stub_state(
        Err(FetchError::http_status(500, vec![], "down")),
        Ok(vec![]),
        10,
    );

    let err = handle(get("/liked/export.xlsx"), &state).unwrap_err();
    assert_eq!(err.status(), 502);

    let page = crate::responses::error_response(err);
    assert_eq!(page.status(), 502);
    assert!(body_string(page).contains(r#"data-status="500""#));
}
