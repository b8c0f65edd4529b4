// src/tests/router_tests/search_tests.rs

use crate::domain::sort::{SortField, SortOrder};
use crate::domain::{FetchError, SortSpec};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, estates, get, stub_state};

#[test]
fn search_shell_carries_the_sort_into_the_results_url() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(3)), 10);

    let body = body_string(handle(get("/search?sort=price-ascend&view=table"), &state).unwrap());

    assert!(body.contains("/search/results?current=price-ascend"));
    assert!(body.contains(r#"<option value="price-ascend" selected>"#));
    assert!(body.contains(r#"id="tab-table" value="table" checked"#));
    // the shell never fetches
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn picking_a_sort_option_queries_with_field_and_order() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(3)), 10);

    let body = body_string(
        handle(get("/search/results?current=modificationDate-descend&sort=price-ascend"), &state)
            .unwrap(),
    );

    let queries = seen.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].sort, SortSpec::new(SortField::Price, SortOrder::Ascend));
    assert_eq!(queries[0].offset, 0);
    assert_eq!(queries[0].limit, 10);
    assert!(!queries[0].only_liked);

    assert!(body.contains("(3 results)"));
    assert!(body.contains(r#"<option value="price-ascend" selected>"#));
}

#[test]
fn empty_pick_keeps_the_current_sort() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(1)), 10);

    let body = body_string(
        handle(get("/search/results?current=livingArea-descend&sort="), &state).unwrap(),
    );

    assert_eq!(
        seen.lock().unwrap()[0].sort,
        SortSpec::new(SortField::LivingArea, SortOrder::Descend)
    );
    assert!(body.contains("(1 result)"));
}

#[test]
fn unknown_sort_is_rejected() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(1)), 10);

    let err = handle(get("/search/results?sort=price-sideways"), &state).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn liked_filter_reaches_the_query() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(1)), 10);

    handle(get("/search/results?liked=true"), &state).unwrap();

    assert!(seen.lock().unwrap()[0].only_liked);
}

#[test]
fn grid_offers_the_next_page_while_results_remain() {
    let (state, _) = stub_state(Ok(vec![]), Ok(estates(5)), 2);

    let body = body_string(handle(get("/search/results"), &state).unwrap());

    assert!(body.contains("(5 results)"));
    assert!(body.contains("Load more"));
    assert!(body.contains("offset=2"));
}

#[test]
fn next_page_chunk_continues_until_the_end() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(5)), 2);

    let middle = body_string(
        handle(get("/search/more?current=price-descend&offset=2"), &state).unwrap(),
    );
    assert_eq!(middle.matches(r#"<article class="estate-card"#).count(), 2);
    assert!(middle.contains("offset=4"));

    let last = body_string(
        handle(get("/search/more?current=price-descend&offset=4"), &state).unwrap(),
    );
    assert_eq!(last.matches(r#"<article class="estate-card"#).count(), 1);
    assert!(!last.contains("Load more"));

    let queries = seen.lock().unwrap();
    assert_eq!(queries[0].offset, 2);
    assert_eq!(queries[1].offset, 4);
    assert_eq!(queries[1].sort, SortSpec::new(SortField::Price, SortOrder::Descend));
}

#[test]
fn next_page_needs_a_numeric_offset() {
    let (state, _) = stub_state(Ok(vec![]), Ok(estates(5)), 2);

    let missing = handle(get("/search/more"), &state).unwrap_err();
    assert_eq!(missing.status(), 400);

    let garbage = handle(get("/search/more?offset=two"), &state).unwrap_err();
    assert_eq!(garbage.status(), 400);
}

#[test]
fn offset_at_the_end_of_range_has_no_next_page() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(5)), 2);

    let resp = handle(get("/search/more?offset=18446744073709551615"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("Load more"));
    assert_eq!(body.matches(r#"<article class="estate-card"#).count(), 0);
    assert_eq!(seen.lock().unwrap()[0].offset, u64::MAX);
}

#[test]
fn search_failure_replaces_the_tabs() {
    let err = FetchError::http_status(500, vec!["resolver crashed".into()], "");
    let (state, _) = stub_state(Ok(vec![]), Err(err), 10);

    let body = body_string(handle(get("/search/results"), &state).unwrap());

    assert!(body.contains(r#"data-status="500""#));
    assert!(body.contains("resolver crashed"));
    assert!(!body.contains("result-tabs"));
    assert!(!body.contains("result-count"));
}

#[test]
fn search_export_uses_the_export_limit() {
    let (state, seen) = stub_state(Ok(vec![]), Ok(estates(3)), 2);

    let resp = handle(get("/search/export.xlsx?current=gardenArea-descend"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"estates_gardenArea-descend.xlsx\""
    );
    assert_eq!(seen.lock().unwrap()[0].limit, 100);
}
