use crate::domain::{decorate_all, select_sort, DisplayFormat, FetchState, Selection, SortSpec};
use crate::errors::ServerError;
use crate::graphql::{EstatePage, EstateSource, SearchQuery};
use crate::responses::{
    asset_response, download_response, html_response, ResultResp, XLSX_CONTENT_TYPE,
};
use crate::spreadsheets::export_estates_xlsx;
use crate::templates::components::{error_surface, grid_chunk, ErrorSurface, ViewTab};
use crate::templates::pages::{home_page, liked_estates, liked_page, search_page, ResultViewer};
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");
const MAP_JS: &str = include_str!("../static/map.js");

const SEARCH_RESULTS: &str = "/search/results";

/// Everything a request handler needs; built once in `main`.
pub struct AppState {
    pub source: Box<dyn EstateSource>,
    pub format: Box<dyn DisplayFormat + Send + Sync>,
    pub page_size: u64,
    pub export_limit: u64,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    tracing::info!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(home_page()),

        ("GET", "/liked") => html_response(liked_page(state.format.as_ref())),
        ("GET", "/liked/results") => liked_results(state),
        ("GET", "/liked/export.xlsx") => liked_export(state),

        ("GET", "/search") => search_shell(state, &params),
        ("GET", "/search/results") => search_results(state, &params),
        ("GET", "/search/more") => search_more(state, &params),
        ("GET", "/search/export.xlsx") => search_export(state, &params),

        ("GET", "/static/main.css") => asset_response(MAIN_CSS, "text/css; charset=utf-8"),
        ("GET", "/static/map.js") => asset_response(MAP_JS, "text/javascript; charset=utf-8"),

        _ => Err(ServerError::NotFound),
    }
}

fn liked_results(state: &AppState) -> ResultResp {
    let fetch: FetchState<_> = state.source.liked_estates().into();

    if let Some(estates) = fetch.data() {
        tracing::info!(count = estates.len(), "liked estates loaded");
    }

    html_response(liked_estates(&fetch, state.format.as_ref(), Utc::now()))
}

fn liked_export(state: &AppState) -> ResultResp {
    let estates = state.source.liked_estates()?;
    let decorated = decorate_all(&estates, state.format.as_ref(), Utc::now());
    let buffer = export_estates_xlsx(&decorated)?;

    tracing::info!(rows = decorated.len(), bytes = buffer.len(), "liked estates exported");
    download_response(buffer, "liked_estates.xlsx", XLSX_CONTENT_TYPE)
}

/// Search state carried in query strings between the shell, the results
/// fragment and the "load more" chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub sort: SortSpec,
    pub only_liked: bool,
    pub view: ViewTab,
}

impl SearchParams {
    /// `current` is the sort in effect; `sort` is a fresh pick from the
    /// selector and wins unless it is empty.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let mut sort = params
            .get("current")
            .and_then(|v| SortSpec::from_value(v))
            .unwrap_or_default();

        if let Selection::Unknown(value) =
            select_sort(params.get("sort").map(String::as_str), |picked| sort = picked)
        {
            return Err(ServerError::BadRequest(format!("Unknown sort option '{value}'")));
        }

        let only_liked = params
            .get("liked")
            .is_some_and(|v| matches!(v.as_str(), "true" | "1" | "on"));

        let view = params
            .get("view")
            .and_then(|v| ViewTab::parse(v))
            .unwrap_or_default();

        Ok(Self {
            sort,
            only_liked,
            view,
        })
    }

    pub fn to_query(&self, offset: Option<u64>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("current", &self.sort.value());
        if self.only_liked {
            query.append_pair("liked", "true");
        }
        query.append_pair("view", self.view.as_str());
        if let Some(offset) = offset {
            query.append_pair("offset", &offset.to_string());
        }
        query.finish()
    }

    fn query(&self, offset: u64, limit: u64) -> SearchQuery {
        SearchQuery {
            sort: self.sort,
            offset,
            limit,
            only_liked: self.only_liked,
        }
    }
}

/// Link to the page after `query`, when the total says there is one.
fn next_page_url(search: &SearchParams, query: &SearchQuery, count: u64) -> Option<String> {
    let next = query.next_page()?;
    (next.offset < count).then(|| format!("/search/more?{}", search.to_query(Some(next.offset))))
}

fn search_shell(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let search = SearchParams::from_query(params)?;
    let query = search.to_query(None);

    let initial = ResultViewer {
        loading: true,
        error: None,
        count: 0,
        results: None,
        sort: search.sort,
        only_liked: search.only_liked,
        fetch_next: None,
        active_tab: search.view,
        action: SEARCH_RESULTS,
    };

    html_response(search_page(
        &initial,
        &format!("{SEARCH_RESULTS}?{query}"),
        &format!("/search/export.xlsx?{query}"),
        state.format.as_ref(),
    ))
}

fn search_results(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let search = SearchParams::from_query(params)?;
    let query = search.query(0, state.page_size);

    let fetch: FetchState<EstatePage> = state.source.search_estates(&query).into();
    let page = fetch.data();

    if let Some(page) = page {
        tracing::info!(sort = %search.sort, count = page.count, shown = page.estates.len(), "search loaded");
    }

    let viewer = ResultViewer {
        loading: false,
        error: fetch.error(),
        count: page.map_or(0, |p| p.count),
        results: page.map(|p| p.estates.as_slice()),
        sort: search.sort,
        only_liked: search.only_liked,
        fetch_next: page.and_then(|p| next_page_url(&search, &query, p.count)),
        active_tab: search.view,
        action: SEARCH_RESULTS,
    };

    html_response(viewer.render(state.format.as_ref(), Utc::now()))
}

fn search_more(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let search = SearchParams::from_query(params)?;
    let offset = params
        .get("offset")
        .ok_or_else(|| ServerError::BadRequest("missing offset".into()))?
        .parse::<u64>()
        .map_err(|e| ServerError::BadRequest(format!("invalid offset: {e}")))?;
    let query = search.query(offset, state.page_size);

    match state.source.search_estates(&query) {
        Ok(page) => {
            let decorated = decorate_all(&page.estates, state.format.as_ref(), Utc::now());
            let next = next_page_url(&search, &query, page.count);
            html_response(grid_chunk(&decorated, next.as_deref()))
        }
        Err(err) => html_response(error_surface(&ErrorSurface::from(&err))),
    }
}

fn search_export(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let search = SearchParams::from_query(params)?;
    let page = state
        .source
        .search_estates(&search.query(0, state.export_limit))?;

    let decorated = decorate_all(&page.estates, state.format.as_ref(), Utc::now());
    let buffer = export_estates_xlsx(&decorated)?;

    tracing::info!(rows = decorated.len(), total = page.count, "search exported");
    download_response(
        buffer,
        &format!("estates_{}.xlsx", search.sort.value()),
        XLSX_CONTENT_TYPE,
    )
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
