use crate::domain::estate::fixtures;
use crate::domain::{BelgianFormat, Estate, FetchError};
use crate::graphql::{EstatePage, EstateSource, SearchQuery};
use crate::router::AppState;
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::{Arc, Mutex};

/// In-memory backend: pages through `search` like the real one would and
/// remembers every search it was asked for.
pub struct StubSource {
    pub liked: Result<Vec<Estate>, FetchError>,
    pub search: Result<Vec<Estate>, FetchError>,
    pub seen: Arc<Mutex<Vec<SearchQuery>>>,
}

impl EstateSource for StubSource {
    fn liked_estates(&self) -> Result<Vec<Estate>, FetchError> {
        self.liked.clone()
    }

    fn search_estates(&self, query: &SearchQuery) -> Result<EstatePage, FetchError> {
        self.seen.lock().unwrap().push(query.clone());

        self.search.clone().map(|all| EstatePage {
            count: all.len() as u64,
            estates: all
                .into_iter()
                .skip(query.offset as usize)
                .take(query.limit as usize)
                .collect(),
        })
    }
}

/// `n` distinct estates, codes 1..=n.
pub fn estates(n: i64) -> Vec<Estate> {
    (1..=n)
        .map(|code| Estate {
            immoweb_code: code,
            ..fixtures::estate()
        })
        .collect()
}

/// App state over a stub, plus the handle on the searches it received.
pub fn stub_state(
    liked: Result<Vec<Estate>, FetchError>,
    search: Result<Vec<Estate>, FetchError>,
    page_size: u64,
) -> (AppState, Arc<Mutex<Vec<SearchQuery>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let source = StubSource {
        liked,
        search,
        seen: Arc::clone(&seen),
    };

    let state = AppState {
        source: Box::new(source),
        format: Box::new(BelgianFormat::utc()),
        page_size,
        export_limit: 100,
    };
    (state, seen)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
