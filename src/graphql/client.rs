// src/graphql/client.rs
use crate::config::Config;
use crate::domain::{Estate, FetchError};
use crate::graphql::query::{EstatePage, LikedQuery, SearchQuery};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("estate_viewer/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer the two listing queries the pages need.
pub trait EstateSource: Send + Sync {
    fn liked_estates(&self) -> Result<Vec<Estate>, FetchError>;

    fn search_estates(&self, query: &SearchQuery) -> Result<EstatePage, FetchError>;
}

/// Talks to the listings backend over GraphQL. One attempt per call.
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    liked: LikedQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    operation_name: &'a str,
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlMessage>,
}

#[derive(Deserialize)]
struct GraphqlMessage {
    message: String,
}

impl GraphqlClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.graphql_url.clone(),
            api_token: config.api_token.clone(),
            liked: config.liked_query.clone(),
        })
    }

    fn execute(&self, operation_name: &str, query: &str, variables: Value) -> Result<Value, FetchError> {
        let start = Instant::now();
        let body = GraphqlRequest {
            operation_name,
            query,
            variables,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let result = request
            .send()
            .map_err(|e| FetchError::network(e.to_string()))
            .and_then(|resp| {
                let status = resp.status().as_u16();
                let text = resp.text().map_err(|e| FetchError::network(e.to_string()))?;
                interpret_response(status, &text)
            });

        match &result {
            Ok(_) => tracing::debug!(operation = operation_name, elapsed = ?start.elapsed(), "query ok"),
            Err(e) => tracing::warn!(operation = operation_name, elapsed = ?start.elapsed(), error = %e, "query failed"),
        }

        result
    }
}

impl EstateSource for GraphqlClient {
    fn liked_estates(&self) -> Result<Vec<Estate>, FetchError> {
        let data = self.execute(
            self.liked.operation_name(),
            &self.liked.document(),
            self.liked.variables(),
        )?;
        self.liked.extract(data)
    }

    fn search_estates(&self, query: &SearchQuery) -> Result<EstatePage, FetchError> {
        let data = self.execute(query.operation_name(), &query.document(), query.variables())?;
        query.extract(data)
    }
}

/// Turn a raw HTTP answer into the `data` payload or the fetch error the
/// error surface shows.
pub fn interpret_response(status: u16, body: &str) -> Result<Value, FetchError> {
    if !(200..300).contains(&status) {
        // Error bodies are often GraphQL-shaped; keep their messages if so.
        let server_messages = serde_json::from_str::<GraphqlResponse>(body)
            .map(|r| r.errors.into_iter().map(|e| e.message).collect())
            .unwrap_or_default();
        return Err(FetchError::http_status(status, server_messages, body));
    }

    let parsed: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| FetchError::decode(e.to_string()))?;

    if !parsed.errors.is_empty() {
        let messages = parsed.errors.into_iter().map(|e| e.message).collect();
        return Err(FetchError::graphql(messages));
    }

    match parsed.data {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(FetchError::decode("response carried no data")),
    }
}
