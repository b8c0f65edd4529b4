use crate::config::Config;
use crate::domain::BelgianFormat;
use crate::graphql::GraphqlClient;
use crate::responses::error_response;
use crate::router::{handle, AppState};
use astra::Server;

mod config;
mod domain;
mod errors;
mod graphql;
mod logging;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::initialize_logging();

    // 1️⃣ Read settings from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the backend client
    let client = match GraphqlClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Could not build the listings client: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        source: Box::new(client),
        format: Box::new(BelgianFormat::new(config.utc_offset)),
        page_size: config.page_size,
        export_limit: config.export_limit,
    };

    // 3️⃣ Start the server
    tracing::info!(
        backend = %config.graphql_url,
        liked_query = ?config.liked_query,
        "Starting server at http://{}",
        config.bind_addr
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(status = err.status(), "{err}");
            error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
