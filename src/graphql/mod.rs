mod client;
mod query;

pub use client::{EstateSource, GraphqlClient};
pub use query::{EstatePage, LikedQuery, SearchQuery};
