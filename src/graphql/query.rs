// src/graphql/query.rs

use crate::domain::{Estate, FetchError, SortSpec};
use serde::Deserialize;
use serde_json::{json, Value};

/// Selection set needed to decorate and display one estate.
pub const ESTATE_FIELDS: &str = "
    immowebCode
    price
    zipCode
    locality
    images
    modificationDate
    hasGarden
    gardenArea
    agencyLogo
    agencyName
    geolocation
    street
    streetNumber
    isAuction
    isSold
    isUnderOption
    description
    livingArea
    bedroomCount
    priceHistory {
        price
        date
    }
    isLiked
    isVisited
";

/// How the current user's liked estates are asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikedQuery {
    /// `estates(onlyLiked: true)`: the backend resolves the current user.
    OnlyLikedFlag,
    /// `userByName(name) { likedEstates }` for a named user.
    UserScoped { user: String },
}

impl LikedQuery {
    pub fn operation_name(&self) -> &'static str {
        "likedEstates"
    }

    pub fn document(&self) -> String {
        match self {
            LikedQuery::OnlyLikedFlag => format!(
                "query likedEstates {{ estates(onlyLiked: true) {{ {ESTATE_FIELDS} }} }}"
            ),
            LikedQuery::UserScoped { .. } => format!(
                "query likedEstates($name: String!) {{ userByName(name: $name) {{ likedEstates {{ {ESTATE_FIELDS} }} }} }}"
            ),
        }
    }

    pub fn variables(&self) -> Value {
        match self {
            LikedQuery::OnlyLikedFlag => json!({}),
            LikedQuery::UserScoped { user } => json!({ "name": user }),
        }
    }

    /// Pull the estate list out of the `data` payload.
    pub fn extract(&self, data: Value) -> Result<Vec<Estate>, FetchError> {
        match self {
            LikedQuery::OnlyLikedFlag => {
                #[derive(Deserialize)]
                struct Data {
                    estates: Vec<Estate>,
                }
                let data: Data = decode(data)?;
                Ok(data.estates)
            }
            LikedQuery::UserScoped { user } => {
                #[derive(Deserialize)]
                #[serde(rename_all = "camelCase")]
                struct Data {
                    user_by_name: Option<User>,
                }
                #[derive(Deserialize)]
                #[serde(rename_all = "camelCase")]
                struct User {
                    liked_estates: Vec<Estate>,
                }
                let data: Data = decode(data)?;
                data.user_by_name
                    .map(|u| u.liked_estates)
                    .ok_or_else(|| FetchError::decode(format!("no user named '{user}'")))
            }
        }
    }
}

/// One page of a sorted search plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct EstatePage {
    pub count: u64,
    pub estates: Vec<Estate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sort: SortSpec,
    pub offset: u64,
    pub limit: u64,
    pub only_liked: bool,
}

impl SearchQuery {
    pub fn operation_name(&self) -> &'static str {
        "searchEstates"
    }

    pub fn document(&self) -> String {
        format!(
            "query searchEstates($sortField: String!, $sortOrder: String!, $offset: Int!, $limit: Int!, $onlyLiked: Boolean) {{ \
                estateCount(onlyLiked: $onlyLiked) \
                estates(sortField: $sortField, sortOrder: $sortOrder, offset: $offset, limit: $limit, onlyLiked: $onlyLiked) {{ {ESTATE_FIELDS} }} \
            }}"
        )
    }

    pub fn variables(&self) -> Value {
        json!({
            "sortField": self.sort.field.as_str(),
            "sortOrder": self.sort.order.as_str(),
            "offset": self.offset,
            "limit": self.limit,
            "onlyLiked": self.only_liked,
        })
    }

    pub fn extract(&self, data: Value) -> Result<EstatePage, FetchError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            estate_count: u64,
            estates: Vec<Estate>,
        }
        let data: Data = decode(data)?;
        Ok(EstatePage {
            count: data.estate_count,
            estates: data.estates,
        })
    }

    /// The query for the page right after this one, if its offset fits.
    pub fn next_page(&self) -> Option<Self> {
        Some(Self {
            offset: self.offset.checked_add(self.limit)?,
            ..self.clone()
        })
    }
}

fn decode<T: for<'de> Deserialize<'de>>(data: Value) -> Result<T, FetchError> {
    serde_json::from_value(data).map_err(|e| FetchError::decode(e.to_string()))
}
