//! src/api/client.rs
//! ============================================================================
//! # MovieApiClient: Read-Only HTTP Access to the Movie API
//!
//! Two calls: the paged/filtered list and the single-movie lookup. HTTP 200
//! is the only success; any other status or transport problem is a failure
//! carrying the underlying cause. No retries, no caching, transport-default
//! timeouts.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::movie::Movie;
use crate::error::AppError;

/// Parameters of one list fetch: page number (1-based) and the committed
/// search text (empty = unfiltered).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub query: String,
}

/// Thin reqwest wrapper around the movie endpoints.
#[derive(Debug, Clone)]
pub struct MovieApiClient {
    http: Client,
    base: String,
}

impl MovieApiClient {
    /// Build a client for the given API root, e.g. `https://freetestapi.com/api/v1`.
    /// A trailing slash on the root is tolerated.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base: String = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            http: Client::new(),
            base,
        }
    }

    /// GET `{base}/movies?search={query}&page={page}`; the `search` param is
    /// omitted when the query is empty. Succeeds only on HTTP 200 with a
    /// decodable JSON array of movies.
    pub async fn list_movies(&self, request: &PageRequest) -> Result<Vec<Movie>, AppError> {
        let url: String = format!("{}/movies", self.base);
        let mut params: Vec<(&str, String)> = Vec::with_capacity(2);
        if !request.query.is_empty() {
            params.push(("search", request.query.clone()));
        }
        params.push(("page", request.page.to_string()));

        debug!(
            "GET {url} page={} query={:?}",
            request.page, request.query
        );
        let response = self.http.get(&url).query(&params).send().await?;
        Self::decode(response).await
    }

    /// GET `{base}/movies/{id}`; same success/failure contract, one movie.
    pub async fn get_movie(&self, id: u64) -> Result<Movie, AppError> {
        let url: String = format!("{}/movies/{id}", self.base);

        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// Map a response to success or failure: non-200 → `Http`, undecodable
    /// body → `Decode`. The body is read as text first so decode failures
    /// are distinguishable from transport failures.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status: StatusCode = response.status();
        let url: String = response.url().to_string();

        if status != StatusCode::OK {
            return Err(AppError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body: String = response.text().await?;
        serde_json::from_str(&body).map_err(|source| AppError::Decode { url, source })
    }
}
