use media_browse_models::{Credits, Genre, MediaDetails, MediaKind, MediaRecord, Page};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::categories::{MovieCategory, TimeWindow, TrendingKind, TvCategory};
use crate::discover::DiscoverParams;
use crate::error::GatewayError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Read-only client for the metadata provider. Every call is an
/// independent GET; retry, caching and rate limiting are the caller's
/// concern, not this client's.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenreList {
    genres: Vec<Genre>,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn get_json<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Catalog request failed: {} {}", status, path);
            return Err(GatewayError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }

    /// Curated movie row (`/movie/{category}`). Category payloads omit
    /// `media_type`, so results are tagged with the requested kind.
    pub async fn movie_category(
        &self,
        category: MovieCategory,
    ) -> Result<Vec<MediaRecord>, GatewayError> {
        let page: Page<MediaRecord> = self
            .get_json(&format!("/movie/{}", category.as_str()), &[])
            .await?;
        Ok(tag_all(page.results, MediaKind::Movie))
    }

    /// Curated TV row (`/tv/{category}`).
    pub async fn tv_category(&self, category: TvCategory) -> Result<Vec<MediaRecord>, GatewayError> {
        let page: Page<MediaRecord> = self
            .get_json(&format!("/tv/{}", category.as_str()), &[])
            .await?;
        Ok(tag_all(page.results, MediaKind::Tv))
    }

    /// Extended details for one title. A 404 becomes `NotFound`, which
    /// callers surface as its own state.
    pub async fn details(&self, kind: MediaKind, id: u64) -> Result<MediaDetails, GatewayError> {
        self.get_json(&format!("/{}/{}", kind.as_str(), id), &[])
            .await
            .map_err(|e| not_found_for(e, kind, id))
    }

    pub async fn credits(&self, kind: MediaKind, id: u64) -> Result<Credits, GatewayError> {
        self.get_json(&format!("/{}/{}/credits", kind.as_str(), id), &[])
            .await
            .map_err(|e| not_found_for(e, kind, id))
    }

    /// Free-text search across movies and shows. The provider mixes
    /// person results into the payload; those are dropped.
    pub async fn search_multi(&self, query: &str) -> Result<Vec<MediaRecord>, GatewayError> {
        let page: Page<serde_json::Value> = self
            .get_json(
                "/search/multi",
                &[("query".to_string(), query.to_string())],
            )
            .await?;
        Ok(records_from_mixed(page.results, None))
    }

    pub async fn discover(
        &self,
        kind: MediaKind,
        params: &DiscoverParams,
    ) -> Result<Vec<MediaRecord>, GatewayError> {
        let page: Page<MediaRecord> = self
            .get_json(&format!("/discover/{}", kind.as_str()), &params.to_query(kind))
            .await?;
        Ok(tag_all(page.results, kind))
    }

    pub async fn trending(
        &self,
        kind: TrendingKind,
        window: TimeWindow,
    ) -> Result<Vec<MediaRecord>, GatewayError> {
        let page: Page<serde_json::Value> = self
            .get_json(
                &format!("/trending/{}/{}", kind.as_str(), window.as_str()),
                &[],
            )
            .await?;
        let tag = match kind {
            TrendingKind::All => None,
            TrendingKind::Movie => Some(MediaKind::Movie),
            TrendingKind::Tv => Some(MediaKind::Tv),
        };
        Ok(records_from_mixed(page.results, tag))
    }

    pub async fn movie_genres(&self) -> Result<Vec<Genre>, GatewayError> {
        let list: GenreList = self.get_json("/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }

    pub async fn tv_genres(&self) -> Result<Vec<Genre>, GatewayError> {
        let list: GenreList = self.get_json("/genre/tv/list", &[]).await?;
        Ok(list.genres)
    }
}

fn not_found_for(err: GatewayError, kind: MediaKind, id: u64) -> GatewayError {
    match err {
        GatewayError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            GatewayError::NotFound { kind, id }
        }
        other => other,
    }
}

fn tag_all(results: Vec<MediaRecord>, kind: MediaKind) -> Vec<MediaRecord> {
    results.into_iter().map(|r| r.with_kind(kind)).collect()
}

/// Convert a mixed search/trending payload, keeping only movie and tv
/// entries. Malformed entries are skipped with a warning rather than
/// failing the whole page.
fn records_from_mixed(
    results: Vec<serde_json::Value>,
    tag: Option<MediaKind>,
) -> Vec<MediaRecord> {
    results
        .into_iter()
        .filter(|value| {
            match value.get("media_type").and_then(|t| t.as_str()) {
                Some("movie") | Some("tv") => true,
                // Category-scoped payloads omit the tag entirely.
                None => true,
                Some(_) => false,
            }
        })
        .filter_map(|value| match serde_json::from_value::<MediaRecord>(value) {
            Ok(record) => Some(match tag {
                Some(kind) => record.with_kind(kind),
                None => record,
            }),
            Err(e) => {
                warn!("Skipping malformed catalog entry: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_results_drop_person_entries() {
        let results = vec![
            json!({"id": 550, "title": "Fight Club", "media_type": "movie"}),
            json!({"id": 819, "name": "Edward Norton", "media_type": "person"}),
            json!({"id": 1396, "name": "Breaking Bad", "media_type": "tv"}),
        ];
        let records = records_from_mixed(results, None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind(), MediaKind::Movie);
        assert_eq!(records[1].kind(), MediaKind::Tv);
    }

    #[test]
    fn test_mixed_results_tag_untagged_entries() {
        let results = vec![json!({"id": 603, "title": "The Matrix"})];
        let records = records_from_mixed(results, Some(MediaKind::Movie));
        assert_eq!(records[0].media_type, Some(MediaKind::Movie));
    }

    #[test]
    fn test_mixed_results_skip_malformed_entries() {
        let results = vec![
            json!({"title": "No id field"}),
            json!({"id": 550, "title": "Fight Club"}),
        ];
        let records = records_from_mixed(results, None);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 550);
    }

    #[test]
    fn test_tag_all_does_not_overwrite() {
        let record: MediaRecord =
            serde_json::from_str(r#"{"id": 1, "media_type": "tv"}"#).unwrap();
        let tagged = tag_all(vec![record], MediaKind::Movie);
        assert_eq!(tagged[0].kind(), MediaKind::Tv);
    }

    #[test]
    fn test_base_url_falls_back_to_default() {
        let client = TmdbClient::new("key", None);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        let client = TmdbClient::new("key", Some(String::new()));
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        let client = TmdbClient::new("key", Some("http://localhost:9000".to_string()));
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
