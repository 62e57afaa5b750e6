use serde::{Deserialize, Serialize};

use crate::genre::Genre;
use crate::media::{MediaKind, MediaRecord};

/// Extended record returned by the details endpoint. Superset of
/// `MediaRecord` plus the fields the detail view renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaDetails {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Movies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Shows only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
}

impl MediaDetails {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }

    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }

    /// The record shape the watchlist stores, tagged with the kind the
    /// details were fetched under.
    pub fn into_record(self, kind: MediaKind) -> MediaRecord {
        MediaRecord {
            id: self.id,
            title: self.title,
            name: self.name,
            poster_path: self.poster_path,
            overview: self.overview,
            release_date: self.release_date,
            first_air_date: self.first_air_date,
            vote_average: self.vote_average,
            media_type: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_tags_the_requested_kind() {
        let details: MediaDetails = serde_json::from_str(
            r#"{"id": 1396, "name": "Breaking Bad", "number_of_seasons": 5, "genres": []}"#,
        )
        .unwrap();
        let record = details.into_record(MediaKind::Tv);
        assert_eq!(record.id, 1396);
        assert_eq!(record.media_type, Some(MediaKind::Tv));
        assert_eq!(record.display_title(), "Breaking Bad");
    }

    #[test]
    fn test_details_deserialize_with_missing_collections() {
        let details: MediaDetails =
            serde_json::from_str(r#"{"id": 550, "title": "Fight Club", "runtime": 139}"#).unwrap();
        assert!(details.genres.is_empty());
        assert!(details.production_companies.is_empty());
        assert_eq!(details.runtime, Some(139));
    }
}
