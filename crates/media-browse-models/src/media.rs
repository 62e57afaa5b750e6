use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog namespace discriminator. The metadata provider scopes ids by
/// kind, so the same numeric id can refer to both a movie and a show.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaKind::Movie),
            "tv" => Ok(MediaKind::Tv),
            _ => Err(format!("Invalid media kind: {}. Use 'movie' or 'tv'", s)),
        }
    }
}

/// A single catalog entry as returned by category, search, trending and
/// discover endpoints, and as persisted in the watchlist. Movies carry
/// `title`/`release_date`, shows carry `name`/`first_air_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaRecord {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaKind>,
}

impl MediaRecord {
    /// Display label: `title` for movies, `name` for shows.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }

    /// Release year, taken from whichever date field is present.
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }

    /// The kind tag, defaulting to movie when the payload omits it.
    pub fn kind(&self) -> MediaKind {
        self.media_type.unwrap_or_default()
    }

    /// Tag the record with a kind when the endpoint implies one
    /// (category and discover payloads omit `media_type`).
    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.media_type.get_or_insert(kind);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_round_trip() {
        assert_eq!("movie".parse::<MediaKind>().unwrap(), MediaKind::Movie);
        assert_eq!("tv".parse::<MediaKind>().unwrap(), MediaKind::Tv);
        assert_eq!(MediaKind::Tv.to_string(), "tv");
        assert!("episode".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_media_kind_defaults_to_movie() {
        assert_eq!(MediaKind::default(), MediaKind::Movie);
    }

    #[test]
    fn test_display_title_prefers_title_then_name() {
        let movie: MediaRecord =
            serde_json::from_str(r#"{"id": 550, "title": "Fight Club"}"#).unwrap();
        assert_eq!(movie.display_title(), "Fight Club");

        let show: MediaRecord =
            serde_json::from_str(r#"{"id": 1396, "name": "Breaking Bad"}"#).unwrap();
        assert_eq!(show.display_title(), "Breaking Bad");

        let bare: MediaRecord = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(bare.display_title(), "Untitled");
    }

    #[test]
    fn test_year_from_either_date_field() {
        let movie: MediaRecord =
            serde_json::from_str(r#"{"id": 550, "release_date": "1999-10-15"}"#).unwrap();
        assert_eq!(movie.year(), Some("1999"));

        let show: MediaRecord =
            serde_json::from_str(r#"{"id": 1396, "first_air_date": "2008-01-20"}"#).unwrap();
        assert_eq!(show.year(), Some("2008"));
    }

    #[test]
    fn test_with_kind_does_not_overwrite_existing_tag() {
        let record: MediaRecord =
            serde_json::from_str(r#"{"id": 7, "media_type": "tv"}"#).unwrap();
        assert_eq!(record.with_kind(MediaKind::Movie).kind(), MediaKind::Tv);
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let record: MediaRecord = serde_json::from_str(r#"{"id": 550}"#).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":550}"#);
    }
}
