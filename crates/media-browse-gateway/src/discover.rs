use chrono::NaiveDate;
use media_browse_models::MediaKind;

/// Filter parameters for the discover endpoints. The date window maps
/// to `primary_release_date.*` for movies and `first_air_date.*` for
/// shows, which is the only kind-dependent part of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverParams {
    pub with_genres: Option<u64>,
    pub sort_by: Option<String>,
    pub released_after: Option<NaiveDate>,
    pub released_before: Option<NaiveDate>,
}

impl DiscoverParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre(mut self, genre_id: u64) -> Self {
        self.with_genres = Some(genre_id);
        self
    }

    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }

    pub fn released_after(mut self, date: NaiveDate) -> Self {
        self.released_after = Some(date);
        self
    }

    pub fn released_before(mut self, date: NaiveDate) -> Self {
        self.released_before = Some(date);
        self
    }

    pub(crate) fn to_query(&self, kind: MediaKind) -> Vec<(String, String)> {
        let date_field = match kind {
            MediaKind::Movie => "primary_release_date",
            MediaKind::Tv => "first_air_date",
        };

        let mut query = Vec::new();
        if let Some(genre_id) = self.with_genres {
            query.push(("with_genres".to_string(), genre_id.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sort_by".to_string(), sort_by.clone()));
        }
        if let Some(after) = self.released_after {
            query.push((format!("{}.gte", date_field), after.to_string()));
        }
        if let Some(before) = self.released_before {
            query.push((format!("{}.lte", date_field), before.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_date_window_uses_primary_release_date() {
        let params = DiscoverParams::new()
            .released_after(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .sort_by("primary_release_date.desc");
        let query = params.to_query(MediaKind::Movie);
        assert!(query.contains(&(
            "primary_release_date.gte".to_string(),
            "2024-01-01".to_string()
        )));
        assert!(query.contains(&(
            "sort_by".to_string(),
            "primary_release_date.desc".to_string()
        )));
    }

    #[test]
    fn test_tv_date_window_uses_first_air_date() {
        let params = DiscoverParams::new()
            .released_after(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .released_before(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let query = params.to_query(MediaKind::Tv);
        assert!(query.contains(&("first_air_date.gte".to_string(), "2024-01-01".to_string())));
        assert!(query.contains(&("first_air_date.lte".to_string(), "2024-02-01".to_string())));
    }

    #[test]
    fn test_empty_params_yield_empty_query() {
        assert!(DiscoverParams::new().to_query(MediaKind::Movie).is_empty());
    }

    #[test]
    fn test_genre_filter() {
        let query = DiscoverParams::new().genre(28).to_query(MediaKind::Movie);
        assert_eq!(query, vec![("with_genres".to_string(), "28".to_string())]);
    }
}
