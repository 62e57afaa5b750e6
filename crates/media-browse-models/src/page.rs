use serde::{Deserialize, Serialize};

/// Paged list envelope used by every list-returning catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn default_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaRecord;

    #[test]
    fn test_page_envelope_deserializes() {
        let page: Page<MediaRecord> = serde_json::from_str(
            r#"{"page": 1, "results": [{"id": 550, "title": "Fight Club"}], "total_pages": 3, "total_results": 41}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_results, 41);
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: Page<MediaRecord> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(page.page, 1);
        assert!(page.results.is_empty());
    }
}
