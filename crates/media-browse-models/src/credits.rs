use serde::{Deserialize, Serialize};

/// Cast and crew for one title.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Credits {
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew
            .iter()
            .find(|person| person.job.as_deref() == Some("Director"))
    }

    /// Billing order as listed by the provider, capped for display.
    pub fn top_cast(&self, limit: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(limit)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_found_in_crew() {
        let credits: Credits = serde_json::from_str(
            r#"{
                "cast": [{"id": 819, "name": "Edward Norton", "character": "The Narrator", "order": 0}],
                "crew": [
                    {"id": 7469, "name": "Jim Uhls", "job": "Screenplay", "department": "Writing"},
                    {"id": 7467, "name": "David Fincher", "job": "Director", "department": "Directing"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(credits.director().map(|d| d.name.as_str()), Some("David Fincher"));
    }

    #[test]
    fn test_top_cast_caps_at_available() {
        let credits = Credits::default();
        assert!(credits.director().is_none());
        assert!(credits.top_cast(10).is_empty());
    }
}
