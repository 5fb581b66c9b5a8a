//! src/api/movie.rs
//! ============================================================================
//! # Movie: Record Returned by the Movie API
//!
//! One movie as served by the list and detail endpoints. The list controller
//! only depends on `id`; everything else is display payload, so every field
//! beyond the identifier is defaulted when the server omits it.

use serde::{Deserialize, Serialize};

/// A single movie record. Payload keys are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub awards: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub box_office: Option<String>,
    #[serde(default)]
    pub production: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Movie {
    /// "Title (Year)" for list rows and log lines; just the title when the
    /// year is missing.
    pub fn display_title(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({year})", self.title),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let payload = r#"{
            "id": 1,
            "title": "The Shawshank Redemption",
            "year": 1994,
            "genre": ["Drama"],
            "rating": 9.3,
            "director": "Frank Darabont",
            "actors": ["Tim Robbins", "Morgan Freeman"],
            "plot": "Two imprisoned men bond over a number of years.",
            "poster": "https://example.com/poster.jpg",
            "runtime": 142,
            "awards": "Nominated for 7 Oscars",
            "country": "USA",
            "language": "English",
            "boxOffice": "$58.3 million",
            "production": "Columbia Pictures",
            "website": "https://example.com"
        }"#;

        let movie: Movie = serde_json::from_str(payload).expect("full record decodes");
        assert_eq!(movie.id, 1);
        assert_eq!(movie.year, Some(1994));
        assert_eq!(movie.box_office.as_deref(), Some("$58.3 million"));
        assert_eq!(movie.display_title(), "The Shawshank Redemption (1994)");
    }

    #[test]
    fn missing_fields_default() {
        let movie: Movie = serde_json::from_str(r#"{"id": 7}"#).expect("sparse record decodes");
        assert_eq!(movie.id, 7);
        assert!(movie.title.is_empty());
        assert!(movie.genre.is_empty());
        assert_eq!(movie.year, None);
        assert_eq!(movie.display_title(), "");
    }
}
