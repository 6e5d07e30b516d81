use serde::{Deserialize, Serialize};

use super::Endpoint;

/// Searches movies by title.
///
/// Renders its fields as a query string in a fixed order: `query`, `language`,
/// `include_adult`, `page`, then `year`, `primary_release_year` and `region` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSearch {
    pub query: String,
    pub language: String,
    pub include_adult: bool,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub primary_release_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region: Option<String>,
}

impl MovieSearch {
    pub const RESOURCE: &'static str = "/search/movie";

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: "en-US".to_string(),
            include_adult: false,
            page: 1,
            year: None,
            primary_release_year: None,
            region: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn primary_release_year(mut self, year: u16) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Form-encodes a query value: spaces become `+`, reserved characters are percent-encoded.
fn encode_value(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

impl Endpoint for MovieSearch {
    fn render(&self) -> String {
        let mut params = vec![
            format!("query={}", encode_value(&self.query)),
            format!("language={}", encode_value(&self.language)),
            format!("include_adult={}", self.include_adult),
            format!("page={}", self.page),
        ];

        if let Some(year) = self.year {
            params.push(format!("year={}", year));
        }
        if let Some(year) = self.primary_release_year {
            params.push(format!("primary_release_year={}", year));
        }
        if let Some(region) = &self.region {
            params.push(format!("region={}", encode_value(region)));
        }

        format!("{}?{}", Self::RESOURCE, params.join("&"))
    }
}
