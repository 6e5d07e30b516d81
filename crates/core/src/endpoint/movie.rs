use serde::{Deserialize, Serialize};

use super::{fill_template, Endpoint};

macro_rules! impl_movie_endpoint {
    ($(#[$doc:meta])* $name:ident, $default_template:ident, $default_template_path:literal, $template:expr) => {
        fn $default_template() -> String {
            $name::TEMPLATE.to_string()
        }

        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(skip_serializing_if = "String::is_empty", default = $default_template_path)]
            pub resource_uri: String,
            #[serde(skip_serializing_if = "String::is_empty", default)]
            pub movie_id: String,
        }

        impl $name {
            pub const TEMPLATE: &'static str = $template;

            pub fn new(movie_id: impl Into<String>) -> Self {
                Self { resource_uri: Self::TEMPLATE.to_string(), movie_id: movie_id.into() }
            }
        }

        impl Endpoint for $name {
            fn render(&self) -> String {
                fill_template(&self.resource_uri, &self.movie_id)
            }
        }
    };
}

impl_movie_endpoint!(
    /// Primary details of a movie.
    MovieDetails,
    movie_details_template,
    "movie_details_template",
    "/movie/{id}"
);
impl_movie_endpoint!(
    /// Keywords used to describe a movie.
    MovieKeywords,
    movie_keywords_template,
    "movie_keywords_template",
    "/movie/{id}/keywords"
);
impl_movie_endpoint!(
    /// Streaming services where a movie can be watched.
    MovieWatchProviders,
    movie_watch_providers_template,
    "movie_watch_providers_template",
    "/movie/{id}/watch/providers"
);
impl_movie_endpoint!(
    /// Cast and crew of a movie.
    MovieCredits,
    movie_credits_template,
    "movie_credits_template",
    "/movie/{id}/credits"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_movie_paths() {
        assert_eq!(MovieDetails::new("tt0102057").render(), "/movie/tt0102057");
        assert_eq!(MovieKeywords::new("tt0031381").render(), "/movie/tt0031381/keywords");
        assert_eq!(
            MovieWatchProviders::new("tt3097934").render(),
            "/movie/tt3097934/watch/providers"
        );
        assert_eq!(MovieCredits::new("tt0102057").render(), "/movie/tt0102057/credits");
    }

    #[test]
    fn test_identifier_is_not_validated() {
        assert_eq!(MovieDetails::new("").render(), "/movie/");
        assert_eq!(MovieCredits::new("not an id").render(), "/movie/not an id/credits");
    }

    #[test]
    fn test_deserialize_without_resource_uri_uses_template() {
        let details: MovieDetails = serde_json::from_str(r#"{"movieId":"tt0102057"}"#).unwrap();
        assert_eq!(details.render(), "/movie/tt0102057");

        let credits: MovieCredits = serde_json::from_str(r#"{"movieId":"tt0102057"}"#).unwrap();
        assert_eq!(credits.render(), "/movie/tt0102057/credits");

        let providers: MovieWatchProviders =
            serde_json::from_str(r#"{"movieId":"tt3097934"}"#).unwrap();
        assert_eq!(providers.render(), "/movie/tt3097934/watch/providers");

        let keywords: MovieKeywords = serde_json::from_str("{}").unwrap();
        assert_eq!(keywords.render(), "/movie//keywords");
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(MovieDetails::new("tt0102057")).unwrap();

        assert_eq!(value["resourceUri"], "/movie/{id}");
        assert_eq!(value["movieId"], "tt0102057");
    }
}
