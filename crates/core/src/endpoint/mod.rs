mod movie;
pub use movie::{MovieCredits, MovieDetails, MovieKeywords, MovieWatchProviders};

mod search;
pub use search::MovieSearch;

/// A single read-only API resource request.
///
/// Implementors render to a path that starts with `/`, optionally followed by a `?`-prefixed
/// query string, e.g. `/movie/tt0102057/credits` or `/search/movie?query=hook&page=1`.
/// Nothing about the identifier is validated; a bad id only shows up as an error status
/// from the service.
pub trait Endpoint: Send + Sync {
    fn render(&self) -> String;
}

/// Substitutes `id` for the `{id}` placeholder in a resource template.
pub(crate) fn fill_template(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}
