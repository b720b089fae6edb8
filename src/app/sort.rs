use std::cmp::Reverse;

use crate::app::tmdb::Movie;

/// Keys the sort cycle walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Popularity,
    Rating,
    Year,
    Title,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::Year => "year",
            SortKey::Title => "title",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::Popularity => SortKey::Rating,
            SortKey::Rating => SortKey::Year,
            SortKey::Year => SortKey::Title,
            SortKey::Title => SortKey::Popularity,
        }
    }
}

/// Returns a re-ordered copy; the input order is left untouched so re-sorting
/// stays repeatable against the original fetch.
pub fn sort_movies(key: SortKey, movies: &[Movie]) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    match key {
        SortKey::Popularity => sorted.sort_by(|a, b| b.popularity.total_cmp(&a.popularity)),
        SortKey::Rating => sorted.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average)),
        // Missing dates count as year 0 and land at the end.
        SortKey::Year => sorted.sort_by_key(|m| Reverse(m.release_year().unwrap_or(0))),
        SortKey::Title => sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
    }
    sorted
}
