use chrono::{Local, NaiveDate};

use crate::app::error::FetchError;
use crate::app::tmdb::BASE_URL;

const LANGUAGE: &str = "en-US";
const PAGE: u32 = 1;
/// Vote-count floor for the top-rated listing.
const TOP_RATED_MIN_VOTES: u32 = 1000;

/// Discover categories, one per category trigger key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Popular,
    TopRated,
    Upcoming,
}

pub fn genre_list_url(api_key: &str) -> String {
    format!("{BASE_URL}/genre/movie/list?api_key={api_key}&language={LANGUAGE}")
}

pub fn trending_url(api_key: &str) -> String {
    format!("{BASE_URL}/trending/movie/week?api_key={api_key}")
}

pub fn discover_url(api_key: &str, category: Category, genre_id: Option<u64>) -> String {
    discover_url_on(api_key, category, genre_id, Local::now().date_naive())
}

fn discover_url_on(
    api_key: &str,
    category: Category,
    genre_id: Option<u64>,
    today: NaiveDate,
) -> String {
    let mut url =
        format!("{BASE_URL}/discover/movie?api_key={api_key}&language={LANGUAGE}&page={PAGE}");
    match category {
        Category::Popular => url.push_str("&sort_by=popularity.desc"),
        Category::TopRated => {
            url.push_str("&sort_by=vote_average.desc");
            url.push_str(&format!("&vote_count.gte={TOP_RATED_MIN_VOTES}"));
        }
        Category::Upcoming => {
            url.push_str("&sort_by=popularity.desc");
            url.push_str(&format!(
                "&primary_release_date.gte={}",
                today.format("%Y-%m-%d")
            ));
        }
    }
    if let Some(id) = genre_id {
        url.push_str(&format!("&with_genres={id}"));
    }
    url
}

/// Builds the search URL. Blank input is rejected here, before any request
/// is issued.
pub fn search_url(api_key: &str, query: &str) -> Result<String, FetchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(FetchError::EmptyQuery);
    }
    Ok(format!(
        "{BASE_URL}/search/movie?api_key={api_key}&query={}&include_adult=false&language={LANGUAGE}&page={PAGE}",
        urlencoding::encode(query)
    ))
}

pub fn detail_url(api_key: &str, movie_id: u64) -> String {
    format!("{BASE_URL}/movie/{movie_id}?api_key={api_key}&language={LANGUAGE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn genre_list_url_carries_credential_and_locale() {
        assert_eq!(
            genre_list_url("k"),
            "https://api.themoviedb.org/3/genre/movie/list?api_key=k&language=en-US"
        );
    }

    #[test]
    fn trending_uses_the_weekly_window() {
        assert_eq!(
            trending_url("k"),
            "https://api.themoviedb.org/3/trending/movie/week?api_key=k"
        );
    }

    #[test]
    fn popular_sorts_by_popularity() {
        assert_eq!(
            discover_url_on("k", Category::Popular, None, day()),
            "https://api.themoviedb.org/3/discover/movie?api_key=k&language=en-US&page=1&sort_by=popularity.desc"
        );
    }

    #[test]
    fn top_rated_always_includes_the_vote_floor() {
        let url = discover_url_on("k", Category::TopRated, None, day());
        assert!(url.contains("sort_by=vote_average.desc"));
        assert!(url.contains("vote_count.gte=1000"));
    }

    #[test]
    fn upcoming_constrains_release_date_to_today() {
        let url = discover_url_on("k", Category::Upcoming, None, day());
        assert!(url.contains("sort_by=popularity.desc"));
        assert!(url.contains("primary_release_date.gte=2024-07-01"));
    }

    #[test]
    fn genre_filter_appends_to_any_discover_mode() {
        for category in [Category::Popular, Category::TopRated, Category::Upcoming] {
            let url = discover_url_on("k", category, Some(28), day());
            assert!(url.ends_with("&with_genres=28"), "{url}");
        }
    }

    #[test]
    fn search_encodes_free_text() {
        assert_eq!(
            search_url("k", "the matrix").unwrap(),
            "https://api.themoviedb.org/3/search/movie?api_key=k&query=the%20matrix&include_adult=false&language=en-US&page=1"
        );
    }

    #[test]
    fn search_trims_surrounding_whitespace() {
        let url = search_url("k", "  dune  ").unwrap();
        assert!(url.contains("query=dune&"));
    }

    #[test]
    fn blank_search_is_a_validation_error() {
        assert!(matches!(search_url("k", "   "), Err(FetchError::EmptyQuery)));
        assert!(matches!(search_url("k", ""), Err(FetchError::EmptyQuery)));
    }

    #[test]
    fn detail_url_targets_a_single_movie() {
        assert_eq!(
            detail_url("k", 603),
            "https://api.themoviedb.org/3/movie/603?api_key=k&language=en-US"
        );
    }
}
