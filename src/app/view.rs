//! Data -> view-description layer. Movies and details are mapped to plain
//! structs of display-ready strings before any widget exists, so formatting
//! is testable without a terminal.

use crate::app::tmdb::{GenreTable, IMAGE_BASE_URL, Movie, MovieDetail, PLACEHOLDER_POSTER_URL};

/// Display description of one grid entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
    pub rating: String,
    pub year: String,
    pub popularity: String,
    pub genres: String,
}

pub fn movie_card(movie: &Movie, genres: &GenreTable) -> MovieCard {
    MovieCard {
        id: movie.id,
        title: movie.title.clone(),
        poster_url: poster_url(movie.poster_path.as_deref()),
        rating: format!("{:.1}", movie.vote_average),
        year: movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        popularity: format!("{:.1}", movie.popularity),
        genres: genres.joined(&movie.genre_ids),
    }
}

/// Full poster URL, or the placeholder when the API has none.
pub fn poster_url(path: Option<&str>) -> String {
    match path {
        Some(path) => format!("{IMAGE_BASE_URL}{path}"),
        None => PLACEHOLDER_POSTER_URL.to_string(),
    }
}

/// Display description of the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub tagline: String,
    pub rating: String,
    pub runtime: String,
    pub release_date: String,
    pub budget: String,
    pub revenue: String,
    pub genres: String,
    pub overview: String,
    pub poster_url: String,
}

pub fn detail_view(detail: &MovieDetail) -> DetailView {
    DetailView {
        title: detail.title.clone(),
        tagline: detail.tagline.clone().unwrap_or_default(),
        rating: format!(
            "⭐ {:.1} / 10 ({} votes)",
            detail.vote_average, detail.vote_count
        ),
        runtime: match detail.runtime {
            Some(minutes) => format!("{minutes} minutes"),
            None => "N/A".to_string(),
        },
        release_date: detail.release_date.clone().unwrap_or_default(),
        budget: format!("${}", group_digits(detail.budget)),
        revenue: format!("${}", group_digits(detail.revenue)),
        genres: detail
            .genres
            .iter()
            .map(|g| g.name.clone())
            .collect::<Vec<_>>()
            .join(", "),
        overview: detail.overview.clone(),
        poster_url: poster_url(detail.poster_path.as_deref()),
    }
}

/// Comma-grouped digits, e.g. 63000000 -> "63,000,000".
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tmdb::Genre;

    fn sample_movie() -> Movie {
        Movie {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/abc.jpg".to_string()),
            vote_average: 8.16,
            popularity: 85.14,
            release_date: Some("1999-03-30".to_string()),
            genre_ids: vec![28, 878],
        }
    }

    fn sample_detail() -> MovieDetail {
        MovieDetail {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: None,
            overview: "A hacker learns the truth.".to_string(),
            vote_average: 8.16,
            vote_count: 26000,
            release_date: Some("1999-03-30".to_string()),
            tagline: None,
            runtime: Some(136),
            budget: 63_000_000,
            revenue: 463_517_383,
            genres: vec![Genre { id: 28, name: "Action".to_string() }],
        }
    }

    fn genre_table() -> GenreTable {
        GenreTable::new(vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 878, name: "Science Fiction".to_string() },
        ])
    }

    #[test]
    fn card_formats_rating_year_popularity_and_genres() {
        let card = movie_card(&sample_movie(), &genre_table());
        assert_eq!(card.id, 603);
        assert_eq!(card.rating, "8.2");
        assert_eq!(card.year, "1999");
        assert_eq!(card.popularity, "85.1");
        assert_eq!(card.genres, "Action, Science Fiction");
        assert_eq!(card.poster_url, "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn card_without_poster_gets_the_placeholder() {
        let mut movie = sample_movie();
        movie.poster_path = None;
        let card = movie_card(&movie, &genre_table());
        assert_eq!(card.poster_url, PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn card_without_release_date_shows_na() {
        let mut movie = sample_movie();
        movie.release_date = None;
        assert_eq!(movie_card(&movie, &genre_table()).year, "N/A");
    }

    #[test]
    fn card_with_unknown_genres_joins_nothing_extra() {
        let mut movie = sample_movie();
        movie.genre_ids = vec![28, 9999];
        assert_eq!(movie_card(&movie, &genre_table()).genres, "Action");
    }

    #[test]
    fn detail_view_formats_every_field() {
        let view = detail_view(&sample_detail());
        assert_eq!(view.rating, "⭐ 8.2 / 10 (26000 votes)");
        assert_eq!(view.runtime, "136 minutes");
        assert_eq!(view.release_date, "1999-03-30");
        assert_eq!(view.budget, "$63,000,000");
        assert_eq!(view.revenue, "$463,517,383");
        assert_eq!(view.genres, "Action");
        assert_eq!(view.poster_url, PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn absent_tagline_renders_blank() {
        let view = detail_view(&sample_detail());
        assert_eq!(view.tagline, "");
    }

    #[test]
    fn absent_runtime_renders_na() {
        let mut detail = sample_detail();
        detail.runtime = None;
        assert_eq!(detail_view(&detail).runtime, "N/A");
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1234), "1,234");
        assert_eq!(group_digits(63_000_000), "63,000,000");
    }
}
