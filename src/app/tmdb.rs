use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::app::error::FetchError;

pub const BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const PLACEHOLDER_POSTER_URL: &str = "https://placehold.co/500x750?text=No+Poster";

/// One entry of a list endpoint's `results` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

impl Movie {
    /// Four-digit release year, when the API supplied a usable date.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        date.get(..4)?.parse().ok()
    }
}

/// The `/movie/{id}` detail object.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

/// Id -> name lookup loaded once at startup. Keeps the API's ordering so the
/// genre filter can cycle through it deterministically.
#[derive(Debug, Default)]
pub struct GenreTable {
    genres: Vec<Genre>,
    by_id: HashMap<u64, String>,
}

impl GenreTable {
    pub fn new(genres: Vec<Genre>) -> Self {
        let by_id = genres.iter().map(|g| (g.id, g.name.clone())).collect();
        Self { genres, by_id }
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn get(&self, index: usize) -> Option<&Genre> {
        self.genres.get(index)
    }

    pub fn name(&self, id: u64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Comma-joined names for a genre id list. Unknown ids contribute nothing.
    pub fn joined(&self, ids: &[u64]) -> String {
        ids.iter()
            .filter_map(|id| self.name(*id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::blocking::Client,
}

impl TmdbClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn fetch_movies(&self, url: &str) -> Result<Vec<Movie>, FetchError> {
        Ok(self.get_json::<ListResponse>(url)?.results)
    }

    pub fn fetch_genres(&self, url: &str) -> Result<Vec<Genre>, FetchError> {
        Ok(self.get_json::<GenreListResponse>(url)?.genres)
    }

    pub fn fetch_detail(&self, url: &str) -> Result<MovieDetail, FetchError> {
        self.get_json(url)
    }

    /// Downloads and decodes a poster for in-terminal rendering.
    pub fn fetch_poster(&self, url: &str) -> Result<image::DynamicImage, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }
        let bytes = response.bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}
