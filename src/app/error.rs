use thiserror::Error;

/// Ways a fetch can fail, with the user-facing message as the Display form.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Blank search input; caught before any request is issued.
    #[error("Please enter a movie title!")]
    EmptyQuery,

    /// Non-2xx response from the API.
    #[error("Error: {0}")]
    Http(u16),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Decode(#[from] image::ImageError),
}
