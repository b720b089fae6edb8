mod app;
mod config;
mod error;
mod query;
mod sort;
mod tmdb;
mod view;

pub use app::{App, CurrentScreen, DetailStatus, FetchMessage, GridStatus};
pub use config::Config;
pub use error::FetchError;
pub use query::Category;
pub use sort::SortKey;
pub use tmdb::{Genre, GenreTable, Movie, MovieDetail};
pub use view::{DetailView, MovieCard, movie_card};
