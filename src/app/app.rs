use std::sync::mpsc;
use std::thread;

use image::DynamicImage;
use ratatui::widgets::ListState;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

use crate::app::config::Config;
use crate::app::error::FetchError;
use crate::app::query::{self, Category};
use crate::app::sort::{self, SortKey};
use crate::app::tmdb::{Genre, GenreTable, Movie, MovieDetail, TmdbClient};
use crate::app::view::{self, DetailView};

const NO_RESULTS: &str = "No movies found.";
const NO_SEARCH_RESULTS: &str = "No movies found. Try a different search.";

/// Messages sent back from fetch worker threads.
pub enum FetchMessage {
    Genres(Result<Vec<Genre>, FetchError>),
    Grid {
        seq: u64,
        outcome: Result<Vec<Movie>, FetchError>,
    },
    Detail {
        seq: u64,
        outcome: Result<MovieDetail, FetchError>,
    },
    Poster {
        seq: u64,
        outcome: Result<DynamicImage, FetchError>,
    },
}

pub enum CurrentScreen {
    Grid,
    Detail,
}

/// What the content area is showing for the grid surface.
#[derive(Debug, PartialEq)]
pub enum GridStatus {
    Loading(String),
    Results,
    /// Successful fetch with nothing in it; neutral, not an error.
    Notice(String),
    Error(String),
    MissingKey,
}

pub enum DetailStatus {
    Loading,
    Ready(DetailView),
    Error(String),
}

pub struct App {
    config: Config,
    client: TmdbClient,
    sender: mpsc::Sender<FetchMessage>,
    receiver: mpsc::Receiver<FetchMessage>,

    pub genres: GenreTable,
    /// Current Result Set: the last successfully fetched list.
    pub movies: Vec<Movie>,
    /// What the grid is showing, in display order. Diverges from `movies`
    /// only after a failed fetch, until the next success.
    pub displayed: Vec<Movie>,
    pub grid_status: GridStatus,
    grid_seq: u64,
    empty_notice: &'static str,

    pub sort_key: SortKey,
    genre_cursor: usize,

    pub searching: bool,
    pub search_term: String,

    pub current_screen: CurrentScreen,
    pub detail_status: DetailStatus,
    detail_seq: u64,
    pub loading_poster: bool,
    pub poster: Option<StatefulProtocol>,
    picker: Option<Picker>,

    pub selected_index: usize,
    pub list_state: ListState,
}

impl App {
    pub fn new(config: Config, picker: Option<Picker>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            config,
            client: TmdbClient::new(),
            sender,
            receiver,
            genres: GenreTable::default(),
            movies: Vec::new(),
            displayed: Vec::new(),
            grid_status: GridStatus::Loading("Loading movies...".to_string()),
            grid_seq: 0,
            empty_notice: NO_RESULTS,
            sort_key: SortKey::Popularity,
            genre_cursor: 0,
            searching: false,
            search_term: String::new(),
            current_screen: CurrentScreen::Grid,
            detail_status: DetailStatus::Loading,
            detail_seq: 0,
            loading_poster: false,
            poster: None,
            picker,
            selected_index: 0,
            list_state,
        }
    }

    /// Startup loads: the genre table and the trending listing.
    pub fn start(&mut self) {
        self.load_genres();
        self.load_trending();
    }

    fn api_key(&mut self) -> Option<String> {
        match &self.config.api_key {
            Some(key) => Some(key.clone()),
            None => {
                self.grid_status = GridStatus::MissingKey;
                None
            }
        }
    }

    fn load_genres(&mut self) {
        let Some(key) = self.api_key() else { return };
        let url = query::genre_list_url(&key);
        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let _ = sender.send(FetchMessage::Genres(client.fetch_genres(&url)));
        });
    }

    pub fn load_trending(&mut self) {
        let Some(key) = self.api_key() else { return };
        self.dispatch_grid(
            query::trending_url(&key),
            "Loading trending movies...",
            NO_RESULTS,
        );
    }

    pub fn load_discover(&mut self, category: Category) {
        let Some(key) = self.api_key() else { return };
        let url = query::discover_url(&key, category, self.genre_filter());
        self.dispatch_grid(url, "Loading movies...", NO_RESULTS);
    }

    pub fn submit_search(&mut self) {
        self.searching = false;
        let Some(key) = self.api_key() else { return };
        match query::search_url(&key, &self.search_term) {
            Ok(url) => self.dispatch_grid(url, "Searching for movies...", NO_SEARCH_RESULTS),
            Err(e) => self.grid_status = GridStatus::Error(e.to_string()),
        }
    }

    /// Advances the genre filter cycle (All -> each loaded genre) and reloads
    /// the default popular listing with the new filter.
    pub fn cycle_genre(&mut self) {
        if self.genres.is_empty() {
            return;
        }
        self.genre_cursor = (self.genre_cursor + 1) % (self.genres.len() + 1);
        self.load_discover(Category::Popular);
    }

    pub fn genre_filter(&self) -> Option<u64> {
        if self.genre_cursor == 0 {
            None
        } else {
            self.genres.get(self.genre_cursor - 1).map(|g| g.id)
        }
    }

    pub fn genre_filter_label(&self) -> &str {
        if self.genre_cursor == 0 {
            "All"
        } else {
            self.genres
                .get(self.genre_cursor - 1)
                .map(|g| g.name.as_str())
                .unwrap_or("All")
        }
    }

    fn dispatch_grid(&mut self, url: String, caption: &str, empty_notice: &'static str) {
        self.grid_seq += 1;
        let seq = self.grid_seq;
        self.empty_notice = empty_notice;
        self.displayed.clear();
        self.grid_status = GridStatus::Loading(caption.to_string());
        tracing::debug!(seq, "dispatching grid fetch");

        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let outcome = client.fetch_movies(&url);
            let _ = sender.send(FetchMessage::Grid { seq, outcome });
        });
    }

    /// Re-orders the Current Result Set for display. Does nothing at all,
    /// including no re-render, when the result set is empty.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort_key = key;
        if self.movies.is_empty() {
            return;
        }
        let sorted = sort::sort_movies(key, &self.movies);
        self.show_movies(sorted);
    }

    pub fn cycle_sort(&mut self) {
        self.sort_by(self.sort_key.next());
    }

    fn show_movies(&mut self, movies: Vec<Movie>) {
        self.displayed = movies;
        self.grid_status = if self.displayed.is_empty() {
            GridStatus::Notice(self.empty_notice.to_string())
        } else {
            GridStatus::Results
        };
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn open_detail(&mut self) {
        let Some(movie) = self.displayed.get(self.selected_index) else {
            return;
        };
        let id = movie.id;
        let Some(key) = self.api_key() else { return };

        self.current_screen = CurrentScreen::Detail;
        self.detail_seq += 1;
        let seq = self.detail_seq;
        self.detail_status = DetailStatus::Loading;
        self.poster = None;
        self.loading_poster = false;
        tracing::debug!(movie_id = id, seq, "dispatching detail fetch");

        let url = query::detail_url(&key, id);
        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let outcome = client.fetch_detail(&url);
            let _ = sender.send(FetchMessage::Detail { seq, outcome });
        });
    }

    fn fetch_poster(&mut self, url: String) {
        self.loading_poster = true;
        let seq = self.detail_seq;
        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let outcome = client.fetch_poster(&url);
            let _ = sender.send(FetchMessage::Poster { seq, outcome });
        });
    }

    pub fn close_detail(&mut self) {
        self.current_screen = CurrentScreen::Grid;
        self.poster = None;
    }

    pub fn next_movie(&mut self) {
        let count = self.displayed.len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
        self.list_state.select(Some(self.selected_index));
    }

    pub fn previous_movie(&mut self) {
        let count = self.displayed.len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Drains worker completions between frames.
    pub fn poll_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Genres(Ok(genres)) => {
                tracing::debug!(count = genres.len(), "genre table loaded");
                self.genres = GenreTable::new(genres);
            }
            FetchMessage::Genres(Err(e)) => {
                tracing::warn!(error = %e, "failed to load genres");
            }
            FetchMessage::Grid { seq, outcome } => {
                if seq != self.grid_seq {
                    tracing::debug!(seq, latest = self.grid_seq, "discarding stale grid fetch");
                    return;
                }
                match outcome {
                    Ok(movies) => {
                        // Committed only on success; display follows fetch order.
                        self.movies = movies;
                        self.show_movies(self.movies.clone());
                    }
                    Err(e) => {
                        self.displayed.clear();
                        self.grid_status =
                            GridStatus::Error(format!("Something went wrong: {e}"));
                    }
                }
            }
            FetchMessage::Detail { seq, outcome } => {
                if seq != self.detail_seq {
                    tracing::debug!(seq, latest = self.detail_seq, "discarding stale detail fetch");
                    return;
                }
                match outcome {
                    Ok(detail) => {
                        tracing::debug!(movie_id = detail.id, "detail loaded");
                        let detail_view = view::detail_view(&detail);
                        self.fetch_poster(detail_view.poster_url.clone());
                        self.detail_status = DetailStatus::Ready(detail_view);
                    }
                    Err(e) => {
                        self.detail_status =
                            DetailStatus::Error(format!("Failed to load details: {e}"));
                    }
                }
            }
            FetchMessage::Poster { seq, outcome } => {
                if seq != self.detail_seq {
                    return;
                }
                self.loading_poster = false;
                match outcome {
                    Ok(img) => {
                        if let Some(picker) = &self.picker {
                            self.poster = Some(picker.new_resize_protocol(img));
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "failed to load poster"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(
            Config {
                api_key: Some("key".to_string()),
            },
            None,
        )
    }

    fn movie(title: &str) -> Movie {
        Movie {
            id: 1,
            title: title.to_string(),
            poster_path: None,
            vote_average: 0.0,
            popularity: 0.0,
            release_date: None,
            genre_ids: Vec::new(),
        }
    }

    #[test]
    fn successful_fetch_commits_and_renders() {
        let mut app = test_app();
        app.grid_seq = 1;
        app.handle_message(FetchMessage::Grid {
            seq: 1,
            outcome: Ok(vec![movie("Alien"), movie("Brazil")]),
        });
        assert_eq!(app.movies.len(), 2);
        assert_eq!(app.displayed.len(), 2);
        assert_eq!(app.grid_status, GridStatus::Results);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = test_app();
        app.grid_seq = 2;
        app.handle_message(FetchMessage::Grid {
            seq: 1,
            outcome: Ok(vec![movie("Old")]),
        });
        assert!(app.movies.is_empty());

        app.handle_message(FetchMessage::Grid {
            seq: 2,
            outcome: Ok(vec![movie("New")]),
        });
        assert_eq!(app.movies[0].title, "New");
    }

    #[test]
    fn empty_results_show_a_notice_not_an_error() {
        let mut app = test_app();
        app.grid_seq = 1;
        app.empty_notice = NO_SEARCH_RESULTS;
        app.handle_message(FetchMessage::Grid {
            seq: 1,
            outcome: Ok(Vec::new()),
        });
        assert_eq!(
            app.grid_status,
            GridStatus::Notice(NO_SEARCH_RESULTS.to_string())
        );
        assert!(app.movies.is_empty());
    }

    #[test]
    fn http_failure_surfaces_status_and_keeps_the_result_set() {
        let mut app = test_app();
        app.movies = vec![movie("Kept")];
        app.displayed = vec![movie("Kept")];
        app.grid_seq = 1;
        app.handle_message(FetchMessage::Grid {
            seq: 1,
            outcome: Err(FetchError::Http(404)),
        });
        match &app.grid_status {
            GridStatus::Error(message) => assert!(message.contains("404"), "{message}"),
            other => panic!("expected error status, got {other:?}"),
        }
        // Stored set survives; the visible list does not.
        assert_eq!(app.movies.len(), 1);
        assert!(app.displayed.is_empty());
    }

    #[test]
    fn blank_search_never_dispatches() {
        let mut app = test_app();
        app.search_term = "   ".to_string();
        let seq_before = app.grid_seq;
        app.submit_search();
        assert_eq!(app.grid_seq, seq_before);
        assert_eq!(
            app.grid_status,
            GridStatus::Error("Please enter a movie title!".to_string())
        );
    }

    #[test]
    fn sort_is_a_noop_on_an_empty_result_set() {
        let mut app = test_app();
        app.grid_status = GridStatus::Error("Something went wrong: Error: 500".to_string());
        app.sort_by(SortKey::Title);
        assert!(matches!(app.grid_status, GridStatus::Error(_)));
        assert!(app.displayed.is_empty());
    }

    #[test]
    fn sort_reorders_display_without_touching_the_result_set() {
        let mut app = test_app();
        app.grid_seq = 1;
        app.handle_message(FetchMessage::Grid {
            seq: 1,
            outcome: Ok(vec![movie("zodiac"), movie("Alien")]),
        });
        app.sort_by(SortKey::Title);
        assert_eq!(app.displayed[0].title, "Alien");
        assert_eq!(app.movies[0].title, "zodiac");
    }

    #[test]
    fn missing_key_short_circuits_dispatch() {
        let mut app = App::new(Config::default(), None);
        app.load_trending();
        assert_eq!(app.grid_status, GridStatus::MissingKey);
        assert_eq!(app.grid_seq, 0);
    }

    #[test]
    fn stale_detail_completion_is_discarded() {
        let mut app = test_app();
        app.detail_seq = 3;
        app.handle_message(FetchMessage::Detail {
            seq: 2,
            outcome: Err(FetchError::Http(500)),
        });
        assert!(matches!(app.detail_status, DetailStatus::Loading));
    }

    #[test]
    fn genre_cycle_is_inert_until_the_table_loads() {
        let mut app = test_app();
        app.cycle_genre();
        assert_eq!(app.genre_filter(), None);
        assert_eq!(app.grid_seq, 0);
    }
}
