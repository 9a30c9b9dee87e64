use crate::config::Config;
use crate::fetch::{FetchOutcome, FetchRequest};
use crate::tmdb::{Genre, Movie, SortKey};
use crate::ui::picker::{ALL_GENRES_LABEL, PickerOverlay, PickerValue};

pub const NO_RESULTS_MESSAGE: &str = "Sorry! Unable to found related search...";
pub const EMPTY_LIST_MESSAGE: &str = "No movie found...";

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// What the movie area shows, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Last search found nothing; the list is hidden.
    NoResults,
    /// One card per movie.
    Movies,
    /// Nothing loaded.
    Empty,
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub picker: Option<PickerOverlay>,

    // Data as last delivered by TMDB
    pub movies: Vec<Movie>,
    pub genres: Vec<Genre>,

    // View state
    pub search_query: String,
    pub sort_by: SortKey,
    pub selected_genre: Option<u64>,
    pub expanded_movie_id: Option<u64>,
    pub no_results: bool,
    pub selected: usize,

    pub preview_len: usize,
    pub image_base_url: String,

    pub status_msg: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            input_mode: InputMode::Normal,
            picker: None,

            movies: Vec::new(),
            genres: Vec::new(),

            search_query: String::new(),
            sort_by: SortKey::default(),
            selected_genre: None,
            expanded_movie_id: None,
            no_results: false,
            selected: 0,

            preview_len: config.overview_preview_len,
            image_base_url: config.image_base_url.clone(),

            status_msg: String::new(),
        }
    }

    /// The two independent requests issued at startup.
    pub fn initial_requests() -> [FetchRequest; 2] {
        [FetchRequest::Genres, FetchRequest::PopularMovies]
    }

    /// Submit the search bar text as typed. Empty text is submitted too.
    pub fn submit_search(&mut self) -> FetchRequest {
        self.input_mode = InputMode::Normal;
        FetchRequest::Search {
            query: self.search_query.clone(),
        }
    }

    /// Switch sort order, keeping the selected genre.
    pub fn change_sort(&mut self, sort_by: SortKey) -> FetchRequest {
        self.sort_by = sort_by;
        FetchRequest::SortChanged {
            sort_by,
            genre: self.selected_genre,
        }
    }

    /// Switch genre (`None` for all genres), keeping the sort order.
    pub fn change_genre(&mut self, genre: Option<u64>) -> FetchRequest {
        self.selected_genre = genre;
        FetchRequest::GenreChanged {
            sort_by: self.sort_by,
            genre,
        }
    }

    /// Expand `movie_id`, or collapse it if it is the expanded one.
    pub fn toggle_description(&mut self, movie_id: u64) {
        self.expanded_movie_id = if self.expanded_movie_id == Some(movie_id) {
            None
        } else {
            Some(movie_id)
        };
    }

    /// Toggle the highlighted card.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.movies.get(self.selected).map(|m| m.id) {
            self.toggle_description(id);
        }
    }

    pub fn is_expanded(&self, movie_id: u64) -> bool {
        self.expanded_movie_id == Some(movie_id)
    }

    /// Overview text as the card shows it.
    pub fn overview_text(&self, movie: &Movie) -> String {
        if self.is_expanded(movie.id) {
            movie.overview.clone()
        } else {
            overview_preview(&movie.overview, self.preview_len)
        }
    }

    pub fn body(&self) -> Body {
        if self.no_results {
            Body::NoResults
        } else if !self.movies.is_empty() {
            Body::Movies
        } else {
            Body::Empty
        }
    }

    /// Fold a worker outcome into the state. Failures only leave a log line.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Genres(genres) => {
                tracing::info!(count = genres.len(), "genres loaded");
                self.genres = genres;
            }
            FetchOutcome::Movies { request, movies } => {
                tracing::info!(
                    operation = request.operation(),
                    count = movies.len(),
                    "movies loaded"
                );
                if let FetchRequest::Search { query } = &request {
                    self.no_results = movies.is_empty() && !query.is_empty();
                }
                self.movies = movies;
                self.selected = 0;
                self.status_msg = format!("{} movies", self.movies.len());
            }
            FetchOutcome::Failed { request, error } => {
                tracing::error!("Error {}: {}", request.operation(), error.user_message());
            }
        }
    }

    pub fn open_sort_picker(&mut self) {
        self.picker = Some(PickerOverlay::sort(self.sort_by));
    }

    pub fn open_genre_picker(&mut self) {
        self.picker = Some(PickerOverlay::genre(&self.genres, self.selected_genre));
    }

    /// Apply a picker choice, producing the discovery request it triggers.
    pub fn choose(&mut self, value: PickerValue) -> FetchRequest {
        self.picker = None;
        match value {
            PickerValue::Sort(sort_by) => self.change_sort(sort_by),
            PickerValue::Genre(genre) => self.change_genre(genre),
        }
    }

    /// Name of the selected genre for the filter bar.
    pub fn genre_label(&self) -> String {
        match self.selected_genre {
            None => ALL_GENRES_LABEL.to_string(),
            Some(id) => self
                .genres
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| id.to_string()),
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.movies.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// First `len` characters of `overview` followed by "...".
///
/// The marker is appended even when nothing was cut.
pub fn overview_preview(overview: &str, len: usize) -> String {
    let mut preview: String = overview.chars().take(len).collect();
    preview.push_str("...");
    preview
}
