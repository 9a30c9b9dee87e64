use crate::tmdb::{ApiError, Genre, Movie, SortKey};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Requests sent from the TUI to the fetch workers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Genre catalog, fetched once at startup
    Genres,

    /// Default popular list, fetched once at startup
    PopularMovies,

    /// Free-text search as submitted from the search bar
    Search { query: String },

    /// Discovery request triggered by a new sort order
    SortChanged { sort_by: SortKey, genre: Option<u64> },

    /// Discovery request triggered by a new genre
    GenreChanged { sort_by: SortKey, genre: Option<u64> },
}

impl FetchRequest {
    /// Short label naming the operation, used in log lines.
    pub fn operation(&self) -> &'static str {
        match self {
            FetchRequest::Genres => "fetching genres",
            FetchRequest::PopularMovies => "fetching default movies",
            FetchRequest::Search { .. } => "searching movies",
            FetchRequest::SortChanged { .. } => "sorting movies",
            FetchRequest::GenreChanged { .. } => "filtering movies by genre",
        }
    }
}

/// Messages sent from the fetch workers back to the TUI
#[derive(Debug)]
pub enum FetchOutcome {
    /// Genre catalog arrived
    Genres(Vec<Genre>),

    /// A movie list arrived; `request` is the one that produced it
    Movies {
        request: FetchRequest,
        movies: Vec<Movie>,
    },

    /// The request failed; the TUI keeps what it had
    Failed {
        request: FetchRequest,
        error: ApiError,
    },
}

/// Channel pair carrying outcomes from the workers to the TUI
pub struct FetchChannels {
    /// Sender for outcomes (cloned into every worker)
    pub outcome_tx: UnboundedSender<FetchOutcome>,

    /// Receiver for outcomes (drained by the TUI loop)
    pub outcome_rx: UnboundedReceiver<FetchOutcome>,
}

impl FetchChannels {
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = tokio::sync::mpsc::unbounded_channel();
        Self {
            outcome_tx,
            outcome_rx,
        }
    }
}

impl Default for FetchChannels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_channels_deliver_in_order() {
        let mut channels = FetchChannels::new();
        channels
            .outcome_tx
            .send(FetchOutcome::Genres(Vec::new()))
            .unwrap();
        channels
            .outcome_tx
            .send(FetchOutcome::Movies {
                request: FetchRequest::PopularMovies,
                movies: Vec::new(),
            })
            .unwrap();

        assert!(matches!(
            channels.outcome_rx.try_recv(),
            Ok(FetchOutcome::Genres(_))
        ));
        assert!(matches!(
            channels.outcome_rx.try_recv(),
            Ok(FetchOutcome::Movies {
                request: FetchRequest::PopularMovies,
                ..
            })
        ));
        assert!(channels.outcome_rx.try_recv().is_err());
    }

    #[test]
    fn test_operation_labels() {
        assert_eq!(FetchRequest::Genres.operation(), "fetching genres");
        assert_eq!(
            FetchRequest::PopularMovies.operation(),
            "fetching default movies"
        );
        assert_eq!(
            FetchRequest::Search {
                query: String::new()
            }
            .operation(),
            "searching movies"
        );
        assert_eq!(
            FetchRequest::SortChanged {
                sort_by: SortKey::default(),
                genre: None
            }
            .operation(),
            "sorting movies"
        );
        assert_eq!(
            FetchRequest::GenreChanged {
                sort_by: SortKey::default(),
                genre: Some(12)
            }
            .operation(),
            "filtering movies by genre"
        );
    }
}
