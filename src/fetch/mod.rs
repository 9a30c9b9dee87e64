mod messages;

pub use messages::{FetchChannels, FetchOutcome, FetchRequest};

use crate::tmdb::TmdbClient;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Spawns fetch workers against one TMDB client.
///
/// Each request runs as its own detached task and reports a single outcome on
/// the shared channel. Tasks never wait on or cancel one another, so when two
/// movie-list requests overlap the outcome received last is what the TUI shows.
#[derive(Clone)]
pub struct Dispatcher {
    client: TmdbClient,
    outcome_tx: UnboundedSender<FetchOutcome>,
}

impl Dispatcher {
    pub fn new(client: TmdbClient, outcome_tx: UnboundedSender<FetchOutcome>) -> Self {
        Self { client, outcome_tx }
    }

    /// Run `request` in the background. The outcome arrives on the channel.
    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        tracing::info!(operation = request.operation(), "dispatching request");
        let client = self.client.clone();
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = execute(&client, request).await;
            // The TUI may already have quit.
            let _ = outcome_tx.send(outcome);
        })
    }
}

/// Perform one request and wrap its result.
pub async fn execute(client: &TmdbClient, request: FetchRequest) -> FetchOutcome {
    let result = match &request {
        FetchRequest::Genres => {
            return match client.genres().await {
                Ok(genres) => FetchOutcome::Genres(genres),
                Err(error) => FetchOutcome::Failed {
                    request: FetchRequest::Genres,
                    error,
                },
            };
        }
        FetchRequest::PopularMovies => client.popular().await,
        FetchRequest::Search { query } => client.search(query).await,
        FetchRequest::SortChanged { sort_by, genre }
        | FetchRequest::GenreChanged { sort_by, genre } => {
            client.discover(*sort_by, *genre).await
        }
    };

    match result {
        Ok(movies) => FetchOutcome::Movies { request, movies },
        Err(error) => FetchOutcome::Failed { request, error },
    }
}
