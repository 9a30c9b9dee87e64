use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

const GENRES_PATH: &str = "/genre/movie/list";
const POPULAR_PATH: &str = "/movie/popular";
const SEARCH_PATH: &str = "/search/movie";
const DISCOVER_PATH: &str = "/discover/movie";

/// A movie as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Full poster URL, or `None` when TMDB has no poster for this movie.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", image_base_url, path))
    }

    /// Release year, when `release_date` is a `YYYY-MM-DD` date.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// An entry of the genre catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

// A missing or null result field is an empty result set, not an error.
#[derive(Debug, Deserialize)]
struct MovieListResponse {
    #[serde(default)]
    results: Option<Vec<Movie>>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Option<Vec<Genre>>,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status_message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sort orders accepted by the discovery endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    PopularityDesc,
    PopularityAsc,
    VoteAverageDesc,
    VoteAverageAsc,
    ReleaseDateDesc,
    ReleaseDateAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        Self::PopularityDesc,
        Self::PopularityAsc,
        Self::VoteAverageDesc,
        Self::VoteAverageAsc,
        Self::ReleaseDateDesc,
        Self::ReleaseDateAsc,
    ];

    /// The `sort_by` token sent to TMDB.
    pub fn token(self) -> &'static str {
        match self {
            Self::PopularityDesc => "popularity.desc",
            Self::PopularityAsc => "popularity.asc",
            Self::VoteAverageDesc => "vote_average.desc",
            Self::VoteAverageAsc => "vote_average.asc",
            Self::ReleaseDateDesc => "release_date.desc",
            Self::ReleaseDateAsc => "release_date.asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PopularityDesc => "Popularity Descending",
            Self::PopularityAsc => "Popularity Ascending",
            Self::VoteAverageDesc => "Rating Descending",
            Self::VoteAverageAsc => "Rating Ascending",
            Self::ReleaseDateDesc => "Release Date Descending",
            Self::ReleaseDateAsc => "Release Date Ascending",
        }
    }
}

/// Errors raised by a TMDB call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB API error: HTTP {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(e) => format!("Network error: {}", e),
            ApiError::Status { status, message } => {
                format!("TMDB rejected the request ({}): {}", status, message)
            }
            ApiError::Decode(e) => format!("Unexpected response format: {}", e),
        }
    }
}

/// Handle to the TMDB v3 API. Cheap to clone; clones share one connection pool.
///
/// Wraps the genre catalog, the popular list, free-text search and filtered
/// discovery. Every call is a GET carrying the `api_key` query parameter.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        let response: GenreListResponse = self.get_json(GENRES_PATH, &[]).await?;
        Ok(response.genres.unwrap_or_default())
    }

    pub async fn popular(&self) -> Result<Vec<Movie>, ApiError> {
        self.get_movies(POPULAR_PATH, &[]).await
    }

    /// Search by title. The query is sent as-is, even when empty.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_movies(SEARCH_PATH, &[("query", query)]).await
    }

    /// Filtered listing. `with_genres` is always sent, empty meaning all genres.
    pub async fn discover(
        &self,
        sort_by: SortKey,
        genre: Option<u64>,
    ) -> Result<Vec<Movie>, ApiError> {
        let with_genres = genre.map(|id| id.to_string()).unwrap_or_default();
        self.get_movies(
            DISCOVER_PATH,
            &[("sort_by", sort_by.token()), ("with_genres", &with_genres)],
        )
        .await
    }

    async fn get_movies(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Movie>, ApiError> {
        let response: MovieListResponse = self.get_json(path, params).await?;
        Ok(response.results.unwrap_or_default())
    }

    fn request(&self, path: &str, params: &[(&str, &str)]) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, ?params, "GET");
        let response = self.request(path, params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<StatusBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
