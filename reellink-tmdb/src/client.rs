use crate::config::ClientConfig;
use crate::error::{LookupError, Result};
use crate::model::{
    Actor, CastMember, Movie, MovieCreditsResponse, PersonMovieCreditsResponse, SearchResponse,
    SearchResult,
};
use crate::ranking::{rank_multi, rank_people};
use crate::source::EntitySource;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

/// HTTP client for the movie database REST API
pub struct MovieDbClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    language: String,
}

impl MovieDbClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Reellink/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .connect_timeout(config.timeout() / 2)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        // Url::join drops the last path segment unless the base ends with '/'
        let mut base = config.api_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url =
            Url::parse(&base).map_err(|e| LookupError::InvalidUrl(format!("{}: {}", base, e)))?;

        info!("Movie database client targeting {}", base_url);

        Ok(Self {
            client,
            base_url,
            token: config.token,
            language: config.language,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("language", &self.language);
        }

        Ok(url)
    }

    async fn fetch<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!("Fetching {}", url);

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("{} answered with status {}", endpoint, status);
            return Err(LookupError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.json::<T>().await?;
        debug!("{} answered in {:?}", endpoint, start.elapsed());
        Ok(body)
    }

    fn require_query(query: &str) -> Result<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(query)
    }
}

impl EntitySource for MovieDbClient {
    async fn movie_cast(&self, movie_id: u64) -> Result<Vec<CastMember>> {
        let credits: MovieCreditsResponse =
            self.fetch(&format!("movie/{}/credits", movie_id), &[]).await?;
        Ok(credits.cast)
    }

    async fn actor_details(&self, actor_id: u64) -> Result<Actor> {
        self.fetch(&format!("person/{}", actor_id), &[]).await
    }

    async fn actor_movie_credits(&self, actor_id: u64) -> Result<Vec<Movie>> {
        let credits: PersonMovieCreditsResponse = self
            .fetch(&format!("person/{}/movie_credits", actor_id), &[])
            .await?;
        Ok(credits.cast)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = Self::require_query(query)?;
        let page: SearchResponse<SearchResult> =
            self.fetch("search/multi", &[("query", query)]).await?;
        Ok(rank_multi(page.results))
    }

    async fn search_people(&self, query: &str) -> Result<Vec<Actor>> {
        let query = Self::require_query(query)?;
        let page: SearchResponse<Actor> = self
            .fetch(
                "search/person",
                &[("query", query), ("include_adult", "false")],
            )
            .await?;
        Ok(rank_people(page.results))
    }
}
