//! REST client for the `/users` resource.
//!
//! [`UsersApi::list`] is the single read path for the table. Without a search term it
//! lets the server page, sort and filter (`_page`, `_limit`, `_sort`, `_order`,
//! `status`, `role`) and takes the total from `X-Total-Count`. With a search term it
//! fetches the filtered collection and narrows it in [`crate::users::local`].
//!
//! The remaining calls are plain pass-throughs; failures go back to the caller and
//! nothing is retried.

use log::{debug, error, warn};
use thiserror::Error;

use crate::config::BusinessConfig;
use crate::http::{Client, HttpError, RequestBuilder, Response};
use crate::users::local;
use crate::users::model::{User, UserId, UserInput};
use crate::users::query::{Filters, PageResult, UserQuery};

/// Header carrying the unpaged row count on `_page` requests.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsersApiError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse {what}: {message}")]
    Decode { what: &'static str, message: String },
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, UsersApiError>;

#[derive(Debug, Clone)]
pub struct UsersApi {
    client: Client,
    config: BusinessConfig,
}

impl UsersApi {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    fn user_url(&self, id: &UserId) -> String {
        format!("{}/{id}", self.config.users_url())
    }

    /// GET `/users` for the page described by `query`.
    pub async fn list(&self, query: &UserQuery) -> ApiResult<PageResult> {
        match query.search_term() {
            Some(term) => {
                debug!("Searching users client-side for {term:?}");
                let all = self.fetch_filtered(&query.filters).await?;
                Ok(local::search_page(all, query))
            }
            None => self.list_paged(query).await,
        }
    }

    async fn list_paged(&self, query: &UserQuery) -> ApiResult<PageResult> {
        let request = self
            .client
            .get(self.config.users_url())
            .query(query.server_query_pairs());
        let response = send(request).await?;
        let users: Vec<User> = decode(&response, "user list")?;

        let total_count = match parse_total_count(&response) {
            Some(total) => total,
            None => {
                warn!("Missing or invalid {TOTAL_COUNT_HEADER} header; counting separately");
                self.fetch_filtered(&query.filters).await?.len()
            }
        };

        Ok(PageResult {
            users,
            total_count,
            page: query.page.max(1),
            page_size: query.page_size.max(1),
        })
    }

    /// GET `/users` with only the filter parameters.
    async fn fetch_filtered(&self, filters: &Filters) -> ApiResult<Vec<User>> {
        let request = self
            .client
            .get(self.config.users_url())
            .query(filters.query_pairs());
        let response = send(request).await?;
        decode(&response, "user list")
    }

    /// GET `/users/{id}`
    pub async fn get(&self, id: &UserId) -> ApiResult<User> {
        let response = send(self.client.get(self.user_url(id))).await?;
        decode(&response, "user")
    }

    /// POST `/users`
    pub async fn create(&self, input: &UserInput) -> ApiResult<User> {
        let request = self
            .client
            .post(self.config.users_url())
            .json(input)
            .map_err(|e| UsersApiError::Encode(e.to_string()))?;
        let response = send(request).await?;
        decode(&response, "created user")
    }

    /// PUT `/users/{id}`
    pub async fn update(&self, id: &UserId, input: &UserInput) -> ApiResult<User> {
        let request = self
            .client
            .put(self.user_url(id))
            .json(input)
            .map_err(|e| UsersApiError::Encode(e.to_string()))?;
        let response = send(request).await?;
        decode(&response, "updated user")
    }

    /// DELETE `/users/{id}`
    pub async fn delete(&self, id: &UserId) -> ApiResult<()> {
        send(self.client.delete(self.user_url(id))).await?;
        Ok(())
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let method = request.method().as_str();
    let url = request.url().to_owned();
    debug!("{method} {url} {:?}", request.query_pairs());

    let response = request.send().await.map_err(|e| {
        error!("{method} {url} failed: {e}");
        UsersApiError::from(e)
    })?;

    if !response.is_success() {
        error!("{method} {url} returned status {}", response.status);
        return Err(UsersApiError::Status(response.status));
    }
    Ok(response)
}

fn decode<T: serde::de::DeserializeOwned>(response: &Response, what: &'static str) -> ApiResult<T> {
    response.json().map_err(|e| {
        error!("Failed to parse {what}: {e}");
        UsersApiError::Decode {
            what,
            message: e.to_string(),
        }
    })
}

fn parse_total_count(response: &Response) -> Option<usize> {
    response
        .header(TOTAL_COUNT_HEADER)
        .and_then(|value| value.trim().parse().ok())
}
