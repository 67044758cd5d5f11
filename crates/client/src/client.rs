use std::time::Instant;

use derive_more::Debug;
use models::{Document, Entity, ListDocument, Resource};
use reqwest::{
    Client as HttpClient, Method, RequestBuilder, Response, StatusCode, header::CONTENT_TYPE,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    error::{Error, ListAllError},
    filter::MonitorFilter,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://uptime.betterstack.com";

/// Environment variable read by [`Client::from_env`].
pub const TOKEN_ENV_VAR: &str = "BETTERSTACK_TOKEN";

const API_PREFIX: &str = "api/v2";

/// Page size requested on every list call, the maximum the service accepts.
const PER_PAGE: u32 = 250;

/// Client for the Better Stack Uptime API.
///
/// Holds only the HTTP transport, the target host, and the bearer token;
/// immutable after construction and safe to reuse across sequential calls.
#[derive(Clone, Debug)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    #[debug(skip)]
    token: String,
}

impl Client {
    /// Create a client for the production host.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default host, e.g. a local mock server
    /// in tests.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: HttpClient::new(), base_url, token: token.into() }
    }

    /// Create a client with the token from [`TOKEN_ENV_VAR`].
    ///
    /// A missing or empty variable is a fatal configuration error, not a
    /// recoverable one.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(Error::Config(format!("{TOKEN_ENV_VAR} environment variable not set"))),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, collection)
    }

    fn resource_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}/{}", self.base_url, API_PREFIX, collection, id)
    }

    /// Start a request carrying the fixed default headers.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send a request, logging its outcome and duration.
    async fn dispatch(&self, operation: &str, request: RequestBuilder) -> Result<Response, Error> {
        let start = Instant::now();
        let result = request.send().await;
        let duration_ms = start.elapsed().as_millis();
        match &result {
            Ok(response) => {
                debug!(operation, status = %response.status(), duration_ms, "request completed")
            }
            Err(e) => error!(operation, duration_ms, error = %e, "request failed"),
        }
        result.map_err(|source| Error::Transport { operation: operation.to_owned(), source })
    }

    fn check_status(
        operation: &str,
        response: &Response,
        expected: StatusCode,
    ) -> Result<(), Error> {
        let status = response.status();
        if status == expected {
            Ok(())
        } else {
            Err(Error::Status { operation: operation.to_owned(), status, expected })
        }
    }

    async fn decode<D>(operation: &str, response: Response) -> Result<D, Error>
    where
        D: serde::de::DeserializeOwned,
    {
        response
            .json::<D>()
            .await
            .map_err(|source| Error::Decode { operation: operation.to_owned(), source })
    }

    fn api_errors(operation: &str, errors: Option<Value>) -> Error {
        Error::Api { operation: operation.to_owned(), errors: errors.unwrap_or(Value::Null) }
    }

    /// Fetch one page of a collection. Page numbers are 1-based; values
    /// below 1 are clamped to 1.
    pub(crate) async fn list_page<T: Resource>(
        &self,
        page: u64,
        filter: Option<&MonitorFilter>,
    ) -> Result<ListDocument<T>, Error> {
        let operation = format!("list {}", T::COLLECTION);
        let page = page.max(1);
        let mut request = self
            .request(Method::GET, &self.collection_url(T::COLLECTION))
            .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
        if let Some(filter) = filter {
            request = request.query(&[filter.query_pair()]);
        }

        let response = self.dispatch(&operation, request).await?;
        Self::check_status(&operation, &response, StatusCode::OK)?;
        let document: ListDocument<T> = Self::decode(&operation, response).await?;
        if document.has_errors() {
            return Err(Self::api_errors(&operation, document.errors));
        }
        Ok(document)
    }

    /// Fetch the first page with a filter applied and return the matching
    /// attributes.
    pub(crate) async fn find<T: Resource>(&self, filter: &MonitorFilter) -> Result<Vec<T>, Error> {
        let document = self.list_page::<T>(1, Some(filter)).await?;
        Ok(document.data.into_iter().map(Entity::into_attributes).collect())
    }

    pub(crate) async fn create_resource<T: Resource>(&self, attributes: &T) -> Result<T, Error> {
        let operation = format!("create {}", T::KIND);
        let request =
            self.request(Method::POST, &self.collection_url(T::COLLECTION)).json(attributes);
        let response = self.dispatch(&operation, request).await?;
        Self::check_status(&operation, &response, StatusCode::CREATED)?;
        let document: Document<T> = Self::decode(&operation, response).await?;
        if document.has_errors() {
            return Err(Self::api_errors(&operation, document.errors));
        }
        Ok(document.data.into_attributes())
    }

    pub(crate) async fn get_resource<T: Resource>(&self, id: &str) -> Result<T, Error> {
        let operation = format!("get {}", T::KIND);
        let request = self.request(Method::GET, &self.resource_url(T::COLLECTION, id));
        let response = self.dispatch(&operation, request).await?;
        Self::check_status(&operation, &response, StatusCode::OK)?;
        let document: Document<T> = Self::decode(&operation, response).await?;
        if document.has_errors() {
            return Err(Self::api_errors(&operation, document.errors));
        }
        Ok(document.data.into_attributes())
    }

    pub(crate) async fn update_resource<T: Resource>(
        &self,
        id: &str,
        attributes: &T,
    ) -> Result<T, Error> {
        let operation = format!("update {}", T::KIND);
        let request =
            self.request(Method::PATCH, &self.resource_url(T::COLLECTION, id)).json(attributes);
        let response = self.dispatch(&operation, request).await?;
        Self::check_status(&operation, &response, StatusCode::OK)?;
        let document: Document<T> = Self::decode(&operation, response).await?;
        if document.has_errors() {
            return Err(Self::api_errors(&operation, document.errors));
        }
        Ok(document.data.into_attributes())
    }

    pub(crate) async fn delete_resource<T: Resource>(&self, id: &str) -> Result<(), Error> {
        let operation = format!("delete {}", T::KIND);
        let request = self.request(Method::DELETE, &self.resource_url(T::COLLECTION, id));
        let response = self.dispatch(&operation, request).await?;
        Self::check_status(&operation, &response, StatusCode::NO_CONTENT)
    }

    /// Enumerate a collection across all pages into one ordered vector.
    ///
    /// Pages are fetched strictly sequentially and appended in server
    /// order, page 1 first. On failure the pages already aggregated travel
    /// with the error. Pagination is by offset, so a collection mutated
    /// while pages are being fetched may yield a duplicate or miss an item.
    pub(crate) async fn list_all<T: Resource>(&self) -> Result<Vec<T>, ListAllError<T>> {
        let mut collected = Vec::new();

        let first = match self.list_page::<T>(1, None).await {
            Ok(document) => document,
            Err(source) => return Err(ListAllError { collected, source }),
        };

        let total_pages = match first.pagination.total_pages() {
            Ok(total) => total,
            Err(source) => {
                let operation = format!("list {}", T::COLLECTION);
                return Err(ListAllError {
                    collected,
                    source: Error::Pagination { operation, source },
                });
            }
        };

        collected.extend(first.data.into_iter().map(Entity::into_attributes));

        if total_pages == 1 {
            return Ok(collected);
        }

        debug!(collection = T::COLLECTION, total_pages, "listing remaining pages");

        for page in 2..=total_pages {
            match self.list_page::<T>(page, None).await {
                Ok(document) => {
                    collected.extend(document.data.into_iter().map(Entity::into_attributes));
                }
                Err(source) => return Err(ListAllError { collected, source }),
            }
        }

        Ok(collected)
    }
}
