//! HTTP client for the catalog backend.
//!
//! Requests and responses are plain data: [`CatalogClient`] builds an
//! [`HttpRequest`], hands it to a [`Transport`] for the round trip and decodes
//! the [`HttpResponse`]. In the browser the transport is [`BrowserTransport`];
//! tests plug in an in-memory one.
//!
//! List endpoints return a bare JSON array (`[{...}, ...]`). Enveloped bodies
//! such as `{"books": [...]}` are rejected as decode errors.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use leptos::logging::{error, log, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::book::{Book, NewBook};
use crate::models::review::{NewReview, Review};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, only set for `POST`.
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP round trip.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>>;
}

impl<T: Transport + ?Sized> Transport for Rc<T> {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>> {
        (**self).send(request)
    }
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            };

            let sent = match request.body {
                Some(body) => {
                    let request = builder
                        .header("content-type", "application/json")
                        .body(body)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                    request.send().await
                }
                None => builder.send().await,
            };
            let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Client type stored in the Leptos context.
pub type SharedClient = CatalogClient<Rc<dyn Transport>>;

#[derive(Clone)]
pub struct CatalogClient<T = BrowserTransport> {
    base_url: String,
    transport: T,
}

impl SharedClient {
    /// Client for the configured backend over the browser's `fetch`.
    pub fn browser(config: &ApiConfig) -> Self {
        CatalogClient::new(config, BrowserTransport).shared()
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Erases the transport type so the client can live in context.
    pub fn shared(self) -> SharedClient
    where
        T: 'static,
    {
        CatalogClient {
            base_url: self.base_url,
            transport: Rc::new(self.transport) as Rc<dyn Transport>,
        }
    }

    pub fn build_list_books(&self) -> HttpRequest {
        get(format!("{}/books", self.base_url))
    }

    pub fn build_get_book(&self, id: &str) -> HttpRequest {
        get(format!("{}/books/{}", self.base_url, urlencoding::encode(id)))
    }

    pub fn build_create_book(&self, book: &NewBook) -> Result<HttpRequest, ApiError> {
        post(format!("{}/books", self.base_url), book)
    }

    pub fn build_list_reviews(&self) -> HttpRequest {
        get(format!("{}/reviews", self.base_url))
    }

    pub fn build_list_reviews_for_book(&self, book_id: &str) -> HttpRequest {
        get(format!(
            "{}/reviews?bookId={}",
            self.base_url,
            urlencoding::encode(book_id)
        ))
    }

    pub fn build_create_review(&self, review: &NewReview) -> Result<HttpRequest, ApiError> {
        post(format!("{}/reviews", self.base_url), review)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.execute("list_books", Ok(self.build_list_books())).await
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let result = self.execute("get_book", Ok(self.build_get_book(id))).await;
        if let Err(err) = &result {
            if err.is_not_found() {
                warn!("[API] No book with id {}", id);
            }
        }
        result
    }

    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        self.execute("create_book", self.build_create_book(book)).await
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.execute("list_reviews", Ok(self.build_list_reviews())).await
    }

    pub async fn list_reviews_for_book(&self, book_id: &str) -> Result<Vec<Review>, ApiError> {
        self.execute(
            "list_reviews_for_book",
            Ok(self.build_list_reviews_for_book(book_id)),
        )
        .await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.execute("create_review", self.build_create_review(review))
            .await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        operation: &str,
        request: Result<HttpRequest, ApiError>,
    ) -> Result<R, ApiError> {
        let result = match request {
            Ok(request) => {
                log!("[API] {} {:?} {}", operation, request.method, request.url);
                match self.transport.send(request).await {
                    Ok(response) => parse(response),
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            error!("[API] {} failed: {}", operation, err);
        }
        result
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        body: None,
    }
}

fn post<B: Serialize>(url: String, payload: &B) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url,
        body: Some(body),
    })
}

fn parse<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
