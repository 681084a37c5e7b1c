use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use minicatalog::api::{HttpMethod, HttpRequest, HttpResponse, Transport};
use minicatalog::error::ApiError;

pub const BASE_URL: &str = "http://catalog.mock";

/// In-memory stand-in for the catalog backend.
///
/// Records every request it receives. Lists come from the JSON given at
/// construction, reviews are generated per book (`"about <bookId>"`), and
/// creates echo the posted body back with an id unless `fail_creates` is set.
/// URLs passed to `fail` answer 500.
#[derive(Default)]
pub struct MockBackend {
    books_json: String,
    sent: RefCell<Vec<HttpRequest>>,
    fail_creates: Cell<bool>,
    delays: RefCell<HashMap<(HttpMethod, String), u32>>,
    failing: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn with_books(books_json: &str) -> Rc<Self> {
        Rc::new(Self {
            books_json: books_json.to_string(),
            ..Self::default()
        })
    }

    pub fn fail_creates(&self) {
        self.fail_creates.set(true);
    }

    /// Holds the reply to `method url` back for `millis`.
    pub fn delay(&self, method: HttpMethod, url: &str, millis: u32) {
        self.delays
            .borrow_mut()
            .insert((method, url.to_string()), millis);
    }

    pub fn fail(&self, url: &str) {
        self.failing.borrow_mut().push(url.to_string());
    }

    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn posts(&self) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|r| r.method == HttpMethod::Post)
            .count()
    }

    pub fn review_requests(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter(|r| r.url.contains("/reviews?bookId="))
            .map(|r| r.url.clone())
            .collect()
    }

    fn reply_for(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        if self.failing.borrow().contains(&request.url) {
            return Ok(HttpResponse {
                status: 500,
                body: "backend error".to_string(),
            });
        }
        let path = request.url.trim_start_matches(BASE_URL);
        let (status, body) = match (request.method, path) {
            (HttpMethod::Get, "/books") => (200, self.books_json.clone()),
            (HttpMethod::Get, path) if path.starts_with("/reviews?bookId=") => {
                let book_id = path.trim_start_matches("/reviews?bookId=");
                (
                    200,
                    format!(
                        r#"[{{"id":"r-{book_id}","bookId":"{book_id}","rating":4,"comment":"about {book_id}","createdAt":"2024-01-15T10:00:00Z"}}]"#
                    ),
                )
            }
            (HttpMethod::Post, _) if self.fail_creates.get() => (500, "create failed".to_string()),
            (HttpMethod::Post, "/books") | (HttpMethod::Post, "/reviews") => {
                let mut created: serde_json::Value =
                    serde_json::from_str(request.body.as_deref().unwrap_or("{}"))
                        .map_err(|e| ApiError::Decode(e.to_string()))?;
                created["id"] = "created-1".into();
                created["createdAt"] = "2024-01-15T10:00:00Z".into();
                (201, created.to_string())
            }
            _ => (404, "not found".to_string()),
        };
        Ok(HttpResponse { status, body })
    }
}

impl Transport for MockBackend {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>> {
        let delay = self
            .delays
            .borrow()
            .get(&(request.method, request.url.clone()))
            .copied()
            .unwrap_or(0);
        let reply = self.reply_for(&request);
        self.sent.borrow_mut().push(request);

        Box::pin(async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
            reply
        })
    }
}
