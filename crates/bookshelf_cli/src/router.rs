//! JSON-lines request routing onto book handlers.
//!
//! # Responsibility
//! - Decode one request per line and dispatch it to `BookHandler`.
//! - Turn malformed input into `fail` envelopes instead of aborting.
//!
//! # Invariants
//! - Every input line yields exactly one response.

use bookshelf_core::{ApiResponse, BookHandler, BookQueryParams, BookRepository, NewBook};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// One request line: `{"method": "GET", "path": "/books?reading=1", "body": {...}}`.
#[derive(Debug, Deserialize)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub body: Option<Value>,
}

/// Resolved route for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    AddBook,
    ListBooks(BookQueryParams),
    GetBook(String),
    EditBook(String),
    DeleteBook(String),
}

/// Matches a method and request target against the book routes.
///
/// Returns `Ok(None)` for unknown routes and `Err` for undecodable targets.
pub fn resolve_route(method: &str, target: &str) -> Result<Option<Route>, String> {
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };
    let segments = path
        .trim_matches('/')
        .split('/')
        .map(percent_decode)
        .collect::<Result<Vec<_>, _>>()?;

    let route = match (method.to_ascii_uppercase().as_str(), segments.as_slice()) {
        ("POST", [books]) if books == "books" => Some(Route::AddBook),
        ("GET", [books]) if books == "books" => {
            Some(Route::ListBooks(parse_query(query.unwrap_or(""))?))
        }
        ("GET", [books, id]) if books == "books" => Some(Route::GetBook(id.clone())),
        ("PUT", [books, id]) if books == "books" => Some(Route::EditBook(id.clone())),
        ("DELETE", [books, id]) if books == "books" => Some(Route::DeleteBook(id.clone())),
        _ => None,
    };
    Ok(route)
}

fn parse_query(query: &str) -> Result<BookQueryParams, String> {
    let mut params = BookQueryParams::default();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = percent_decode(&key.replace('+', " "))?;
        let value = percent_decode(&value.replace('+', " "))?;
        match key.as_str() {
            "name" => params.name = Some(value),
            "finished" => params.finished = Some(value),
            "reading" => params.reading = Some(value),
            _ => {}
        }
    }
    Ok(params)
}

fn percent_decode(value: &str) -> Result<String, String> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| format!("invalid percent-encoding in `{value}`: {err}"))
}

/// Dispatches request lines to a book handler.
pub struct Router<R: BookRepository> {
    handler: BookHandler<R>,
}

impl<R: BookRepository> Router<R> {
    pub fn new(handler: BookHandler<R>) -> Self {
        Self { handler }
    }

    /// Handles one raw input line.
    pub fn handle_line(&mut self, line: &str) -> ApiResponse {
        match serde_json::from_str::<RequestLine>(line) {
            Ok(request) => self.handle(request),
            Err(err) => ApiResponse::fail(400, format!("invalid request line: {err}")),
        }
    }

    pub fn handle(&mut self, request: RequestLine) -> ApiResponse {
        let route = match resolve_route(&request.method, &request.path) {
            Ok(Some(route)) => route,
            Ok(None) => {
                debug!(
                    "event=route_miss module=cli status=fail method={}",
                    request.method
                );
                return ApiResponse::fail(404, "Not Found");
            }
            Err(message) => return ApiResponse::fail(400, message),
        };

        match route {
            Route::AddBook => match decode_payload(request.body) {
                Ok(payload) => self.handler.add_book(&payload),
                Err(response) => response,
            },
            Route::ListBooks(params) => self.handler.get_all_books(params),
            Route::GetBook(id) => self.handler.get_book_by_id(&id),
            Route::EditBook(id) => match decode_payload(request.body) {
                Ok(payload) => self.handler.edit_book_by_id(&id, &payload),
                Err(response) => response,
            },
            Route::DeleteBook(id) => self.handler.delete_book_by_id(&id),
        }
    }
}

fn decode_payload(body: Option<Value>) -> Result<NewBook, ApiResponse> {
    let body = body.ok_or_else(|| ApiResponse::fail(400, "request body is required"))?;
    serde_json::from_value(body)
        .map_err(|err| ApiResponse::fail(400, format!("invalid book payload: {err}")))
}
