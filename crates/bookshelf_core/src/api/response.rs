//! Response envelope types.

use crate::model::book::{Book, BookId, BookSummary};
use serde::Serialize;

/// Envelope status marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    /// Caller-side failure (bad payload, unknown id).
    Fail,
    /// Server-side failure.
    Error,
}

/// Payload carried under `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Created {
        #[serde(rename = "bookId")]
        book_id: BookId,
    },
    Books {
        books: Vec<BookSummary>,
    },
    Book {
        book: Book,
    },
}

/// Serialized response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// Status code plus body, ready for any transport to write out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub code: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn success(code: u16, message: Option<&str>, data: Option<ResponseData>) -> Self {
        Self {
            code,
            body: ResponseBody {
                status: ResponseStatus::Success,
                message: message.map(str::to_string),
                data,
            },
        }
    }

    pub fn fail(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            body: ResponseBody {
                status: ResponseStatus::Fail,
                message: Some(message.into()),
                data: None,
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: 500,
            body: ResponseBody {
                status: ResponseStatus::Error,
                message: Some(message.into()),
                data: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.body.status == ResponseStatus::Success
    }
}
