//! Stand-in for the remote book catalog.
//!
//! Serves a fixed catalogue under the same routes and wire format as the real
//! service: `GET /books` (filtered, sorted, one page), `GET /books/{id}`, and
//! plain-text downloads under `/texts/{id}.txt`. Like the real service it
//! reports invalid filter values as a `detail` message in a 200 response.

mod fixtures;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub authors: Vec<Person>,
    pub translators: Vec<Person>,
    pub subjects: Vec<String>,
    pub bookshelves: Vec<String>,
    pub languages: Vec<String>,
    pub copyright: Option<bool>,
    pub media_type: String,
    pub formats: BTreeMap<String, String>,
    pub download_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookPage {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

/// Query parameters understood by `GET /books`.
#[derive(Debug, Default, Deserialize)]
pub struct BookFilters {
    pub copyright: Option<String>,
    pub ids: Option<String>,
    pub languages: Option<String>,
    pub search: Option<String>,
    pub mime_type: Option<String>,
    pub sort: Option<String>,
    pub topic: Option<String>,
}

pub struct Library {
    books: Vec<Book>,
}

pub type Db = Arc<Library>;

/// Router whose format URLs point at `base_url`.
pub fn app(base_url: &str) -> Router {
    let db: Db = Arc::new(Library {
        books: fixtures::books(base_url.trim_end_matches('/')),
    });
    Router::new()
        .route("/books", get(list_books))
        .route("/books/{id}", get(get_book))
        .route("/texts/{file}", get(get_text))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    info!(%addr, "mock catalog listening");
    axum::serve(listener, app(&format!("http://{addr}"))).await
}

fn rejected(detail: &str) -> Response {
    Json(Detail {
        detail: detail.to_string(),
    })
    .into_response()
}

async fn list_books(State(db): State<Db>, Query(filters): Query<BookFilters>) -> Response {
    debug!(?filters, "list books");
    match select(&db.books, &filters) {
        Ok(results) => Json(BookPage {
            count: results.len(),
            next: None,
            previous: None,
            results,
        })
        .into_response(),
        Err(detail) => rejected(detail),
    }
}

async fn get_book(State(db): State<Db>, Path(id): Path<u64>) -> Response {
    match db.books.iter().find(|book| book.id == id) {
        Some(book) => Json(book.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(Detail {
                detail: "Not found.".to_string(),
            }),
        )
            .into_response(),
    }
}

async fn get_text(Path(file): Path<String>) -> Result<&'static str, StatusCode> {
    file.strip_suffix(".txt")
        .and_then(|id| id.parse::<u64>().ok())
        .and_then(fixtures::text)
        .ok_or(StatusCode::NOT_FOUND)
}

fn split(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn earliest_birth(book: &Book) -> Option<i32> {
    book.authors.iter().filter_map(|a| a.birth_year).min()
}

/// Apply `filters` to `books`, or return the `detail` message for an invalid value.
pub fn select(books: &[Book], filters: &BookFilters) -> Result<Vec<Book>, &'static str> {
    let mut selected: Vec<Book> = books.to_vec();

    if let Some(ids) = &filters.ids {
        let ids = split(ids)
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| "Invalid ids.")?;
        selected.retain(|book| ids.contains(&book.id));
    }

    if let Some(copyright) = &filters.copyright {
        let wanted = split(copyright)
            .map(|value| match value {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                "null" => Ok(None),
                _ => Err("Invalid copyright."),
            })
            .collect::<Result<Vec<_>, _>>()?;
        selected.retain(|book| wanted.contains(&book.copyright));
    }

    if let Some(languages) = &filters.languages {
        let languages: Vec<String> = split(languages).map(str::to_lowercase).collect();
        selected.retain(|book| book.languages.iter().any(|l| languages.contains(l)));
    }

    if let Some(search) = &filters.search {
        let words: Vec<String> = search.split_whitespace().map(str::to_lowercase).collect();
        selected.retain(|book| {
            let haystack = std::iter::once(book.title.as_str())
                .chain(book.authors.iter().map(|a| a.name.as_str()))
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            words.iter().all(|word| haystack.contains(word.as_str()))
        });
    }

    if let Some(mime_type) = &filters.mime_type {
        selected.retain(|book| book.formats.keys().any(|key| key.starts_with(mime_type.as_str())));
    }

    if let Some(topic) = &filters.topic {
        let topic = topic.to_lowercase();
        selected.retain(|book| {
            book.subjects
                .iter()
                .chain(&book.bookshelves)
                .any(|tag| tag.to_lowercase().contains(&topic))
        });
    }

    match filters.sort.as_deref() {
        None | Some("popular") => selected.sort_by(|a, b| b.download_count.cmp(&a.download_count)),
        Some("ascending") => selected.sort_by_key(|book| book.id),
        Some("descending") => selected.sort_by(|a, b| b.id.cmp(&a.id)),
        Some("oldest") => selected.sort_by_key(|book| earliest_birth(book).unwrap_or(i32::MAX)),
        Some("latest") => selected.sort_by_key(|book| std::cmp::Reverse(earliest_birth(book).unwrap_or(i32::MIN))),
        Some(_) => return Err("Invalid sort."),
    }

    Ok(selected)
}
