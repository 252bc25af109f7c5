//! Cursor handling for search-style endpoints.
//!
//! A page carries an optional opaque `next` cursor, either a bare path
//! or an absolute URL. Consuming a query means yielding each page's
//! `data` and reissuing the request against the cursor until it is
//! absent. Each page depends on the previous one, so a single query is
//! sequential; independent queries can run concurrently. A server that
//! keeps returning the same cursor would make the sequence infinite —
//! that is a known open risk, not something handled here.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};

use crate::error::Result;
use crate::model::SearchResults;

/// Reduce a cursor to path-and-query relative to the configured base,
/// whatever form the server chose to return it in.
pub fn cursor_path(next: &str, base_url: &str) -> String {
    let path_and_query = if next.starts_with("http://") || next.starts_with("https://") {
        match reqwest::Url::parse(next) {
            Ok(url) => match url.query() {
                Some(q) => format!("{}?{}", url.path(), q),
                None => url.path().to_string(),
            },
            Err(_) => next.to_string(),
        }
    } else {
        next.to_string()
    };

    // The cursor usually repeats the base's own path ("/api/v3/...");
    // strip it so the transport does not double it when re-joining.
    if let Ok(base) = reqwest::Url::parse(base_url) {
        let base_path = base.path().trim_end_matches('/');
        if !base_path.is_empty() {
            if let Some(rest) = path_and_query.strip_prefix(base_path) {
                return rest.to_string();
            }
        }
    }
    path_and_query
}

/// Drain every page eagerly, concatenating `data` in order.
pub async fn collect_pages<T, F, Fut>(
    first: SearchResults<T>,
    base_url: &str,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<SearchResults<T>>>,
{
    let mut items = first.data;
    let mut next = first.next;
    while let Some(cursor) = next {
        let page = fetch(cursor_path(&cursor, base_url)).await?;
        items.extend(page.data);
        next = page.next;
    }
    Ok(items)
}

enum PageState<T> {
    Page(SearchResults<T>),
    Cursor(String),
    Done,
}

/// Lazy, forward-only view of the same sequence: pages are fetched as
/// the stream is polled past them.
pub fn page_stream<T, F, Fut>(
    first: SearchResults<T>,
    base_url: String,
    fetch: F,
) -> impl Stream<Item = Result<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<SearchResults<T>>>,
{
    stream::try_unfold(
        (PageState::Page(first), fetch, base_url),
        |(state, mut fetch, base)| async move {
            let page = match state {
                PageState::Page(page) => page,
                PageState::Cursor(cursor) => fetch(cursor_path(&cursor, &base)).await?,
                PageState::Done => return Ok::<_, crate::error::Error>(None),
            };
            let next = match page.next {
                Some(cursor) => PageState::Cursor(cursor),
                None => PageState::Done,
            };
            Ok(Some((page.data, (next, fetch, base))))
        },
    )
    .map_ok(|data| stream::iter(data.into_iter().map(Ok)))
    .try_flatten()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::model::{SearchResults, SearchStoryResult, Story};

    const BASE: &str = "https://api.app.shortcut.com/api/v3";

    fn story(id: i64, name: &str) -> Story {
        crate::codec::decode(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    fn page(ids: &[i64], next: Option<&str>) -> SearchStoryResult {
        SearchResults {
            total: Some(ids.len() as i64),
            data: ids.iter().map(|id| story(*id, &format!("s{id}"))).collect(),
            next: next.map(str::to_string),
        }
    }

    #[test]
    fn cursor_path_passes_plain_paths_through() {
        assert_eq!(
            cursor_path("/search/stories?token=abc", BASE),
            "/search/stories?token=abc"
        );
    }

    #[test]
    fn cursor_path_strips_base_path_prefix() {
        assert_eq!(
            cursor_path("/api/v3/search/stories?token=abc", BASE),
            "/search/stories?token=abc"
        );
    }

    #[test]
    fn cursor_path_reduces_absolute_urls() {
        assert_eq!(
            cursor_path(
                "https://api.app.shortcut.com/api/v3/search/stories?token=abc",
                BASE
            ),
            "/search/stories?token=abc"
        );
    }

    #[tokio::test]
    async fn pagination_terminates_after_last_cursorless_page() {
        let remaining = Mutex::new(vec![
            page(&[3, 4], Some("/api/v3/search/stories?p=3")),
            page(&[5], None),
        ]);
        let first = page(&[1, 2], Some("/api/v3/search/stories?p=2"));

        let stories = collect_pages(first, BASE, |path| {
            assert!(path.starts_with("/search/stories"));
            let next = remaining.lock().unwrap().remove(0);
            async move { Ok(next) }
        })
        .await
        .unwrap();

        let ids: Vec<_> = stories.iter().map(|s| s.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(remaining.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stream_yields_same_sequence_lazily() {
        let remaining = Mutex::new(vec![page(&[3], None)]);
        let first = page(&[1, 2], Some("/search/stories?p=2"));

        let stories: Vec<Story> = page_stream(first, BASE.to_string(), |_path| {
            let next = remaining.lock().unwrap().remove(0);
            async move { Ok(next) }
        })
        .try_collect()
        .await
        .unwrap();

        let ids: Vec<_> = stories.iter().map(|s| s.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fetch_errors_propagate_mid_stream() {
        let first = page(&[1], Some("/search/stories?p=2"));
        let result = collect_pages(first, BASE, |_path| async {
            Err(crate::error::Error::Api {
                status: 500,
                message: "boom".to_string(),
                body: None,
            })
        })
        .await;
        assert!(result.is_err());
    }
}
