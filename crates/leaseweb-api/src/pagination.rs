//! Offset pagination shared by every Leaseweb list endpoint.
//!
//! List responses look like `{ "<items>": [...], "_metadata": { "limit",
//! "offset", "totalCount" } }`. The item key differs per endpoint, so list
//! responses implement [`Page`] instead of sharing one generic wrapper.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The `_metadata` object attached to every list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub limit: i32,
    pub offset: i32,
    pub total_count: i32,
}

/// A single page of a list endpoint.
pub trait Page {
    type Item;

    fn metadata(&self) -> Metadata;
    fn into_items(self) -> Vec<Self::Item>;
}

/// Offset of the page after `offset`, or `None` once `total_count` is reached.
///
/// A non-positive `limit` never advances.
pub fn next_offset(limit: i32, offset: i32, total_count: i32) -> Option<i32> {
    if limit <= 0 {
        return None;
    }
    let next = offset.checked_add(limit)?;
    (next < total_count).then_some(next)
}

/// Walk every page, starting without an offset, and concatenate the items in
/// page order.
///
/// `fetch` receives `None` for the first page and `Some(offset)` after that.
/// The first failing fetch aborts the walk; items gathered so far are dropped.
pub async fn collect_all<P, F, Fut>(mut fetch: F) -> Result<Vec<P::Item>, Error>
where
    P: Page,
    F: FnMut(Option<i32>) -> Fut,
    Fut: Future<Output = Result<P, Error>>,
{
    let mut all = Vec::new();
    let mut offset = None;

    loop {
        let page = fetch(offset).await?;
        let meta = page.metadata();
        all.extend(page.into_items());

        match next_offset(meta.limit, meta.offset, meta.total_count) {
            Some(next) => offset = Some(next),
            None => break,
        }
    }

    Ok(all)
}

/// Query parameters for a paged request.
pub(crate) fn page_params(limit: Option<i32>, offset: Option<i32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(2);
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset", offset.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::ErrorBody;

    struct NumberPage {
        meta: Metadata,
        items: Vec<u32>,
    }

    impl Page for NumberPage {
        type Item = u32;

        fn metadata(&self) -> Metadata {
            self.meta
        }

        fn into_items(self) -> Vec<u32> {
            self.items
        }
    }

    fn page(limit: i32, offset: i32, total_count: i32, items: Vec<u32>) -> NumberPage {
        NumberPage {
            meta: Metadata {
                limit,
                offset,
                total_count,
            },
            items,
        }
    }

    #[test]
    fn next_offset_advances_until_total() {
        assert_eq!(next_offset(1, 0, 2), Some(1));
        assert_eq!(next_offset(1, 1, 2), None);
        assert_eq!(next_offset(10, 0, 10), None);
        assert_eq!(next_offset(10, 10, 35), Some(20));
    }

    #[test]
    fn next_offset_stops_on_non_positive_limit() {
        assert_eq!(next_offset(0, 0, 100), None);
        assert_eq!(next_offset(-5, 0, 100), None);
    }

    #[test]
    fn next_offset_stops_on_overflow() {
        assert_eq!(next_offset(10, i32::MAX - 1, i32::MAX), None);
    }

    #[test]
    fn collect_all_walks_two_pages_in_order() {
        let calls = RefCell::new(Vec::new());

        let items = tokio_test::block_on(collect_all(|offset| {
            calls.borrow_mut().push(offset);
            let result = match offset {
                None => Ok(page(1, 0, 2, vec![10])),
                Some(1) => Ok(page(1, 1, 2, vec![20])),
                Some(other) => panic!("unexpected offset {other}"),
            };
            async move { result }
        }));

        assert_eq!(items.ok(), Some(vec![10, 20]));
        assert_eq!(*calls.borrow(), vec![None, Some(1)]);
    }

    #[test]
    fn collect_all_single_page() {
        let items = tokio_test::block_on(collect_all(|_| async {
            Ok(page(50, 0, 3, vec![1, 2, 3]))
        }));
        assert_eq!(items.ok(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn collect_all_discards_items_on_error() {
        let result = tokio_test::block_on(collect_all(|offset| async move {
            match offset {
                None => Ok(page(2, 0, 6, vec![1, 2])),
                _ => Err(Error::Api(ErrorBody {
                    status: 500,
                    body: "boom".into(),
                })),
            }
        }));

        assert!(matches!(result, Err(Error::Api(ref body)) if body.status == 500));
    }

    #[test]
    fn page_params_skip_missing_values() {
        assert!(page_params(None, None).is_empty());
        assert_eq!(
            page_params(Some(10), Some(20)),
            vec![("limit", "10".to_string()), ("offset", "20".to_string())]
        );
    }
}
