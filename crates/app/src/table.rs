use std::rc::Rc;

use api_client::ApiError;
use dioxus::prelude::*;
use shared_types::Page;
use shared_ui::{use_toast, ToastOptions};

/// View state for one paginated listing: the current page, the committed
/// (already debounced) search term, the last good page of rows, and whether
/// a fetch is in flight.
pub struct PagedState<T: 'static> {
    pub page: Signal<i64>,
    pub search: Signal<String>,
    pub data: Signal<Option<Page<T>>>,
    pub loading: Signal<bool>,
    reload: Signal<u64>,
}

impl<T> Clone for PagedState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagedState<T> {}

impl<T> PagedState<T> {
    /// Commit a debounced search term and reset to the first page; the
    /// effect refetches.
    pub fn commit_search(&mut self, term: String) {
        self.search.set(term);
        self.page.set(1);
    }

    /// Refetch the current (page, search) — used after a mutation succeeds.
    pub fn refresh(&mut self) {
        let next = *self.reload.peek() + 1;
        self.reload.set(next);
    }
}

/// Drive a listing from a `fetch(page, search) -> Page` function.
///
/// The fetch re-runs whenever `page` or `search` changes (or `refresh` is
/// called). On failure the error is logged and surfaced as a toast while
/// `data` keeps its last good value. Responses carry a sequence token so a
/// slow, superseded request cannot overwrite a newer one.
pub fn use_paged_fetch<T, F, Fut>(fetch: F) -> PagedState<T>
where
    T: 'static,
    F: Fn(i64, String) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let page = use_signal(|| 1i64);
    let search = use_signal(String::new);
    let mut data = use_signal(|| None);
    let mut loading = use_signal(|| false);
    let reload = use_signal(|| 0u64);
    let mut seq = use_signal(|| 0u64);
    let toast = use_toast();

    let fetch = use_hook(|| Rc::new(fetch));

    use_effect(move || {
        let p = *page.read();
        let q = search.read().clone();
        let _generation = *reload.read();
        let token = {
            let mut s = seq.write();
            *s += 1;
            *s
        };
        let fetch = Rc::clone(&fetch);
        loading.set(true);
        spawn(async move {
            let result = (*fetch)(p, q).await;
            if *seq.peek() != token {
                // A newer request took over while this one was in flight.
                return;
            }
            match result {
                Ok(pg) => data.set(Some(pg)),
                Err(err) => {
                    tracing::warn!(%err, page = p, "list fetch failed");
                    toast.error(err.user_message(), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    });

    PagedState {
        page,
        search,
        data,
        loading,
        reload,
    }
}
