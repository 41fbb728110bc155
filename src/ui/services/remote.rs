// src/ui/services/remote.rs - Loading, polling and staleness guard for view data

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::api::{ApiError, ApiResult, RequestSequence};
use crate::utils::Time;

/// Backend data owned by one view
pub struct Remote<T: 'static> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<ApiError>>,
    pub loading: Signal<bool>,
    reload: Callback<()>,
}

impl<T: 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Remote<T> {}

impl<T: 'static> PartialEq for Remote<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.error == other.error && self.loading == other.loading
    }
}

impl<T: Clone + 'static> Remote<T> {
    /// Starts a new load; any load still in flight becomes stale
    pub fn reload(&self) {
        self.reload.call(());
    }

    pub fn value(&self) -> Option<T> {
        self.data.read().clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.read().as_ref().map(ApiError::message)
    }

    /// Loading with nothing to show yet. Background refreshes keep the old
    /// rows on screen instead of flashing skeletons.
    pub fn is_initial_load(&self) -> bool {
        *self.loading.read() && self.data.read().is_none()
    }
}

/// Loads `fetch` on mount, again whenever a signal read inside `fetch`
/// changes, on `reload()`, and every `poll_every` when given.
///
/// Only the most recently started load may write its result: a slow
/// response that lands after a newer one is dropped.
pub fn use_remote<T, F, Fut>(poll_every: Option<Duration>, fetch: F) -> Remote<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let data = use_signal(|| None::<T>);
    let error = use_signal(|| None::<ApiError>);
    let loading = use_signal(|| true);
    let sequence = use_hook(RequestSequence::new);
    let fetch = use_hook(|| Rc::new(fetch));

    {
        let fetch = fetch.clone();
        let sequence = sequence.clone();
        use_effect(move || start(fetch(), &sequence, data, error, loading));
    }

    let reload = {
        let sequence = sequence.clone();
        use_callback(move |_: ()| start(fetch(), &sequence, data, error, loading))
    };

    use_future(move || async move {
        let Some(period) = poll_every else {
            return;
        };
        loop {
            Time::sleep(period).await;
            reload.call(());
        }
    });

    // Late responses from an unmounted view have nowhere to go
    use_drop(move || sequence.invalidate());

    Remote {
        data,
        error,
        loading,
        reload,
    }
}

fn start<T: 'static>(
    request: impl Future<Output = ApiResult<T>> + 'static,
    sequence: &RequestSequence,
    mut data: Signal<Option<T>>,
    mut error: Signal<Option<ApiError>>,
    mut loading: Signal<bool>,
) {
    let ticket = sequence.next();
    let sequence = sequence.clone();
    loading.set(true);

    spawn(async move {
        let result = request.await;
        if !sequence.is_current(ticket) {
            tracing::debug!(?ticket, "Dropping stale response");
            return;
        }

        match result {
            Ok(value) => {
                data.set(Some(value));
                error.set(None);
            }
            Err(e) => {
                tracing::warn!(status = e.status(), code = %e.code(), "Failed to load view data: {}", e);
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}
