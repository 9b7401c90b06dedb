use std::future::Future;
use std::rc::Rc;

use payloads::cache::QueryKey;
use yew::prelude::*;
use yewdux::prelude::*;

use super::FetchState;
use crate::State;
use crate::state::CachedResource;

/// What a data hook hands to its page.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    /// A request for this key is in flight (initial load or refresh).
    pub is_loading: bool,
    pub error: Option<String>,
    /// Fetch again right away, regardless of the cache state.
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Render the data once there is some, with the refresh state and the
    /// error of a failed refresh alongside. Before the first success a
    /// loading line or the error with a retry button is shown instead.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
            None => match &self.error {
                Some(error) if !self.is_loading => {
                    let retry = self.refetch.reform(|_: MouseEvent| ());
                    html! {
                        <div class="p-4 rounded-md bg-red-50 border \
                                    border-red-200 flex items-center \
                                    justify-between">
                            <p class="text-sm text-red-700">{error}</p>
                            <button
                                onclick={retry}
                                class="text-sm font-medium text-red-700 \
                                       underline hover:text-red-900"
                            >
                                {"Retry"}
                            </button>
                        </div>
                    }
                }
                _ => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600">
                            {format!("Loading {context}...")}
                        </p>
                    </div>
                },
            },
        }
    }
}

/// Read-through hook over one of the caches in [`State`].
///
/// Fetches when the key has no entry yet or was invalidated, and never
/// while a request for the same key is already in flight. `fetch_fn` must
/// request exactly what `key` describes. Failed fetches stay failed until
/// `refetch` is called. Keys are compared structurally, so two components
/// asking for the same data share one request.
#[hook]
pub fn use_cached_query<R, F, Fut>(
    key: QueryKey,
    fetch_fn: F,
) -> FetchHookReturn<R::Value>
where
    R: CachedResource,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<R::Value, String>> + 'static,
{
    let (state, dispatch) = use_store::<State>();

    let refetch = {
        let dispatch = dispatch.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(key.clone(), move |_: (), key| {
            let mut claimed = false;
            dispatch.reduce_mut(|state| {
                claimed = R::cache_mut(state).begin_fetch(key);
            });
            if !claimed {
                tracing::debug!(?key, "Request already in flight");
                return;
            }

            let dispatch = dispatch.clone();
            let key = key.clone();
            let request = fetch_fn();
            yew::platform::spawn_local(async move {
                let result = request.await;
                if let Err(e) = &result {
                    tracing::warn!(?key, "Fetch failed: {e}");
                }
                dispatch.reduce_mut(|state| {
                    R::cache_mut(state).complete(&key, result);
                });
            });
        })
    };

    let cache = R::cache(&state);
    let needs_fetch = cache.needs_fetch(&key);

    {
        let refetch = refetch.clone();
        use_effect_with((key.clone(), needs_fetch), move |(_, needs_fetch)| {
            if *needs_fetch {
                refetch.emit(());
            }
        });
    }

    let data = match cache.get(&key) {
        Some(value) => FetchState::Fetched(value.clone()),
        None => FetchState::NotFetched,
    };
    // Until the first request starts, a missing entry counts as loading
    let is_loading = cache.is_in_flight(&key) || needs_fetch;

    FetchHookReturn {
        data,
        is_loading,
        error: cache.error(&key).map(str::to_string),
        refetch,
    }
}

/// Forward the cache keys a mutation touched to every cache.
#[hook]
pub fn use_invalidate() -> Callback<Vec<payloads::cache::QueryKeyPrefix>> {
    let dispatch = use_dispatch::<State>();
    Callback::from(move |prefixes: Vec<payloads::cache::QueryKeyPrefix>| {
        dispatch.reduce_mut(|state| {
            let affected = state.invalidate(&prefixes);
            tracing::debug!(?prefixes, affected, "Invalidated cached reads");
        });
    })
}
