//! Browse session: explicit process-local state (committed query, filters,
//! results, scroll position) plus the debounce applied to free-text input.
//!
//! Free-text input commits only after the debounce delay elapses without
//! another keystroke; a new keystroke aborts and restarts the pending
//! timer, so at most one deferred application is in flight. Facet changes
//! are not debounced and apply against the last committed query.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::catalog::models::Recipe;
use crate::error::Result;
use crate::indexer::RecipeIndex;
use crate::query::filters::SearchFilters;
use crate::query::pipeline::search_and_filter;
use crate::store::{KeyValueStore, BROWSE_STATE_KEY};

/// Transient UI state persisted between sessions to restore browsing
/// position. Not durable data; losing it is harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseState {
    pub query: String,
    pub filters: SearchFilters,
    pub scroll_offset: u32,
}

impl BrowseState {
    /// Best-effort restore. A missing key, an unavailable store, or a
    /// malformed payload all yield `None`.
    pub fn load<S: KeyValueStore>(store: &S) -> Option<Self> {
        let payload = match store.get(BROWSE_STATE_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!("browse state read failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("browse state is malformed, ignoring: {e}");
                None
            }
        }
    }

    /// Best-effort persist; a failure degrades to "position not
    /// remembered".
    pub fn persist<S: KeyValueStore>(&self, store: &S) {
        let payload = match serde_json::to_string(self) {
            Ok(payload) => payload,
            Err(_) => return,
        };
        if let Err(e) = store.set(BROWSE_STATE_KEY, &payload) {
            warn!("browse state write failed: {e}");
        }
    }
}

struct Session {
    query: String,
    filters: SearchFilters,
    results: Vec<Recipe>,
    scroll_offset: u32,
}

struct Inner {
    index: Arc<RecipeIndex>,
    session: Mutex<Session>,
    pending: Mutex<Option<JoinHandle<()>>>,
    debounce: Duration,
    generation: watch::Sender<u64>,
}

/// Debounced browse session over a built index. Cheap to clone; clones
/// share the session.
#[derive(Clone)]
pub struct Explorer {
    inner: Arc<Inner>,
}

impl Explorer {
    pub fn new(index: Arc<RecipeIndex>, debounce: Duration) -> Result<Self> {
        let results = search_and_filter(&index, "", &SearchFilters::empty())?;
        let (generation, _) = watch::channel(0);
        Ok(Self {
            inner: Arc::new(Inner {
                index,
                session: Mutex::new(Session {
                    query: String::new(),
                    filters: SearchFilters::empty(),
                    results,
                    scroll_offset: 0,
                }),
                pending: Mutex::new(None),
                debounce,
                generation,
            }),
        })
    }

    /// Debounced free-text input. The pipeline reruns only after the delay
    /// elapses without another call; each call aborts the previous pending
    /// timer.
    pub fn set_query(&self, text: &str) {
        let mut pending = self.inner.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            inner.session.lock().query = text;
            inner.refresh();
        }));
    }

    /// Facet changes apply immediately against the last committed query.
    pub fn set_filters(&self, filters: SearchFilters) {
        self.inner.session.lock().filters = filters;
        self.inner.refresh();
    }

    pub fn set_scroll(&self, offset: u32) {
        self.inner.session.lock().scroll_offset = offset;
    }

    /// Adopt a previously saved state and rerun the pipeline immediately.
    pub fn restore(&self, state: BrowseState) {
        {
            let mut session = self.inner.session.lock();
            session.query = state.query;
            session.filters = state.filters;
            session.scroll_offset = state.scroll_offset;
        }
        self.inner.refresh();
    }

    pub fn snapshot(&self) -> BrowseState {
        let session = self.inner.session.lock();
        BrowseState {
            query: session.query.clone(),
            filters: session.filters.clone(),
            scroll_offset: session.scroll_offset,
        }
    }

    pub fn results(&self) -> Vec<Recipe> {
        self.inner.session.lock().results.clone()
    }

    pub fn filters(&self) -> SearchFilters {
        self.inner.session.lock().filters.clone()
    }

    /// Bumps once per completed pipeline run.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.generation.subscribe()
    }
}

impl Inner {
    /// Rerun the pipeline with the committed query and current filters. A
    /// search failure keeps the previous results in place.
    fn refresh(&self) {
        let (query, filters) = {
            let session = self.session.lock();
            (session.query.clone(), session.filters.clone())
        };
        match search_and_filter(&self.index, &query, &filters) {
            Ok(results) => {
                self.session.lock().results = results;
                self.generation.send_modify(|g| *g += 1);
            }
            Err(e) => warn!("search pipeline failed, keeping previous results: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Recipe;
    use crate::store::MemoryStore;

    fn recipe(id: &str, name: &str, spirit: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            base_spirit: spirit.to_string(),
            ..Default::default()
        }
    }

    fn build_explorer(debounce_ms: u64) -> Explorer {
        let index = Arc::new(
            RecipeIndex::build(vec![
                recipe("negroni", "Negroni", "Gin"),
                recipe("margarita", "Margarita", "Tequila"),
                recipe("daiquiri", "Daiquiri", "White Rum"),
            ])
            .unwrap(),
        );
        Explorer::new(index, Duration::from_millis(debounce_ms)).unwrap()
    }

    #[tokio::test]
    async fn test_initial_results_are_the_full_set() {
        let explorer = build_explorer(10);
        assert_eq!(explorer.results().len(), 3);
    }

    #[tokio::test]
    async fn test_query_commits_after_the_debounce_delay() {
        let explorer = build_explorer(20);
        explorer.set_query("negroni");

        // Before the delay the full set is still showing.
        assert_eq!(explorer.results().len(), 3);

        tokio::time::sleep(Duration::from_millis(80)).await;
        let results = explorer.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "negroni");
        assert_eq!(explorer.snapshot().query, "negroni");
    }

    #[tokio::test]
    async fn test_rapid_keystrokes_apply_only_the_last() {
        let explorer = build_explorer(30);
        let mut changes = explorer.subscribe();

        explorer.set_query("neg");
        explorer.set_query("negr");
        explorer.set_query("margarita");

        tokio::time::sleep(Duration::from_millis(120)).await;
        let results = explorer.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "margarita");

        // Exactly one pipeline run happened for the burst.
        changes.changed().await.unwrap();
        assert_eq!(*changes.borrow_and_update(), 1);
    }

    #[tokio::test]
    async fn test_filters_apply_immediately() {
        let explorer = build_explorer(10_000);
        explorer.set_filters(SearchFilters {
            spirits: vec!["Tequila".to_string()],
            ..Default::default()
        });

        let results = explorer.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "margarita");
    }

    #[tokio::test]
    async fn test_filters_use_last_committed_query() {
        let explorer = build_explorer(10);
        explorer.set_query("daiquiri");
        tokio::time::sleep(Duration::from_millis(60)).await;

        // A facet change while no keystroke is pending reruns against the
        // committed query, not an empty one.
        explorer.set_filters(SearchFilters {
            spirits: vec!["Gin".to_string()],
            ..Default::default()
        });
        assert!(explorer.results().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_roundtrips_through_the_store() {
        let explorer = build_explorer(10);
        explorer.set_filters(SearchFilters {
            spirits: vec!["Gin".to_string()],
            sort_by: "name-asc".to_string(),
            ..Default::default()
        });
        explorer.set_scroll(42);

        let store = MemoryStore::new();
        explorer.snapshot().persist(&store);

        let restored = BrowseState::load(&store).unwrap();
        assert_eq!(restored.scroll_offset, 42);
        assert_eq!(restored.filters.spirits, vec!["Gin"]);

        let fresh = build_explorer(10);
        fresh.restore(restored);
        let results = fresh.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "negroni");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_state_loads_as_none() {
        let store = MemoryStore::new();
        assert!(BrowseState::load(&store).is_none());

        store.set(BROWSE_STATE_KEY, "{broken").unwrap();
        assert!(BrowseState::load(&store).is_none());
    }
}
