// crates/nomad-core/src/query/navigator.rs

//! Binding between the codec and whatever owns the current URL.

use tracing::debug;

use super::codec::{self, FilterUpdate};
use super::QueryString;
use crate::filter::FilterParams;

/// Options passed along with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Whether the view should scroll back to the top.
    pub scroll: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self { scroll: true }
    }
}

/// Owner of the current query string (a browser router, a test double).
pub trait Navigator {
    /// The query string as it is right now.
    fn query(&self) -> QueryString;

    /// Replaces the current query string.
    fn navigate(&mut self, query: QueryString, options: NavigateOptions);
}

/// In-memory navigator that records every navigation.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    current: QueryString,
    history: Vec<(QueryString, NavigateOptions)>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            current: QueryString::parse(query),
            history: Vec::new(),
        }
    }

    /// Changes the URL behind the controller's back, like another component would.
    pub fn set_external(&mut self, query: &str) {
        self.current = QueryString::parse(query);
    }

    pub fn history(&self) -> &[(QueryString, NavigateOptions)] {
        &self.history
    }
}

impl Navigator for MemoryNavigator {
    fn query(&self) -> QueryString {
        self.current.clone()
    }

    fn navigate(&mut self, query: QueryString, options: NavigateOptions) {
        self.history.push((query.clone(), options));
        self.current = query;
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn query(&self) -> QueryString {
        (**self).query()
    }

    fn navigate(&mut self, query: QueryString, options: NavigateOptions) {
        (**self).navigate(query, options)
    }
}

/// Filter state backed by the URL.
///
/// Holds no copy of the params: every read decodes the navigator's current
/// query, and every write re-reads it right before composing the new one so
/// unrelated keys changed elsewhere are preserved.
#[derive(Debug)]
pub struct FilterState<N: Navigator> {
    navigator: N,
}

const FILTER_NAVIGATION: NavigateOptions = NavigateOptions { scroll: false };

impl<N: Navigator> FilterState<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Current params decoded from the URL.
    pub fn filters(&self) -> FilterParams {
        codec::decode(&self.navigator.query())
    }

    /// Applies a partial update and navigates without scrolling.
    ///
    /// Returns the params now in effect.
    pub fn update_filters(&mut self, update: &FilterUpdate) -> FilterParams {
        let current = self.navigator.query();
        let next = codec::apply_update(&current, update);
        debug!(from = %current, to = %next, "Updating filter query");
        self.navigator.navigate(next, FILTER_NAVIGATION);
        self.filters()
    }

    /// Drops every filter key and navigates without scrolling.
    pub fn reset_filters(&mut self) -> FilterParams {
        let next = codec::reset(&self.navigator.query());
        debug!(to = %next, "Resetting filter query");
        self.navigator.navigate(next, FILTER_NAVIGATION);
        self.filters()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}
