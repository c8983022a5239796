//! Cascading state → city selection.
//!
//! The selector is a pure state machine: transitions hand out request tokens
//! and responses are fed back through `apply_*` methods, so overlapping
//! completions can arrive in any order. Each token carries a generation
//! number; a response is committed only when its generation still matches the
//! current one, which makes "last request for the current target wins" a
//! plain comparison instead of a cancellation flag.

use tracing::debug;

use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::models::{City, State};
use crate::routing::Route;

/// Status of one asynchronous fetch, collapsed into a single tagged value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fetch<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Data arrived.
    Ready(T),
    /// Request failed; holds the user-facing message. There is no automatic
    /// retry: a new attempt only happens when the user re-triggers the same
    /// transition.
    Failed(String),
}

impl<T> Fetch<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Fetch::Failed(_))
    }

    #[must_use]
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Token for an in-flight state-list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatesRequest {
    generation: u64,
}

/// Token for an in-flight city-list request, tagged with the state it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityListRequest {
    generation: u64,
    state_slug: String,
}

impl CityListRequest {
    /// The state the request was issued for.
    #[must_use]
    pub fn state_slug(&self) -> &str {
        &self.state_slug
    }
}

/// State machine for the home view's state → city selection flow.
#[derive(Debug, Default)]
pub struct CascadingSelector {
    states: Fetch<Vec<State>>,
    cities: Fetch<Vec<City>>,
    selected_state: Option<State>,
    selected_city: Option<City>,
    states_generation: u64,
    cities_generation: u64,
}

impl CascadingSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load status of the state list.
    #[must_use]
    pub fn states(&self) -> &Fetch<Vec<State>> {
        &self.states
    }

    /// Load status of the city list for the selected state.
    #[must_use]
    pub fn cities(&self) -> &Fetch<Vec<City>> {
        &self.cities
    }

    #[must_use]
    pub fn selected_state(&self) -> Option<&State> {
        self.selected_state.as_ref()
    }

    #[must_use]
    pub fn selected_city(&self) -> Option<&City> {
        self.selected_city.as_ref()
    }

    /// The currently selectable cities; empty unless the latest city-list
    /// fetch for the selected state has completed.
    #[must_use]
    pub fn city_options(&self) -> &[City] {
        self.cities.as_ready().map_or(&[], Vec::as_slice)
    }

    /// Start loading the state list, superseding any earlier load.
    pub fn begin_states_load(&mut self) -> StatesRequest {
        self.states_generation += 1;
        self.states = Fetch::Loading;
        StatesRequest {
            generation: self.states_generation,
        }
    }

    /// Feed back a state-list response. Returns whether it was committed.
    pub fn apply_states(
        &mut self,
        request: &StatesRequest,
        result: Result<Vec<State>, CatalogError>,
    ) -> bool {
        if request.generation != self.states_generation {
            debug!("discarding superseded state-list response");
            return false;
        }
        self.states = match result {
            Ok(states) => Fetch::Ready(states),
            Err(err) => Fetch::Failed(err.user_message()),
        };
        true
    }

    /// Change (or clear) the selected state.
    ///
    /// A changed parent invalidates the child list: the selected city and
    /// city options are cleared here, synchronously, before any fetch
    /// resolves. Re-selecting the same state counts as a fresh transition,
    /// which is also the manual retry path after a failed city fetch.
    pub fn select_state(&mut self, state: Option<State>) -> Option<CityListRequest> {
        self.selected_city = None;
        self.cities_generation += 1; // supersedes any in-flight city-list request
        self.selected_state = state;

        match &self.selected_state {
            Some(state) => {
                self.cities = Fetch::Loading;
                Some(CityListRequest {
                    generation: self.cities_generation,
                    state_slug: state.slug.clone(),
                })
            }
            None => {
                self.cities = Fetch::Idle;
                None
            }
        }
    }

    /// Feed back a city-list response. A response is committed only if it is
    /// still the one for the currently selected state; a slow response for a
    /// previously selected state must never populate a later selection's
    /// options. Returns whether it was committed.
    pub fn apply_cities(
        &mut self,
        request: &CityListRequest,
        result: Result<Vec<City>, CatalogError>,
    ) -> bool {
        if request.generation != self.cities_generation {
            debug!(
                state = %request.state_slug,
                "discarding stale city-list response"
            );
            return false;
        }
        self.cities = match result {
            Ok(cities) => Fetch::Ready(cities),
            Err(err) => Fetch::Failed(err.user_message()),
        };
        true
    }

    /// Pick a city from the current options. A slug not among them clears
    /// the selection.
    pub fn select_city(&mut self, slug: &str) {
        self.selected_city = self
            .city_options()
            .iter()
            .find(|city| city.slug == slug)
            .cloned();
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected_city.is_some()
    }

    /// Hand the selected city off to routing. `None` until a city is picked.
    #[must_use]
    pub fn submit(&self) -> Option<Route> {
        self.selected_city
            .as_ref()
            .map(|city| Route::City(city.slug.clone()))
    }

    /// Issue the state-list fetch and feed the response straight back.
    pub async fn load_states(&mut self, client: &CatalogClient) {
        let request = self.begin_states_load();
        let result = client.list_states().await;
        self.apply_states(&request, result);
    }

    /// Change the selected state and, for a non-empty selection, fetch its
    /// city list.
    pub async fn change_state(&mut self, client: &CatalogClient, state: Option<State>) {
        if let Some(request) = self.select_state(state) {
            let result = client.list_cities(request.state_slug()).await;
            self.apply_cities(&request, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn state(slug: &str, name: &str) -> State {
        State {
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }

    fn city(slug: &str, name: &str, state_slug: &str) -> City {
        City {
            slug: slug.to_string(),
            name: name.to_string(),
            state_slug: state_slug.to_string(),
        }
    }

    #[test]
    fn test_states_load_success() {
        let mut selector = CascadingSelector::new();
        let request = selector.begin_states_load();
        assert!(selector.states().is_loading());

        let committed = selector.apply_states(&request, Ok(vec![state("mh", "Maharashtra")]));
        assert!(committed);
        assert_eq!(selector.states().as_ready().map(Vec::len), Some(1));
    }

    #[test]
    fn test_states_load_failure_is_terminal_for_session() {
        let mut selector = CascadingSelector::new();
        let request = selector.begin_states_load();
        selector.apply_states(&request, Err(CatalogError::network("boom")));

        assert!(selector.states().is_failed());
        assert!(selector.city_options().is_empty());
        // No automatic retry: status stays failed until a new load begins.
        assert!(selector.states().is_failed());
    }

    #[test]
    fn test_superseded_states_response_is_discarded() {
        let mut selector = CascadingSelector::new();
        let first = selector.begin_states_load();
        let second = selector.begin_states_load();

        assert!(!selector.apply_states(&first, Ok(vec![state("mh", "Maharashtra")])));
        assert!(selector.states().is_loading());
        assert!(selector.apply_states(&second, Ok(vec![state("dl", "Delhi")])));
    }

    #[test]
    fn test_selecting_state_clears_city_synchronously() {
        let mut selector = CascadingSelector::new();
        let request = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        selector.apply_cities(&request, Ok(vec![city("mumbai", "Mumbai", "mh")]));
        selector.select_city("mumbai");
        assert!(selector.can_submit());

        // Before the new fetch resolves, the old city must already be gone.
        let _pending = selector.select_state(Some(state("dl", "Delhi")));
        assert!(selector.selected_city().is_none());
        assert!(selector.city_options().is_empty());
        assert!(!selector.can_submit());
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_last_selection_wins_regardless_of_completion_order(#[case] stale_first: bool) {
        let mut selector = CascadingSelector::new();
        let first = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        let second = selector.select_state(Some(state("dl", "Delhi"))).unwrap();

        let stale = (&first, Ok(vec![city("mumbai", "Mumbai", "mh")]));
        let fresh = (&second, Ok(vec![city("delhi", "Delhi", "dl")]));
        let ordered = if stale_first {
            [stale, fresh]
        } else {
            [fresh, stale]
        };

        for (request, result) in ordered {
            selector.apply_cities(request, result);
        }

        let options = selector.city_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].slug, "delhi");
    }

    #[test]
    fn test_clearing_state_resets_cities_to_idle() {
        let mut selector = CascadingSelector::new();
        let request = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        selector.apply_cities(&request, Ok(vec![city("mumbai", "Mumbai", "mh")]));

        assert!(selector.select_state(None).is_none());
        assert_eq!(*selector.cities(), Fetch::Idle);
        assert!(selector.selected_state().is_none());

        // The in-flight request for the old state no longer applies.
        assert!(!selector.apply_cities(&request, Ok(vec![city("mumbai", "Mumbai", "mh")])));
    }

    #[test]
    fn test_city_fetch_failure_shows_disabled_selector_not_a_crash() {
        let mut selector = CascadingSelector::new();
        let request = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        selector.apply_cities(&request, Err(CatalogError::network("boom")));

        assert!(selector.cities().is_failed());
        assert!(selector.city_options().is_empty());
        assert!(!selector.can_submit());

        // Re-selecting the same state is the retry path.
        let retry = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        assert!(selector.cities().is_loading());
        assert!(selector.apply_cities(&retry, Ok(vec![city("mumbai", "Mumbai", "mh")])));
        assert_eq!(selector.city_options().len(), 1);
    }

    #[test]
    fn test_selecting_unknown_city_clears_selection() {
        let mut selector = CascadingSelector::new();
        let request = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        selector.apply_cities(&request, Ok(vec![city("mumbai", "Mumbai", "mh")]));

        selector.select_city("mumbai");
        assert!(selector.can_submit());
        selector.select_city("atlantis");
        assert!(!selector.can_submit());
    }

    #[test]
    fn test_submit_hands_city_slug_to_routing() {
        let mut selector = CascadingSelector::new();
        assert_eq!(selector.submit(), None);

        let request = selector.select_state(Some(state("mh", "Maharashtra"))).unwrap();
        assert_eq!(request.state_slug(), "mh");
        selector.apply_cities(&request, Ok(vec![city("mumbai", "Mumbai", "mh")]));
        selector.select_city("mumbai");

        let route = selector.submit().expect("city selected");
        assert_eq!(route, Route::City("mumbai".to_string()));
        assert_eq!(route.path(), "/city/mumbai");
    }
}
