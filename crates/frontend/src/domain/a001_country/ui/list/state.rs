use crate::shared::config::PAGE_SIZE;
use contracts::domain::a001_country::{apply_filters, sort_by_name, Country, FilterDescriptor};
use contracts::shared::pagination::{clamp_page, paginate, PageWindow};
use leptos::prelude::*;

/// Жизненный цикл страницы: один переход из Loading, обратно не возвращаемся
#[derive(Clone, Debug, PartialEq)]
pub enum Lifecycle {
    Loading,
    Ready,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CountryListAction {
    FetchSucceeded(Vec<Country>),
    FetchFailed(String),
    ToggleSort,
    /// Идентификатор или ключ фильтра из каталога
    ToggleFilter(String),
    ResetFilters,
    GoToPage(usize),
    PreviousPage,
    NextPage,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountryListState {
    pub lifecycle: Lifecycle,

    // snapshot, set once after the fetch resolves
    pub original_list: Vec<Country>,
    // filtered + sorted view of original_list
    pub working_list: Vec<Country>,

    pub sort_ascending: bool,
    /// Ключи активных фильтров в порядке включения
    pub active_filters: Vec<String>,

    // pagination (1-based)
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for CountryListState {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::Loading,
            original_list: Vec::new(),
            working_list: Vec::new(),
            sort_ascending: true,
            active_filters: Vec::new(),
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

/// Данные для одного цикла отрисовки таблицы
#[derive(Clone, Debug, PartialEq)]
pub struct CountryPageView {
    pub rows: Vec<Country>,
    pub page: usize,
    pub page_count: usize,
    pub total_count: usize,
    pub active_filters: Vec<String>,
    pub sort_ascending: bool,
    pub sort_label: &'static str,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn sort_label(ascending: bool) -> &'static str {
    if ascending {
        "A-Z"
    } else {
        "Z-A"
    }
}

/// Рабочий список всегда строится заново: фильтр от исходного снимка, затем сортировка
pub fn derive_working_list(
    original_list: &[Country],
    active_filters: &[String],
    sort_ascending: bool,
) -> Vec<Country> {
    let filtered = apply_filters(original_list, active_filters);
    sort_by_name(&filtered, sort_ascending)
}

impl CountryListState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn error(&self) -> Option<&str> {
        match &self.lifecycle {
            Lifecycle::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_filter_active(&self, name: &str) -> bool {
        self.active_filters.iter().any(|f| f == name)
    }

    pub fn window(&self) -> PageWindow {
        paginate(self.working_list.len(), self.page_size, self.current_page)
    }

    pub fn page_view(&self) -> CountryPageView {
        let window = self.window();
        CountryPageView {
            rows: self.working_list[window.range()].to_vec(),
            page: window.page,
            page_count: window.page_count,
            total_count: self.working_list.len(),
            active_filters: self.active_filters.clone(),
            sort_ascending: self.sort_ascending,
            sort_label: sort_label(self.sort_ascending),
            has_previous: window.has_previous(),
            has_next: window.has_next(),
        }
    }

    fn rederive(mut self) -> Self {
        self.working_list =
            derive_working_list(&self.original_list, &self.active_filters, self.sort_ascending);
        self.current_page = 1;
        self
    }

    fn go_to_page(mut self, page: usize) -> Self {
        self.current_page = clamp_page(self.working_list.len(), self.page_size, page);
        self
    }
}

/// Переход состояния: `(state, action) -> state`.
///
/// В Loading и Error пользовательские действия игнорируются; результат
/// загрузки принимается только в Loading.
pub fn reduce(state: CountryListState, action: CountryListAction) -> CountryListState {
    use CountryListAction::*;

    match action {
        FetchSucceeded(countries) if state.is_loading() => CountryListState {
            lifecycle: Lifecycle::Ready,
            original_list: countries,
            sort_ascending: true,
            active_filters: Vec::new(),
            ..state
        }
        .rederive(),
        FetchFailed(message) if state.is_loading() => CountryListState {
            lifecycle: Lifecycle::Error(message),
            ..state
        },
        _ if !state.is_ready() => state,
        ToggleSort => CountryListState {
            sort_ascending: !state.sort_ascending,
            ..state
        }
        .rederive(),
        ToggleFilter(id) => {
            let Some(descriptor) =
                FilterDescriptor::by_id(&id).or_else(|| FilterDescriptor::by_name(&id))
            else {
                log::warn!("Ignoring unknown filter '{}'", id);
                return state;
            };

            let mut state = state;
            if let Some(pos) = state.active_filters.iter().position(|f| f == descriptor.name) {
                state.active_filters.remove(pos);
            } else {
                state.active_filters.push(descriptor.name.to_string());
            }
            state.rederive()
        }
        ResetFilters => CountryListState {
            sort_ascending: true,
            active_filters: Vec::new(),
            ..state
        }
        .rederive(),
        GoToPage(page) => state.go_to_page(page),
        PreviousPage => {
            let page = state.current_page.saturating_sub(1);
            state.go_to_page(page)
        }
        NextPage => {
            let page = state.current_page + 1;
            state.go_to_page(page)
        }
        // fetch results are accepted only once, while loading
        FetchSucceeded(_) | FetchFailed(_) => state,
    }
}

pub fn create_state() -> RwSignal<CountryListState> {
    RwSignal::new(CountryListState::default())
}

/// Применяет действие к сигналу состояния
pub fn dispatch(state: RwSignal<CountryListState>, action: CountryListAction) {
    state.update(|s| *s = reduce(std::mem::take(s), action));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oceania_sample() -> Vec<Country> {
        vec![
            Country::new("Palau", "Oceania", 459.0),
            Country::new("Fiji", "Oceania", 18272.0),
            Country::new("Germany", "Europe", 357022.0),
        ]
    }

    fn ready(countries: Vec<Country>) -> CountryListState {
        reduce(
            CountryListState::default(),
            CountryListAction::FetchSucceeded(countries),
        )
    }

    fn names(list: &[Country]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    fn numbered(count: usize) -> Vec<Country> {
        (0..count)
            .map(|i| Country::new(format!("Country {:03}", i), "Europe", i as f64))
            .collect()
    }

    #[test]
    fn test_fetch_success_snapshots_and_sorts() {
        let state = ready(oceania_sample());
        assert!(state.is_ready());
        assert_eq!(names(&state.original_list), vec!["Palau", "Fiji", "Germany"]);
        assert_eq!(names(&state.working_list), vec!["Fiji", "Germany", "Palau"]);
        assert!(state.sort_ascending);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_fetch_failure_enters_error_state() {
        let state = reduce(
            CountryListState::default(),
            CountryListAction::FetchFailed("HTTP 500".into()),
        );
        assert_eq!(state.error(), Some("HTTP 500"));
        assert!(!state.is_loading());

        // controls stay inert, late results are ignored
        let after = reduce(state.clone(), CountryListAction::ToggleSort);
        assert_eq!(after, state);
        let after = reduce(state.clone(), CountryListAction::FetchSucceeded(oceania_sample()));
        assert_eq!(after, state);
    }

    #[test]
    fn test_actions_are_ignored_while_loading() {
        let loading = CountryListState::default();
        for action in [
            CountryListAction::ToggleSort,
            CountryListAction::ToggleFilter("InOceania".into()),
            CountryListAction::ResetFilters,
            CountryListAction::GoToPage(3),
            CountryListAction::NextPage,
        ] {
            assert_eq!(reduce(loading.clone(), action), loading);
        }
    }

    #[test]
    fn test_oceania_filter_then_reset() {
        let state = ready(oceania_sample());

        let filtered = reduce(state.clone(), CountryListAction::ToggleFilter("InOceania".into()));
        assert_eq!(names(&filtered.working_list), vec!["Fiji", "Palau"]);
        assert!(filtered.is_filter_active("InOceania"));
        assert_eq!(filtered.current_page, 1);

        let reset = reduce(filtered, CountryListAction::ResetFilters);
        assert_eq!(names(&reset.working_list), vec!["Fiji", "Germany", "Palau"]);
        assert!(reset.active_filters.is_empty());
        assert!(reset.sort_ascending);
        assert_eq!(reset.current_page, 1);
        assert_eq!(reset, state);
    }

    #[test]
    fn test_toggle_filter_by_catalog_id_and_off_again() {
        let state = ready(oceania_sample());
        let on = reduce(
            state.clone(),
            CountryListAction::ToggleFilter("filter-smaller-than-lithuania".into()),
        );
        assert_eq!(on.active_filters, vec!["SmallerThanLithuania".to_string()]);
        assert_eq!(names(&on.working_list), vec!["Fiji", "Palau"]);

        let off = reduce(on, CountryListAction::ToggleFilter("SmallerThanLithuania".into()));
        assert!(off.active_filters.is_empty());
        assert_eq!(off.working_list, state.working_list);
    }

    #[test]
    fn test_unknown_filter_is_noop() {
        let state = reduce(ready(numbered(30)), CountryListAction::GoToPage(2));
        let after = reduce(state.clone(), CountryListAction::ToggleFilter("Landlocked".into()));
        assert_eq!(after, state);
    }

    #[test]
    fn test_filters_are_not_cumulative() {
        let state = ready(oceania_sample());
        let both = [
            CountryListAction::ToggleFilter("InOceania".into()),
            CountryListAction::ToggleFilter("SmallerThanLithuania".into()),
            CountryListAction::ToggleFilter("InOceania".into()),
        ]
        .into_iter()
        .fold(state, reduce);

        // only SmallerThanLithuania remains, recomputed from the full snapshot
        assert_eq!(both.active_filters, vec!["SmallerThanLithuania".to_string()]);
        assert_eq!(names(&both.working_list), vec!["Fiji", "Palau"]);
    }

    #[test]
    fn test_toggle_sort_keeps_filters_and_resets_page() {
        let state = reduce(ready(numbered(25)), CountryListAction::GoToPage(3));
        assert_eq!(state.current_page, 3);

        let desc = reduce(state, CountryListAction::ToggleSort);
        assert!(!desc.sort_ascending);
        assert_eq!(desc.current_page, 1);
        assert_eq!(desc.working_list[0].name, "Country 024");

        let filtered = reduce(desc, CountryListAction::ToggleFilter("InOceania".into()));
        assert!(filtered.working_list.is_empty());
        assert!(!filtered.sort_ascending);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let state = [
            CountryListAction::ToggleSort,
            CountryListAction::ToggleFilter("InOceania".into()),
            CountryListAction::GoToPage(2),
        ]
        .into_iter()
        .fold(ready(oceania_sample()), reduce);

        let once = reduce(state, CountryListAction::ResetFilters);
        let twice = reduce(once.clone(), CountryListAction::ResetFilters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let state = ready(numbered(25));
        assert_eq!(state.window().page_count, 3);

        let state = reduce(state, CountryListAction::GoToPage(7));
        assert_eq!(state.current_page, 3);
        let state = reduce(state, CountryListAction::NextPage);
        assert_eq!(state.current_page, 3);
        let state = reduce(state, CountryListAction::GoToPage(0));
        assert_eq!(state.current_page, 1);
        let state = reduce(state, CountryListAction::PreviousPage);
        assert_eq!(state.current_page, 1);
        let state = reduce(state, CountryListAction::NextPage);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_page_navigation_does_not_touch_working_list() {
        let state = ready(numbered(25));
        let moved = reduce(state.clone(), CountryListAction::GoToPage(2));
        assert_eq!(moved.working_list, state.working_list);
    }

    #[test]
    fn test_page_view() {
        let state = reduce(ready(numbered(25)), CountryListAction::GoToPage(3));
        let view = state.page_view();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].name, "Country 020");
        assert_eq!(view.page, 3);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.total_count, 25);
        assert_eq!(view.sort_label, "A-Z");
        assert!(view.has_previous);
        assert!(!view.has_next);

        let empty = ready(Vec::new()).page_view();
        assert!(empty.rows.is_empty());
        assert_eq!(empty.page_count, 1);
        assert!(!empty.has_previous && !empty.has_next);
    }

    #[test]
    fn test_custom_page_size() {
        let state = reduce(
            CountryListState::with_page_size(15),
            CountryListAction::FetchSucceeded(numbered(47)),
        );
        let state = reduce(state, CountryListAction::GoToPage(5));
        assert_eq!(state.current_page, 4);
        assert_eq!(state.window().range(), 45..47);
    }

    #[test]
    fn test_working_list_matches_derivation() {
        let state = [
            CountryListAction::ToggleFilter("SmallerThanLithuania".into()),
            CountryListAction::ToggleSort,
        ]
        .into_iter()
        .fold(ready(oceania_sample()), reduce);

        assert_eq!(
            state.working_list,
            derive_working_list(&state.original_list, &state.active_filters, state.sort_ascending)
        );
        assert_eq!(names(&state.working_list), vec!["Palau", "Fiji"]);
    }
}
