pub mod state;

use self::state::{create_state, dispatch, CountryListAction};
use crate::domain::a001_country::api::fetch_countries;
use crate::shared::components::filter_checkbox::FilterCheckbox;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::number_format::format_area;
use contracts::domain::a001_country::FILTER_CATALOG;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CountryList() -> impl IntoView {
    let state = create_state();
    let (is_filter_expanded, set_is_filter_expanded) = signal(true);

    // единственная загрузка за время жизни страницы
    spawn_local(async move {
        match fetch_countries().await {
            Ok(countries) => dispatch(state, CountryListAction::FetchSucceeded(countries)),
            Err(e) => dispatch(state, CountryListAction::FetchFailed(e.to_string())),
        }
    });

    let page_view = Memo::new(move |_| state.with(|s| s.page_view()));
    let is_ready = Signal::derive(move || state.with(|s| s.is_ready()));

    let toggle_sort = move || dispatch(state, CountryListAction::ToggleSort);
    let reset_filters = move || dispatch(state, CountryListAction::ResetFilters);
    let go_to_page = move |page: usize| dispatch(state, CountryListAction::GoToPage(page));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("globe")}
                    <h1 class="page__title">"Countries"</h1>
                    <Badge>
                        {move || page_view.with(|v| v.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| toggle_sort()
                        disabled=Signal::derive(move || !is_ready.get())
                    >
                        {icon("sort")}
                        {move || format!(" Sort {}", page_view.with(|v| v.sort_label))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reset_filters()
                        disabled=Signal::derive(move || !is_ready.get())
                    >
                        {icon("reset")}
                        " Reset"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.error().map(str::to_string)).map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert")}
                        <span>{format!("Failed to load countries: {}", e)}</span>
                    </div>
                })}

                <Show when=move || state.with(|s| s.is_loading())>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                </Show>

                <Show when=move || is_ready.get()>
                    <div class="filter-panel">
                        <div class="filter-panel-header">
                            <div
                                class="filter-panel-header__left"
                                on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                            >
                                <span class=move || {
                                    if is_filter_expanded.get() {
                                        "filter-panel__chevron filter-panel__chevron--expanded"
                                    } else {
                                        "filter-panel__chevron"
                                    }
                                }>
                                    {icon("chevron-down")}
                                </span>
                                {icon("filter")}
                                <span class="filter-panel__title">"Filters"</span>
                                {move || {
                                    let count = page_view.with(|v| v.active_filters.len());
                                    if count > 0 {
                                        view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                    } else {
                                        view! { <></> }.into_any()
                                    }
                                }}
                            </div>

                            <div class="filter-panel-header__center">
                                <PaginationControls
                                    current_page=Signal::derive(move || page_view.with(|v| v.page))
                                    page_count=Signal::derive(move || page_view.with(|v| v.page_count))
                                    total_count=Signal::derive(move || page_view.with(|v| v.total_count))
                                    on_page_change=Callback::new(go_to_page)
                                    on_previous=Callback::new(move |_| dispatch(state, CountryListAction::PreviousPage))
                                    on_next=Callback::new(move |_| dispatch(state, CountryListAction::NextPage))
                                />
                            </div>
                        </div>

                        <Show when=move || is_filter_expanded.get()>
                            <div class="filter-panel-content">
                                <Flex gap=FlexGap::Large align=FlexAlign::Center>
                                    {FILTER_CATALOG.iter().map(|descriptor| {
                                        let name = descriptor.name;
                                        view! {
                                            <FilterCheckbox
                                                id=descriptor.id
                                                label=descriptor.display_name
                                                checked=Signal::derive(move || state.with(|s| s.is_filter_active(name)))
                                                on_toggle=Callback::new(move |_| {
                                                    dispatch(state, CountryListAction::ToggleFilter(name.to_string()))
                                                })
                                            />
                                        }
                                    }).collect_view()}
                                </Flex>
                            </div>
                        </Show>
                    </div>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>
                                        <div class="table__sortable-header" style="cursor: pointer;" on:click=move |_| toggle_sort()>
                                            "Name"
                                            <span class=move || get_sort_class(page_view.with(|v| v.sort_ascending))>
                                                {move || get_sort_indicator(page_view.with(|v| v.sort_ascending))}
                                            </span>
                                        </div>
                                    </TableHeaderCell>
                                    <TableHeaderCell>"Region"</TableHeaderCell>
                                    <TableHeaderCell>"Area, km²"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || page_view.with(|v| v.rows.clone()).into_iter().map(|country| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{country.name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{country.region}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                {format_area(country.area)}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                        {move || page_view.with(|v| v.rows.is_empty()).then(|| view! {
                            <div class="table__empty">"No countries match the selected filters"</div>
                        })}
                    </div>
                </Show>
            </div>
        </div>
    }
}
