use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - page numbers with previous/next arrows
///
/// Pages are 1-indexed. Arrows are disabled on the first/last page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    page_count: Signal<usize>,

    /// Total count of items in the filtered list
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when a page number is selected
    on_page_change: Callback<usize>,

    /// Callback for the "previous" arrow
    on_previous: Callback<()>,

    /// Callback for the "next" arrow
    on_next: Callback<()>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= page_count.get();

    view! {
        <nav class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                (1..=page_count.get().max(1))
                    .map(|number| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--number"
                                class:pagination-btn--active={number == current}
                                on:click=move |_| on_page_change.run(number)
                            >
                                {number.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current_page.get(), page_count.get().max(1), total_count.get())}
            </span>
        </nav>
    }
}
