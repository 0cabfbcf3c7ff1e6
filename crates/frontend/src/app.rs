use crate::domain::a001_country::ui::list::CountryList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app">
                <CountryList />
            </main>
        </ConfigProvider>
    }
}
