//! 検索欄コンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(query: ReadSignal<String>, on_query: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="search-bar">
            <input
                type="text"
                id="m-search-bar"
                class="u-full-width"
                placeholder="Search for a movie..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| on_query(event_target_value(&ev))
            />
        </div>
    }
}
