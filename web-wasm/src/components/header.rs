//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 id="m-name">"Movie Watch List"</h1>
        </header>
    }
}
