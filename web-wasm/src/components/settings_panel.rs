//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FS>(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    on_save_api_key: FS,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone,
{
    view! {
        <details class="settings-panel" open=move || api_key.get().is_empty()>
            <summary>"Settings"</summary>
            <div class="form-group">
                <label for="api-key">"TMDB API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="Enter your API key..."
                    prop:value=move || api_key.get()
                    on:input=move |ev| {
                        set_api_key.set(event_target_value(&ev));
                    }
                    on:change=move |ev| on_save_api_key(event_target_value(&ev))
                />
                <a
                    href="https://www.themoviedb.org/settings/api"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "Get an API key →"
                </a>
            </div>
        </details>
    }
}
