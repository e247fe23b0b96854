//! ステータス表示コンポーネント

use leptos::prelude::*;
use crate::app::Status;

#[component]
pub fn StatusLine(status: ReadSignal<Status>) -> impl IntoView {
    view! {
        <div class=move || format!("status-line {}", status.get().as_class())>
            {move || status.get().message().to_string()}
        </div>
    }
}
