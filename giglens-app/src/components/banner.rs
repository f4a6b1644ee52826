//! Dismissible error banner shown near the control that failed.

use leptos::prelude::*;

/// Renders the current error, if any, with a dismiss button.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <div class="banner" role="alert">
                <span class="banner-text">{message}</span>
                <button class="banner-dismiss" on:click=move |_| error.set(None)>
                    "\u{00d7}"
                </button>
            </div>
        })}
    }
}
