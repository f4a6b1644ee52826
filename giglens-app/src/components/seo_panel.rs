//! The SEO optimizer: one trigger, a fixed list of suggestion cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use giglens_core::api::ProfileApi;
use giglens_core::format;
use giglens_core::types::SeoSuggestion;

use crate::api::SimulatedApi;

use super::ErrorBanner;

/// Optimize button plus the suggestion cards it resolves to.
#[component]
pub fn SeoPanel() -> impl IntoView {
    let (busy, set_busy) = signal(false);
    let (suggestions, set_suggestions) = signal(Vec::<SeoSuggestion>::new());
    let error = RwSignal::new(None::<String>);

    let optimize = move |_| {
        error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            let outcome = SimulatedApi.optimize().await;
            set_busy.set(false);
            match outcome {
                Ok(list) => set_suggestions.set(list),
                Err(failed) => error.set(Some(failed.to_string())),
            }
        });
    };

    view! {
        <section class="panel">
            <div class="seo-intro">
                <h2 class="panel-title">"AI SEO Optimization"</h2>
                <p class="muted">
                    "Our AI analyzes your profile and suggests optimizations to improve "
                    "your visibility in marketplace search results"
                </p>
                <button class="btn btn-accent" on:click=optimize disabled=move || busy.get()>
                    {move || if busy.get() {
                        view! { <span class="spinner"></span>" Optimizing..." }.into_any()
                    } else {
                        view! { "Optimize SEO" }.into_any()
                    }}
                </button>
                <ErrorBanner error=error />
            </div>
            {move || {
                let list = suggestions.get();
                (!list.is_empty()).then(|| view! {
                    <div class="seo-list">
                        {list.into_iter().map(|suggestion| view! {
                            <div class="seo-card">
                                <div class="seo-card-head">
                                    <div>
                                        <h3>{suggestion.kind.label()}" Optimization"</h3>
                                        <p class="muted">{suggestion.message}</p>
                                    </div>
                                    <span class=format::impact_class(suggestion.impact)>
                                        {suggestion.impact.label()}" Impact"
                                    </span>
                                </div>
                                {suggestion.current_value.zip(suggestion.recommended_value).map(|(current, recommended)| view! {
                                    <div class="seo-values">
                                        <div>
                                            <div class="muted small">"Current Value:"</div>
                                            <div class="seo-value current">{current}</div>
                                        </div>
                                        <div>
                                            <div class="muted small">"Recommended Value:"</div>
                                            <div class="seo-value recommended">{recommended}</div>
                                        </div>
                                    </div>
                                })}
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })
            }}
        </section>
    }
}
