//! Keyword analysis cards.

use leptos::prelude::*;

/// One card per recommended keyword, each listing the profile-wide
/// suggestion lines.
#[component]
pub fn KeywordPanel(keywords: Vec<String>, suggestions: Vec<String>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">"Keyword Analysis"</h2>
            <div class="keyword-grid">
                {keywords.into_iter().map(|keyword| {
                    let suggestions = suggestions.clone();
                    view! {
                        <div class="keyword-card">
                            <div class="keyword-name">{keyword}</div>
                            <ul class="keyword-suggestions">
                                {suggestions.into_iter().map(|line| view! {
                                    <li>"\u{2713} "{line}</li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
