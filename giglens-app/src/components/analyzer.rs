//! The analysis input panel and the result views it feeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use giglens_core::api::{require_non_empty, ProfileApi};
use giglens_core::session::RequestSeq;
use giglens_core::types::AnalysisResult;

use crate::api::SimulatedApi;

use super::{
    CompetitorPanel, DevicePanel, ErrorBanner, KeywordPanel, MetricsGrid, NichePanel, ScoreStrip,
    SectionAccordion, Showcase,
};

/// URL input, busy state, and every view projected from the session's
/// current [`AnalysisResult`]. `children` is the active tool panel, shown
/// between the input row and the results.
#[component]
pub fn AnalyzerPanel(children: Children) -> impl IntoView {
    let (url, set_url) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let error = RwSignal::new(None::<String>);
    // Exactly one current result per session, replaced wholesale.
    let (analysis, set_analysis) = signal(None::<AnalysisResult>);
    let seq = StoredValue::new(RequestSeq::default());

    let submit = move |_| {
        let input = url.get_untracked();
        // Empty input never reaches the busy transition.
        if let Err(invalid) = require_non_empty("profile URL", &input) {
            error.set(Some(invalid.to_string()));
            return;
        }
        error.set(None);
        let ticket = {
            let mut guard = seq.get_value();
            let ticket = guard.issue();
            seq.set_value(guard);
            ticket
        };
        set_busy.set(true);
        spawn_local(async move {
            let outcome = SimulatedApi.analyze(&input).await;
            if !seq.get_value().is_current(ticket) {
                // Superseded; the newer request owns the busy flag now.
                leptos::logging::warn!("dropping superseded analysis response #{ticket}");
                return;
            }
            set_busy.set(false);
            match outcome {
                Ok(result) => set_analysis.set(Some(result)),
                Err(failed) => error.set(Some(failed.to_string())),
            }
        });
    };

    view! {
        <section id="analyzer" class="panel input-panel">
            <div class="input-row">
                <input
                    type="url"
                    class="url-input"
                    placeholder="Enter your profile URL"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                    required
                />
                <button class="btn btn-primary" on:click=submit disabled=move || busy.get()>
                    {move || if busy.get() {
                        view! { <span class="spinner"></span>" Analyzing..." }.into_any()
                    } else {
                        view! { "\u{26a1} Analyze Profile" }.into_any()
                    }}
                </button>
            </div>
            <ErrorBanner error=error />
        </section>

        {children()}

        {move || analysis.get().map(|result| view! {
            <div class="results">
                <MetricsGrid metrics=result.metrics />
                <KeywordPanel
                    keywords=result.niche_insights.keywords.clone()
                    suggestions=result.recommendations.clone()
                />
                <DevicePanel devices=result.device_compatibility.clone() />
                <ScoreStrip score=result.score stats=result.stats />
                <SectionAccordion sections=result.sections.clone() />
                <NichePanel niche=result.niche.clone() insights=result.niche_insights.clone() />
                <CompetitorPanel competitors=result.competitors.clone() />
                <Showcase />
            </div>
        })}
    }
}
