//! The proposal writer: job description in, templated outreach text out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use giglens_core::api::{require_non_empty, ProfileApi};

use crate::api::SimulatedApi;

use super::ErrorBanner;

/// Job-description input and the generated proposal, side by side.
#[component]
pub fn ProposalPanel() -> impl IntoView {
    let (description, set_description) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (proposal, set_proposal) = signal(None::<String>);
    let (copied, set_copied) = signal(false);
    let error = RwSignal::new(None::<String>);

    let generate = move |_| {
        let input = description.get_untracked();
        if let Err(invalid) = require_non_empty("job description", &input) {
            error.set(Some(invalid.to_string()));
            return;
        }
        error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            let outcome = SimulatedApi.generate_proposal(&input).await;
            set_busy.set(false);
            match outcome {
                Ok(text) => set_proposal.set(Some(text)),
                Err(failed) => error.set(Some(failed.to_string())),
            }
        });
    };

    let copy_proposal = move |_| {
        if let (Some(window), Some(text)) = (web_sys::window(), proposal.get_untracked()) {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(&text);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section class="panel">
            <h2 class="panel-title">"AI Proposal Generator"</h2>
            <div class="proposal-grid">
                <div>
                    <h3>"Job Description"</h3>
                    <textarea
                        class="proposal-input"
                        placeholder="Paste the job description here..."
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        required
                    ></textarea>
                    <button class="btn btn-primary" on:click=generate disabled=move || busy.get()>
                        {move || if busy.get() { "Generating..." } else { "Generate Proposal" }}
                    </button>
                    <ErrorBanner error=error />
                </div>
                <div>
                    <h3>"Generated Proposal"</h3>
                    {move || match proposal.get() {
                        Some(text) => view! {
                            <div class="proposal-output">
                                <pre class="proposal-text">{text}</pre>
                                <button class="btn btn-ghost" on:click=copy_proposal>
                                    {move || if copied.get() { "Copied \u{2713}" } else { "Copy to Clipboard" }}
                                </button>
                            </div>
                        }.into_any(),
                        None => view! {
                            <div class="proposal-placeholder">
                                "Generated proposal will appear here"
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}
