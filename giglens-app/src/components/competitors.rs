//! Competitor comparison cards.

use giglens_core::format;
use giglens_core::types::Competitor;
use leptos::prelude::*;

/// One card per competing freelancer in the niche.
#[component]
pub fn CompetitorPanel(competitors: Vec<Competitor>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">"Top Competitors in Your Niche"</h2>
            <div class="competitor-grid">
                {competitors.into_iter().map(|competitor| view! {
                    <div class="competitor-card">
                        <div class="competitor-head">
                            <div>
                                <h3>{competitor.name}</h3>
                                <p class="muted">{competitor.title}</p>
                            </div>
                            <div class="competitor-rate">
                                <div class="rate green">{format::currency(competitor.hourly_rate as u64)}"/hr"</div>
                                <div class="muted small">{format::percent(competitor.success_rate)}" Success Rate"</div>
                            </div>
                        </div>
                        <div class="competitor-earnings">
                            <span class="muted small">"Total Earnings"</span>
                            <strong>{format::currency(competitor.total_earnings)}</strong>
                        </div>
                        <div class="pill-row">
                            {competitor.skills.into_iter().map(|skill| view! {
                                <span class="pill gray">{skill}</span>
                            }).collect::<Vec<_>>()}
                        </div>
                        <a href=competitor.profile_url target="_blank" rel="noopener noreferrer" class="card-link">
                            "View Profile \u{2192}"
                        </a>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
