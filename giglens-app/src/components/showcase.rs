//! Featured freelancer cards and the closing call to action.

use giglens_core::fixtures;
use giglens_core::format;
use leptos::prelude::*;

/// Cards for top freelancers in the niche plus a sign-up banner.
#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <section class="panel showcase">
            <h2 class="panel-title">"Top Freelancers to Learn From"</h2>
            <div class="showcase-grid">
                {fixtures::featured_freelancers().into_iter().map(|person| view! {
                    <div class="showcase-card">
                        <div class=format!("showcase-avatar {}", person.accent)>
                            {person.initials}
                        </div>
                        <h3>{person.name}</h3>
                        <p class="muted">{person.title}</p>
                        <div class="showcase-stats">
                            <div class="showcase-stat">
                                <span class="muted small">"Success Rate"</span>
                                <strong>{format::percent(person.success_rate)}</strong>
                            </div>
                            <div class="showcase-stat">
                                <span class="muted small">"Total Earnings"</span>
                                <strong>{person.earnings_label}</strong>
                            </div>
                            <div class="showcase-stat">
                                <span class="muted small">"Hourly Rate"</span>
                                <strong>{format::currency(person.hourly_rate as u64)}"/hr"</strong>
                            </div>
                        </div>
                        <div class="pill-row">
                            {person.skills.into_iter().map(|skill| view! {
                                <span class="pill gray">{skill}</span>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            <div class="cta-banner">
                <h3>"Ready to reach the top of your niche?"</h3>
                <p>"Apply these insights to your own profile and track your progress."</p>
                <a href="#analyzer" class="btn btn-primary">"Analyze My Profile"</a>
            </div>
        </section>
    }
}
