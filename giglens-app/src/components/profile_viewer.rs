//! Tabbed viewer for the static demonstration profile.

use giglens_core::fixtures;
use giglens_core::format;
use leptos::prelude::*;

/// Local tab selection for the profile viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Overview,
    Portfolio,
    History,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [
        ProfileTab::Overview,
        ProfileTab::Portfolio,
        ProfileTab::History,
    ];

    fn label(self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Portfolio => "Portfolio",
            ProfileTab::History => "Work History",
        }
    }
}

/// Header, tabs and tab content for the demo profile fixture.
#[component]
pub fn ProfileViewerPanel() -> impl IntoView {
    let profile = fixtures::demo_profile();
    let (tab, set_tab) = signal(ProfileTab::Overview);

    let header = view! {
        <div class="profile-head">
            <div class="profile-avatar">"JD"</div>
            <div class="profile-ident">
                <h2>{profile.name.clone()}</h2>
                <p class="muted">{profile.title.clone()}</p>
                <div class="profile-meta">
                    <span>{profile.location.clone()}</span>
                    <span>"\u{2022}"</span>
                    <span>{format::currency(profile.hourly_rate as u64)}"/hr"</span>
                    <span>"\u{2022}"</span>
                    <span>{format::percent(profile.job_success)}" Job Success"</span>
                </div>
            </div>
            <div class="profile-earnings">
                <div class="rate green">{format::currency(profile.total_earnings)}</div>
                <div class="muted small">"Total Earnings"</div>
            </div>
        </div>
    };

    let overview = {
        let profile = profile.clone();
        move || view! {
            <div>
                <h3>"Overview"</h3>
                <p class="profile-overview">{profile.overview.clone()}</p>
                <h3>"Skills"</h3>
                <div class="pill-row">
                    {profile.skills.iter().map(|skill| view! {
                        <span class="pill">{skill.clone()}</span>
                    }).collect::<Vec<_>>()}
                </div>
                <h3>"Badges"</h3>
                <div class="pill-row">
                    {profile.badges.iter().map(|badge| view! {
                        <span class="pill gold">"\u{1f3c6} "{badge.clone()}</span>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        }
    };

    let portfolio = {
        let profile = profile.clone();
        move || view! {
            <div class="portfolio-grid">
                {profile.portfolio.iter().map(|item| view! {
                    <div class="portfolio-card">
                        <img src=item.image_url.clone() class="portfolio-image" alt=item.title.clone() />
                        <div class="portfolio-body">
                            <h4>{item.title.clone()}</h4>
                            <p class="muted small">{item.description.clone()}</p>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        }
    };

    let history = {
        let profile = profile.clone();
        move || view! {
            <div class="history-list">
                {profile.work_history.iter().map(|job| view! {
                    <div class="history-card">
                        <div class="history-head">
                            <h4>{job.title.clone()}</h4>
                            <span class="history-rating">"\u{2605} "{format::rating(job.rating)}</span>
                        </div>
                        <p class="muted">{job.feedback.clone()}</p>
                        <div class="history-meta">
                            <span>{format::currency(job.earnings)}" earned"</span>
                            <span>"\u{2022}"</span>
                            <span>{job.duration.clone()}</span>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        }
    };

    view! {
        <section class="panel profile-viewer">
            {header}
            <div class="tab-bar">
                {ProfileTab::ALL.into_iter().map(|item| view! {
                    <button
                        class=move || if tab.get() == item { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(item)
                    >
                        {item.label()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
            <div class="tab-body">
                {move || match tab.get() {
                    ProfileTab::Overview => overview().into_any(),
                    ProfileTab::Portfolio => portfolio().into_any(),
                    ProfileTab::History => history().into_any(),
                }}
            </div>
        </section>
    }
}
