//! Quick-analysis metric grid and the overall score strip.

use giglens_core::format;
use giglens_core::types::{ProfileMetrics, UsageStats};
use leptos::prelude::*;

/// Five percentage tiles, one per profile metric.
#[component]
pub fn MetricsGrid(metrics: ProfileMetrics) -> impl IntoView {
    view! {
        <section class="panel">
            <div class="metric-grid">
                {metrics.rows().into_iter().map(|(label, value)| view! {
                    <div class="metric-tile">
                        <div class="metric-value">{format::percent(value)}</div>
                        <div class="metric-label">{label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Overall score plus the three usage counters.
#[component]
pub fn ScoreStrip(score: u8, stats: UsageStats) -> impl IntoView {
    view! {
        <section class="panel">
            <div class="stat-grid">
                <div class="stat-tile">
                    <div class=format!("stat-value {}", format::score_class(score))>{score}</div>
                    <div class="stat-label">"Overall Score"</div>
                </div>
                <div class="stat-tile">
                    <div class="stat-value green">{stats.profile_views}</div>
                    <div class="stat-label">"Profile Views"</div>
                </div>
                <div class="stat-tile">
                    <div class="stat-value purple">{stats.client_invites}</div>
                    <div class="stat-label">"Client Invites"</div>
                </div>
                <div class="stat-tile">
                    <div class="stat-value orange">{stats.search_ranking}</div>
                    <div class="stat-label">"Search Ranking"</div>
                </div>
            </div>
        </section>
    }
}
