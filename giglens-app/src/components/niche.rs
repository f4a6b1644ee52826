//! Niche market analysis: demand/competition meters and keyword pills.

use giglens_core::format;
use giglens_core::types::NicheInsights;
use leptos::prelude::*;

/// Market insight bars plus recommended keywords for the detected niche.
#[component]
pub fn NichePanel(niche: String, insights: NicheInsights) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">"Niche Analysis"</h2>
            <p class="panel-subtitle">{niche}</p>
            <div class="niche-grid">
                <div>
                    <h3>"Market Insights"</h3>
                    <MeterBar label="Market Demand" value=insights.market_demand fill="fill-green" />
                    <MeterBar label="Competition Level" value=insights.competition fill="fill-red" />
                </div>
                <div>
                    <h3>"Recommended Keywords"</h3>
                    <div class="pill-row">
                        {insights.keywords.into_iter().map(|keyword| view! {
                            <span class="pill">{keyword}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A labelled horizontal percentage bar.
#[component]
fn MeterBar(label: &'static str, value: u8, fill: &'static str) -> impl IntoView {
    view! {
        <div class="meter">
            <div class="meter-head">
                <span>{label}</span>
                <span>{format::percent(value)}</span>
            </div>
            <div class="meter-track">
                <div class=format!("meter-fill {fill}") style=format!("width:{value}%")></div>
            </div>
        </div>
    }
}
