//! The scored section accordion.
//!
//! At most one section is open at a time, keyed by title; the state lives
//! in a single [`OpenSection`] so toggling one section cannot disturb the
//! others.

use giglens_core::format;
use giglens_core::session::OpenSection;
use giglens_core::types::ProfileSection;
use leptos::prelude::*;

/// Collapsible scored feedback sections.
#[component]
pub fn SectionAccordion(sections: Vec<ProfileSection>) -> impl IntoView {
    let open = RwSignal::new(OpenSection::default());

    view! {
        <section class="accordion">
            {sections.into_iter().map(|section| {
                let display_title = section.title.clone();
                let toggle_title = section.title.clone();
                let is_open = {
                    let title = section.title.clone();
                    move || open.with(|state| state.is_open(&title))
                };
                let score = section.score;
                let body = move || section_body(&section);

                view! {
                    <article class="accordion-card">
                        <header
                            class="accordion-head"
                            on:click=move |_| open.update(|state| state.toggle(&toggle_title))
                        >
                            <h3 class="accordion-title">{display_title}</h3>
                            <div class="accordion-score">
                                <span class=format::score_class(score)>{score}</span>
                                <span class="muted">" / 100"</span>
                            </div>
                        </header>
                        <Show when=is_open>{body()}</Show>
                    </article>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

fn section_body(section: &ProfileSection) -> impl IntoView {
    view! {
        <div class="accordion-body">
            <div class="accordion-grid">
                <div>
                    <h4>"Current Content"</h4>
                    <p class="section-content">{section.content.clone()}</p>
                </div>
                <div>
                    <h4>"Improvements Needed"</h4>
                    <ul class="bullet-list red">
                        {section.improvements.iter().map(|item| view! {
                            <li>{item.clone()}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h4>"Pro Tips"</h4>
                    <ul class="bullet-list blue">
                        {section.tips.iter().map(|tip| view! {
                            <li>{tip.clone()}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                {section.visual_guide.clone().map(|guide| view! {
                    <div>
                        <h4>"Visual Guide"</h4>
                        <div class="guide-frame">
                            <img src=guide.image class="guide-image" alt="Section visual guide" />
                            {guide.highlights.into_iter().map(|point| view! {
                                <div
                                    class=format::highlight_class(point.kind)
                                    style=format!("left:{}%;top:{}%", point.x, point.y)
                                >
                                    <span class="guide-tip">{point.text}</span>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
