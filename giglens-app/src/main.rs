// GigLens — freelance profile analyzer, Leptos 0.8 CSR edition

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Style, Title};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use giglens_core::seo;

mod api;
mod components;
mod styles;

use components::{AnalyzerPanel, ProfileViewerPanel, ProposalPanel, SeoPanel};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

/// Which tool panel is active, driven from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Feature {
    Analyzer,
    Seo,
    Proposal,
    Preview,
}

impl Feature {
    const ALL: [Feature; 4] = [
        Feature::Analyzer,
        Feature::Seo,
        Feature::Proposal,
        Feature::Preview,
    ];

    fn label(self) -> &'static str {
        match self {
            Feature::Analyzer => "Profile Analyzer",
            Feature::Seo => "SEO Optimizer",
            Feature::Proposal => "AI Proposal Writer",
            Feature::Preview => "Profile Preview",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Feature::Analyzer => "AI-powered profile analysis and scoring",
            Feature::Seo => "Optimize your profile visibility",
            Feature::Proposal => "Generate winning proposals instantly",
            Feature::Preview => "See how clients view your profile",
        }
    }
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let (feature, set_feature) = signal(Feature::Analyzer);

    view! {
        <Style>{styles::APP_CSS}</Style>
        <Title text=seo::PAGE.title />
        <Meta name="description" content=seo::PAGE.description />
        <Meta name="keywords" content=seo::PAGE.keywords />
        <Meta property="og:site_name" content=seo::PAGE.site_name />
        <Meta property="og:title" content=seo::PAGE.og_title />
        <Meta property="og:description" content=seo::PAGE.og_description />
        <Meta property="og:type" content=seo::PAGE.og_type />
        <Meta property="og:locale" content=seo::PAGE.og_locale />
        <Meta name="twitter:card" content=seo::PAGE.twitter_card />

        <Nav feature=feature set_feature=set_feature />
        <main>
            <Hero />
            <AnalyzerPanel>
                <Show when=move || feature.get() == Feature::Proposal>
                    <ProposalPanel />
                </Show>
                <Show when=move || feature.get() == Feature::Seo>
                    <SeoPanel />
                </Show>
                <Show when=move || feature.get() == Feature::Preview>
                    <ProfileViewerPanel />
                </Show>
            </AnalyzerPanel>
        </main>
        <Footer />
    }
}

// ============================================
// Navigation — scroll-aware, with mobile menu
// ============================================
#[component]
fn Nav(feature: ReadSignal<Feature>, set_feature: WriteSignal<Feature>) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Explicit subscription, removed again on teardown.
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let past_fold = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .map(|y| y > 50.0)
            .unwrap_or(false);
        set_scrolled.set(past_fold);
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    let on_scroll = leptos::__reexports::send_wrapper::SendWrapper::new(on_scroll);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
    });

    let select = move |item: Feature| {
        set_feature.set(item);
        set_menu_open.set(false);
    };

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"\u{26a1}"</span>
                    <span class="nav-title">"GigLens"</span>
                </a>
                <div class="nav-links">
                    {Feature::ALL.into_iter().map(|item| view! {
                        <button
                            class=move || if feature.get() == item { "nav-link active" } else { "nav-link" }
                            on:click=move |_| select(item)
                        >
                            {item.label()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
                <button
                    class="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    {Feature::ALL.into_iter().map(|item| view! {
                        <button
                            class=move || if feature.get() == item { "nav-mobile-item active" } else { "nav-mobile-item" }
                            on:click=move |_| select(item)
                        >
                            <span class="nav-mobile-label">{item.label()}</span>
                            <span class="nav-mobile-desc">{item.description()}</span>
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}

// ============================================
// Hero Section
// ============================================
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-badge">"Powered by Advanced AI"</div>
                <h1 class="hero-title">"Freelance Profile Analyzer"</h1>
                <p class="hero-description">
                    "Transform your freelance profile from invisible to irresistible with our "
                    "AI-powered analyzer. Get detailed insights and recommendations to improve "
                    "your freelancer profile."
                </p>
                <div class="hero-trust">
                    <span class="trust-item"><span class="trust-dot green"></span>"98% Success Rate"</span>
                    <span class="trust-item"><span class="trust-dot blue"></span>"5000+ Profiles Optimized"</span>
                    <span class="trust-item"><span class="trust-dot purple"></span>"AI-Powered Analysis"</span>
                </div>
            </div>
        </section>
    }
}

// ============================================
// Footer
// ============================================
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"\u{26a1}"</span>
                    <span class="footer-title">"GigLens"</span>
                </div>
                <p class="footer-note">
                    "Demo shell with simulated analysis data. No profile data leaves your browser."
                </p>
            </div>
        </footer>
    }
}
