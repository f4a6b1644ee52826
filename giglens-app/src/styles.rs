//! CSS for the GigLens single-page app.
//!
//! One stylesheet constant, injected into `<head>` via `leptos_meta::Style`.
//! Light marketing theme with a gradient hero and card-based panels.

/// Complete stylesheet for the app shell and every tool panel.
pub const APP_CSS: &str = r#"
:root {
    --bg-page: #f4f6fb;
    --bg-card: #ffffff;
    --text-main: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --brand: #2563eb;
    --brand-dark: #1d4ed8;
    --accent: #7c3aed;
    --green: #059669;
    --red: #dc2626;
    --orange: #ea580c;
    --purple: #7c3aed;
    --radius: 12px;
    --shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
    --container-max: 1080px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.6;
}

h1, h2, h3, h4 {
    margin: 0 0 0.5rem;
    line-height: 1.25;
}

p {
    margin: 0 0 0.75rem;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

main {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem 4rem;
}

.muted { color: var(--text-muted); }
.small { font-size: 0.8rem; }
.green { color: var(--green); }

/* ---- Navigation ---- */
.nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: transparent;
    transition: background 0.2s ease, box-shadow 0.2s ease;
}

.nav.scrolled {
    background: rgba(255, 255, 255, 0.95);
    box-shadow: var(--shadow);
    backdrop-filter: blur(8px);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0.75rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: none;
    color: var(--text-main);
}

.nav-logo { font-size: 1.4rem; }

.nav-title {
    font-size: 1.2rem;
    font-weight: 700;
}

.nav-links {
    display: flex;
    gap: 0.25rem;
}

.nav-link {
    border: none;
    background: none;
    padding: 0.5rem 0.9rem;
    border-radius: 8px;
    font-size: 0.9rem;
    color: var(--text-muted);
    cursor: pointer;
}

.nav-link:hover { color: var(--text-main); }

.nav-link.active {
    background: var(--brand);
    color: #fff;
}

.nav-menu-toggle {
    display: none;
    border: none;
    background: none;
    font-size: 1.3rem;
    cursor: pointer;
    color: var(--text-main);
}

.nav-mobile {
    display: none;
    flex-direction: column;
    padding: 0.5rem 1rem 1rem;
    background: var(--bg-card);
    box-shadow: var(--shadow);
}

.nav-mobile-item {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 0.1rem;
    border: none;
    background: none;
    text-align: left;
    padding: 0.6rem 0.75rem;
    border-radius: 8px;
    cursor: pointer;
}

.nav-mobile-item.active { background: #eff6ff; }

.nav-mobile-label {
    font-weight: 600;
    color: var(--text-main);
}

.nav-mobile-desc {
    font-size: 0.8rem;
    color: var(--text-muted);
}

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-menu-toggle { display: block; }
    .nav-mobile { display: flex; }
}

/* ---- Hero ---- */
.hero {
    text-align: center;
    padding: 4.5rem 0 3rem;
    background: linear-gradient(135deg, #eff6ff 0%, #f5f3ff 100%);
    border-radius: 0 0 24px 24px;
    margin-bottom: 2rem;
}

.hero-badge {
    display: inline-block;
    padding: 0.3rem 0.9rem;
    border-radius: 999px;
    background: #dbeafe;
    color: var(--brand-dark);
    font-size: 0.8rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.hero-title {
    font-size: 2.6rem;
    background: linear-gradient(90deg, var(--brand), var(--accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    max-width: 620px;
    margin: 0 auto 1.5rem;
    color: var(--text-muted);
}

.hero-trust {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 1.25rem;
    font-size: 0.85rem;
    color: var(--text-muted);
}

.trust-item {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
}

.trust-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
}

.trust-dot.green { background: var(--green); }
.trust-dot.blue { background: var(--brand); }
.trust-dot.purple { background: var(--purple); }

/* ---- Panels ---- */
.panel {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.panel-title {
    font-size: 1.25rem;
    margin-bottom: 1rem;
}

.panel-subtitle {
    color: var(--brand);
    font-weight: 600;
    margin-top: -0.75rem;
    margin-bottom: 1rem;
}

.input-panel { margin-top: -1rem; }

.input-row {
    display: flex;
    gap: 0.75rem;
    flex-wrap: wrap;
}

.url-input {
    flex: 1;
    min-width: 240px;
    padding: 0.7rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 0.95rem;
}

.url-input:focus {
    outline: 2px solid var(--brand);
    border-color: transparent;
}

/* ---- Buttons ---- */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.45rem;
    border: none;
    border-radius: 8px;
    padding: 0.7rem 1.3rem;
    font-size: 0.95rem;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
}

.btn:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.btn-primary {
    background: var(--brand);
    color: #fff;
}

.btn-primary:hover:not(:disabled) { background: var(--brand-dark); }

.btn-accent {
    background: var(--accent);
    color: #fff;
}

.btn-ghost {
    background: none;
    border: 1px solid var(--border);
    color: var(--text-main);
}

.spinner {
    width: 14px;
    height: 14px;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: #fff;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* ---- Error banner ---- */
.banner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    margin-top: 1rem;
    padding: 0.7rem 1rem;
    border: 1px solid #fecaca;
    border-radius: 8px;
    background: #fef2f2;
    color: var(--red);
}

.banner-dismiss {
    border: none;
    background: none;
    color: var(--red);
    font-size: 1rem;
    cursor: pointer;
}

/* ---- Metrics and stats ---- */
.metric-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
    gap: 1rem;
}

.metric-tile {
    text-align: center;
    padding: 1rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
}

.metric-value {
    font-size: 1.6rem;
    font-weight: 700;
    color: var(--brand);
}

.metric-label {
    font-size: 0.8rem;
    color: var(--text-muted);
}

.stat-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
    gap: 1rem;
}

.stat-tile {
    text-align: center;
    padding: 1rem;
    background: #f8fafc;
    border-radius: var(--radius);
}

.stat-value {
    font-size: 1.8rem;
    font-weight: 700;
}

.stat-value.green { color: var(--green); }
.stat-value.purple { color: var(--purple); }
.stat-value.orange { color: var(--orange); }

.stat-label {
    font-size: 0.8rem;
    color: var(--text-muted);
}

.score.good { color: var(--green); }
.score.fair { color: var(--orange); }
.score.weak { color: var(--red); }

/* ---- Keywords ---- */
.keyword-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1rem;
}

.keyword-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1rem;
}

.keyword-name {
    font-weight: 700;
    margin-bottom: 0.5rem;
}

.keyword-suggestions {
    margin: 0;
    padding-left: 1.1rem;
    font-size: 0.85rem;
    color: var(--text-muted);
}

/* ---- Device compatibility ---- */
.device-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
    gap: 1rem;
}

.device-tile {
    text-align: center;
    padding: 1rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
}

.device-mark {
    font-size: 1.5rem;
    font-weight: 700;
}

.device-mark.ok { color: var(--green); }
.device-mark.bad { color: var(--red); }

.device-label { color: var(--text-muted); }

.device-issues {
    margin-top: 1rem;
    padding: 0.75rem 1rem;
    border-radius: 8px;
    background: #fffbeb;
    color: #92400e;
    font-size: 0.85rem;
}

/* ---- Section accordion ---- */
.accordion {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}

.accordion-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    overflow: hidden;
}

.accordion-head {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    border: none;
    background: none;
    padding: 1rem 1.25rem;
    cursor: pointer;
    font: inherit;
    text-align: left;
}

.accordion-title { margin: 0; }

.accordion-score {
    font-size: 1.1rem;
    font-weight: 700;
    white-space: nowrap;
}

.accordion-body {
    padding: 0 1.25rem 1.25rem;
    border-top: 1px solid var(--border);
}

.accordion-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.25rem;
    padding-top: 1rem;
}

@media (max-width: 768px) {
    .accordion-grid { grid-template-columns: 1fr; }
}

.section-content {
    font-size: 0.9rem;
    color: var(--text-muted);
}

.bullet-list {
    margin: 0 0 1rem;
    padding-left: 1.1rem;
    font-size: 0.85rem;
}

.bullet-list.red li::marker { color: var(--red); }
.bullet-list.blue li::marker { color: var(--brand); }

/* ---- Visual guide overlay ---- */
.guide-frame {
    position: relative;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.guide-image {
    display: block;
    width: 100%;
}

.guide-dot {
    position: absolute;
    width: 18px;
    height: 18px;
    border-radius: 50%;
    transform: translate(-50%, -50%);
    cursor: pointer;
}

.guide-dot.improvement { background: rgba(220, 38, 38, 0.85); }
.guide-dot.good { background: rgba(5, 150, 105, 0.85); }
.guide-dot.warning { background: rgba(234, 88, 12, 0.85); }

.guide-tip {
    display: none;
    position: absolute;
    left: 50%;
    bottom: 130%;
    transform: translateX(-50%);
    white-space: nowrap;
    background: var(--text-main);
    color: #fff;
    font-size: 0.75rem;
    padding: 0.25rem 0.6rem;
    border-radius: 6px;
}

.guide-dot:hover .guide-tip { display: block; }

/* ---- Niche meters ---- */
.niche-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

@media (max-width: 768px) {
    .niche-grid { grid-template-columns: 1fr; }
}

.meter { margin-bottom: 1rem; }

.meter-head {
    display: flex;
    justify-content: space-between;
    font-size: 0.85rem;
    margin-bottom: 0.3rem;
}

.meter-track {
    height: 8px;
    border-radius: 999px;
    background: #e2e8f0;
    overflow: hidden;
}

.meter-fill {
    height: 100%;
    border-radius: 999px;
}

.fill-green { background: var(--green); }
.fill-red { background: var(--red); }

/* ---- Pills ---- */
.pill-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.4rem;
    margin-bottom: 0.75rem;
}

.pill {
    padding: 0.25rem 0.7rem;
    border-radius: 999px;
    background: #dbeafe;
    color: var(--brand-dark);
    font-size: 0.8rem;
}

.pill.gray {
    background: #f1f5f9;
    color: var(--text-muted);
}

.pill.gold {
    background: #fef3c7;
    color: #92400e;
}

/* ---- Competitors ---- */
.competitor-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1rem;
}

.competitor-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1.25rem;
}

.competitor-head {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
}

.competitor-rate { text-align: right; }

.rate {
    font-size: 1.1rem;
    font-weight: 700;
}

.competitor-earnings {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    padding: 0.5rem 0;
    margin-bottom: 0.5rem;
    border-top: 1px solid var(--border);
    border-bottom: 1px solid var(--border);
}

.card-link {
    color: var(--brand);
    font-size: 0.9rem;
    text-decoration: none;
    font-weight: 600;
}

/* ---- Proposal generator ---- */
.proposal-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

@media (max-width: 768px) {
    .proposal-grid { grid-template-columns: 1fr; }
}

.proposal-input {
    width: 100%;
    min-height: 220px;
    resize: vertical;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font: inherit;
    font-size: 0.9rem;
    margin-bottom: 0.75rem;
}

.proposal-output {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1rem;
    background: #f8fafc;
}

.proposal-text {
    margin: 0 0 0.75rem;
    white-space: pre-wrap;
    font: inherit;
    font-size: 0.9rem;
}

.proposal-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 220px;
    border: 2px dashed var(--border);
    border-radius: var(--radius);
    color: var(--text-muted);
    font-size: 0.9rem;
}

/* ---- SEO optimizer ---- */
.seo-intro {
    text-align: center;
    margin-bottom: 1rem;
}

.seo-intro .muted {
    max-width: 520px;
    margin: 0 auto 1rem;
}

.seo-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.seo-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1.25rem;
}

.seo-card-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 1rem;
    margin-bottom: 0.75rem;
}

.impact-pill {
    padding: 0.25rem 0.7rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 600;
    white-space: nowrap;
}

.impact-pill.high { background: #fee2e2; color: var(--red); }
.impact-pill.medium { background: #ffedd5; color: var(--orange); }
.impact-pill.low { background: #dcfce7; color: var(--green); }

.seo-values {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

@media (max-width: 768px) {
    .seo-values { grid-template-columns: 1fr; }
}

.seo-value {
    padding: 0.6rem 0.9rem;
    border-radius: 8px;
    font-size: 0.85rem;
}

.seo-value.current { background: #fef2f2; color: var(--red); }
.seo-value.recommended { background: #f0fdf4; color: var(--green); }

/* ---- Profile viewer ---- */
.profile-head {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.profile-avatar {
    width: 64px;
    height: 64px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    font-size: 1.2rem;
    color: #fff;
    background: linear-gradient(135deg, var(--brand), var(--accent));
    flex-shrink: 0;
}

.profile-ident { flex: 1; }

.profile-meta {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    font-size: 0.85rem;
    color: var(--text-muted);
}

.profile-earnings { text-align: right; }

.profile-overview {
    white-space: pre-line;
    font-size: 0.9rem;
    color: var(--text-muted);
}

.tab-bar {
    display: flex;
    gap: 0.25rem;
    border-bottom: 1px solid var(--border);
    margin-bottom: 1rem;
}

.tab {
    border: none;
    background: none;
    padding: 0.6rem 1rem;
    font-size: 0.9rem;
    color: var(--text-muted);
    cursor: pointer;
    border-bottom: 2px solid transparent;
}

.tab.active {
    color: var(--brand);
    border-bottom-color: var(--brand);
    font-weight: 600;
}

.portfolio-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1rem;
}

.portfolio-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.portfolio-image {
    display: block;
    width: 100%;
    aspect-ratio: 16 / 9;
    object-fit: cover;
    background: #f1f5f9;
}

.portfolio-body { padding: 0.9rem 1rem; }

.history-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.history-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1rem 1.25rem;
}

.history-head {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
}

.history-rating {
    color: var(--orange);
    font-weight: 600;
    white-space: nowrap;
}

.history-meta {
    display: flex;
    gap: 0.5rem;
    font-size: 0.85rem;
    color: var(--text-muted);
}

/* ---- Showcase ---- */
.showcase-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.showcase-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1.25rem;
    text-align: center;
}

.showcase-avatar {
    width: 56px;
    height: 56px;
    margin: 0 auto 0.75rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    font-weight: 700;
}

.showcase-avatar.accent-blue { background: linear-gradient(135deg, #3b82f6, #1d4ed8); }
.showcase-avatar.accent-green { background: linear-gradient(135deg, #10b981, #047857); }
.showcase-avatar.accent-purple { background: linear-gradient(135deg, #a855f7, #6d28d9); }

.showcase-stats {
    display: flex;
    flex-direction: column;
    gap: 0.3rem;
    margin-bottom: 0.75rem;
}

.showcase-stat {
    display: flex;
    justify-content: space-between;
    font-size: 0.85rem;
}

.showcase .pill-row { justify-content: center; }

.cta-banner {
    text-align: center;
    padding: 2rem 1.5rem;
    border-radius: var(--radius);
    background: linear-gradient(135deg, var(--brand), var(--accent));
    color: #fff;
}

.cta-banner p { color: rgba(255, 255, 255, 0.85); }

.cta-banner .btn-primary {
    background: #fff;
    color: var(--brand-dark);
}

/* ---- Footer ---- */
.footer {
    border-top: 1px solid var(--border);
    background: var(--bg-card);
    padding: 2rem 0;
    text-align: center;
}

.footer-brand {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.4rem;
    margin-bottom: 0.5rem;
}

.footer-title { font-weight: 700; }

.footer-note {
    margin: 0;
    font-size: 0.85rem;
    color: var(--text-muted);
}
"#;
