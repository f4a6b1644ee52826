//! UI components for the GigLens single-page app.
//!
//! Every component here is a pure projection of the records in
//! `giglens_core::types`; the only state they own is local toggle state
//! (open accordion section, active tab) and the per-panel request state
//! (busy flag, error banner, last result).
//!
//! # Component Hierarchy
//!
//! ```text
//! App
//! ├── Nav / Hero / Footer            (main.rs)
//! └── AnalyzerPanel
//!     ├── [active tool panel]        (ProposalPanel | SeoPanel | ProfileViewerPanel)
//!     ├── MetricsGrid
//!     ├── KeywordPanel
//!     ├── DevicePanel
//!     ├── ScoreStrip
//!     ├── SectionAccordion
//!     ├── NichePanel
//!     ├── CompetitorPanel
//!     └── Showcase
//! ```

mod analyzer;
mod banner;
mod competitors;
mod device;
mod keywords;
mod metrics;
mod niche;
mod profile_viewer;
mod proposal;
mod sections;
mod seo_panel;
mod showcase;

pub use analyzer::AnalyzerPanel;
pub use banner::ErrorBanner;
pub use competitors::CompetitorPanel;
pub use device::DevicePanel;
pub use keywords::KeywordPanel;
pub use metrics::{MetricsGrid, ScoreStrip};
pub use niche::NichePanel;
pub use profile_viewer::ProfileViewerPanel;
pub use proposal::ProposalPanel;
pub use sections::SectionAccordion;
pub use seo_panel::SeoPanel;
pub use showcase::Showcase;
