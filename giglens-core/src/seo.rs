//! Static page metadata consumed by the hosting document.
//!
//! Presentational configuration only: titles, descriptions and social-card
//! tags. Not part of the analysis contract.

use serde::Serialize;

/// Page metadata for the app shell and social cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeoConfig {
    /// Document title
    pub title: &'static str,
    /// Meta description
    pub description: &'static str,
    /// Meta keywords
    pub keywords: &'static str,
    /// Canonical URL
    pub canonical: &'static str,
    /// OpenGraph site name
    pub site_name: &'static str,
    /// OpenGraph title
    pub og_title: &'static str,
    /// OpenGraph description
    pub og_description: &'static str,
    /// OpenGraph object type
    pub og_type: &'static str,
    /// OpenGraph locale
    pub og_locale: &'static str,
    /// Twitter card type
    pub twitter_card: &'static str,
}

/// The one metadata set this site ships with.
pub const PAGE: SeoConfig = SeoConfig {
    title: "GigLens | AI-Powered Freelance Profile Analyzer",
    description: "Analyze and optimize your freelance marketplace profile. Get detailed \
insights, SEO recommendations, and competitor analysis to boost your freelancing success.",
    keywords: "freelance profile analyzer, profile optimization, freelancer seo, \
freelancer success, ai profile analysis",
    canonical: "https://giglens.example.com",
    site_name: "GigLens",
    og_title: "GigLens | AI-Powered Freelance Profile Analyzer",
    og_description: "Transform your freelance profile from invisible to irresistible with \
AI-powered analysis and optimization.",
    og_type: "website",
    og_locale: "en_US",
    twitter_card: "summary_large_image",
};
