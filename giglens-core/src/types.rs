//! Data model for profile analysis results.
//!
//! Every record here is a plain, short-lived value: created in full by one
//! simulated request, replaced wholesale by the next, never partially
//! updated. They're designed to be:
//!
//! - **Serializable** - the same shapes a real backend would return as JSON
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - partial values via `..Default::default()` in tests
//!
//! # Example
//!
//! ```rust
//! use giglens_core::types::{AnalysisResult, UsageStats};
//!
//! let result = AnalysisResult {
//!     niche: "Full Stack Development".into(),
//!     score: 85,
//!     stats: UsageStats {
//!         profile_views: 150,
//!         client_invites: 12,
//!         search_ranking: 8,
//!     },
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// The five profile metrics shown in the quick-analysis grid, each a
/// percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// How discoverable the profile is in marketplace search
    pub visibility: u8,
    /// How much of the profile is filled out
    pub completeness: u8,
    /// How well the copy is optimized for search terms
    pub optimization: u8,
    /// Client interaction rate (views that lead to contact)
    pub engagement: u8,
    /// Contact-to-hire conversion rate
    pub conversion: u8,
}

impl ProfileMetrics {
    /// Label/value rows in display order, for rendering the metric grid.
    pub fn rows(&self) -> [(&'static str, u8); 5] {
        [
            ("Visibility", self.visibility),
            ("Completeness", self.completeness),
            ("Optimization", self.optimization),
            ("Engagement", self.engagement),
            ("Conversion", self.conversion),
        ]
    }
}

/// Per-device rendering verdicts plus any issues found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCompatibility {
    /// Renders correctly on phones
    pub mobile: bool,
    /// Renders correctly on tablets
    pub tablet: bool,
    /// Renders correctly on desktop
    pub desktop: bool,
    /// Problems to address, empty when everything passes
    pub issues: Vec<String>,
}

impl DeviceCompatibility {
    /// Label/verdict rows in display order.
    pub fn devices(&self) -> [(&'static str, bool); 3] {
        [
            ("Mobile", self.mobile),
            ("Tablet", self.tablet),
            ("Desktop", self.desktop),
        ]
    }
}

/// Kind of a visual-guide annotation point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    /// Something to fix
    Improvement,
    /// Something already working well
    Good,
    /// Something to keep an eye on
    Warning,
}

/// A positioned annotation on a section's visual guide.
///
/// `x` and `y` are percentages of the guide image's width and height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Horizontal position, percent of image width
    pub x: f32,
    /// Vertical position, percent of image height
    pub y: f32,
    /// Tooltip text shown at the point
    pub text: String,
    /// Annotation kind, drives the marker color
    pub kind: HighlightKind,
}

/// An annotated screenshot attached to a profile section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualGuide {
    /// Image path or URL
    pub image: String,
    /// Positioned annotation points
    pub highlights: Vec<Highlight>,
}

/// One scored, collapsible area of profile feedback (title, overview,
/// portfolio, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    /// Section name, also the accordion key
    pub title: String,
    /// The profile's current content for this area
    pub content: String,
    /// Section score out of 100
    pub score: u8,
    /// Concrete changes to make
    pub improvements: Vec<String>,
    /// General advice for this area
    pub tips: Vec<String>,
    /// Optional annotated screenshot
    pub visual_guide: Option<VisualGuide>,
}

/// A competing freelancer in the same niche.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Display name
    pub name: String,
    /// Profile headline
    pub title: String,
    /// Advertised rate in USD per hour
    pub hourly_rate: u32,
    /// Job success percentage
    pub success_rate: u8,
    /// Lifetime earnings in USD
    pub total_earnings: u64,
    /// Headline skills
    pub skills: Vec<String>,
    /// Link to the competitor's profile
    pub profile_url: String,
}

/// Niche-level market context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheInsights {
    /// Demand for this niche, percent
    pub market_demand: u8,
    /// Competition level, percent
    pub competition: u8,
    /// Keywords recommended for this niche
    pub keywords: Vec<String>,
}

/// Profile usage counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Views in the last period
    pub profile_views: u32,
    /// Direct client invites received
    pub client_invites: u32,
    /// Position in niche search results
    pub search_ranking: u32,
}

/// The complete bundle returned by one analysis request.
///
/// There is at most one current `AnalysisResult` per session; a new request
/// replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One-paragraph summary of the profile
    pub overview: String,
    /// What the profile does well
    pub strengths: Vec<String>,
    /// Where the profile falls short
    pub weaknesses: Vec<String>,
    /// Suggested changes, also reused as keyword suggestions
    pub recommendations: Vec<String>,
    /// Detected niche name
    pub niche: String,
    /// Overall score out of 100
    pub score: u8,
    /// The five metric percentages
    pub metrics: ProfileMetrics,
    /// Per-device verdicts
    pub device_compatibility: DeviceCompatibility,
    /// Scored feedback sections, in display order
    pub sections: Vec<ProfileSection>,
    /// Niche market context
    pub niche_insights: NicheInsights,
    /// Competing freelancers
    pub competitors: Vec<Competitor>,
    /// Usage counters
    pub stats: UsageStats,
}

/// Which part of the profile an SEO suggestion targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Search keywords
    Keyword,
    /// Profile headline
    Title,
    /// Overview text
    Overview,
    /// Skill list
    Skill,
}

impl SuggestionKind {
    /// Human-readable label for the card heading.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::Keyword => "Keyword",
            SuggestionKind::Title => "Title",
            SuggestionKind::Overview => "Overview",
            SuggestionKind::Skill => "Skill",
        }
    }
}

/// Expected effect of applying a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Apply first
    High,
    /// Worth doing
    Medium,
    /// Nice to have
    Low,
}

impl Impact {
    /// Uppercase label for the impact pill.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Medium => "MEDIUM",
            Impact::Low => "LOW",
        }
    }
}

/// One SEO optimization suggestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeoSuggestion {
    /// Targeted part of the profile
    pub kind: SuggestionKind,
    /// What to do and why
    pub message: String,
    /// Expected effect
    pub impact: Impact,
    /// What the profile currently says, when applicable
    pub current_value: Option<String>,
    /// What it should say instead, when applicable
    pub recommended_value: Option<String>,
}

/// Wire envelope for simulated responses.
///
/// The mock never produces `success: false` in practice; the error branch
/// exists so a real backend can slot in without changing the contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, present on success
    pub data: Option<T>,
    /// Failure reason, present on failure
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope with a reason.
    pub fn err(reason: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(reason.into()),
        }
    }
}

/// A portfolio entry on the demo profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Project name
    pub title: String,
    /// Short project description
    pub description: String,
    /// Thumbnail path
    pub image_url: String,
}

/// A completed contract on the demo profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    /// Contract title
    pub title: String,
    /// Client rating out of 5
    pub rating: f32,
    /// Client feedback text
    pub feedback: String,
    /// Earnings for this contract in USD
    pub earnings: u64,
    /// Contract duration, e.g. "3 months"
    pub duration: String,
}

/// Static demonstration profile shown in the profile viewer.
///
/// Display-only fixture data, never mutated and never derived from input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFixture {
    /// Freelancer name
    pub name: String,
    /// Profile headline
    pub title: String,
    /// Rate in USD per hour
    pub hourly_rate: u32,
    /// Lifetime earnings in USD
    pub total_earnings: u64,
    /// Job success percentage
    pub job_success: u8,
    /// Country
    pub location: String,
    /// Overview text, may contain newlines
    pub overview: String,
    /// Skill tags
    pub skills: Vec<String>,
    /// Portfolio entries
    pub portfolio: Vec<PortfolioItem>,
    /// Completed contracts
    pub work_history: Vec<WorkHistoryEntry>,
    /// Marketplace badges
    pub badges: Vec<String>,
}

/// A featured freelancer card in the showcase strip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedFreelancer {
    /// Two-letter avatar initials
    pub initials: String,
    /// Display name
    pub name: String,
    /// Specialty headline
    pub title: String,
    /// Job success percentage
    pub success_rate: u8,
    /// Rounded earnings label, e.g. "$500k+"
    pub earnings_label: String,
    /// Rate in USD per hour
    pub hourly_rate: u32,
    /// Headline skills
    pub skills: Vec<String>,
    /// CSS accent class for the avatar gradient
    pub accent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_keeps_wire_field_names() {
        let response = ApiResponse::ok(UsageStats {
            profile_views: 150,
            client_invites: 12,
            search_ranking: 8,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "data": {
                    "profile_views": 150,
                    "client_invites": 12,
                    "search_ranking": 8,
                },
                "error": null,
            })
        );
    }

    #[test]
    fn enum_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(Impact::High).unwrap(),
            serde_json::json!("high")
        );
        assert_eq!(
            serde_json::to_value(SuggestionKind::Overview).unwrap(),
            serde_json::json!("overview")
        );
        assert_eq!(
            serde_json::to_value(HighlightKind::Improvement).unwrap(),
            serde_json::json!("improvement")
        );
    }

    #[test]
    fn failed_envelope_round_trips() {
        let response: ApiResponse<AnalysisResult> = ApiResponse::err("profile not found");
        let json = serde_json::to_string(&response).unwrap();
        let back: ApiResponse<AnalysisResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
