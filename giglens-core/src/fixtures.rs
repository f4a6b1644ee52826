//! The fixed payloads behind every simulated request.
//!
//! Nothing here is derived from user input: the analyzer, the proposal
//! writer and the SEO optimizer all resolve to the values below after an
//! artificial delay. The builders return owned values so each request gets
//! a fresh copy to hand to the session store.

use crate::types::{
    AnalysisResult, Competitor, DeviceCompatibility, FeaturedFreelancer, Highlight, HighlightKind,
    Impact, NicheInsights, PortfolioItem, ProfileFixture, ProfileMetrics, ProfileSection,
    SeoSuggestion, SuggestionKind, UsageStats, VisualGuide, WorkHistoryEntry,
};

/// The analysis payload every submit resolves to.
pub fn analysis_result() -> AnalysisResult {
    AnalysisResult {
        overview: "Experienced Full Stack Developer with expertise in modern web technologies..."
            .into(),
        strengths: vec![
            "Strong technical skills in React and Node.js".into(),
            "Excellent communication and project management".into(),
            "Proven track record of successful projects".into(),
        ],
        weaknesses: vec![
            "Limited experience with cloud platforms".into(),
            "Could improve documentation practices".into(),
        ],
        recommendations: vec![
            "Add more cloud platform certifications".into(),
            "Include more detailed project descriptions".into(),
        ],
        niche: "Full Stack Development".into(),
        score: 85,
        metrics: ProfileMetrics {
            visibility: 95,
            completeness: 85,
            optimization: 90,
            engagement: 80,
            conversion: 75,
        },
        device_compatibility: DeviceCompatibility {
            mobile: true,
            tablet: true,
            desktop: true,
            issues: vec![],
        },
        sections: profile_sections(),
        niche_insights: NicheInsights {
            market_demand: 85,
            competition: 65,
            keywords: vec!["React".into(), "Node.js".into(), "TypeScript".into()],
        },
        competitors: vec![Competitor {
            name: "John Doe".into(),
            title: "Full Stack Developer".into(),
            hourly_rate: 45,
            success_rate: 98,
            total_earnings: 250_000,
            skills: vec!["React".into(), "Node.js".into(), "AWS".into()],
            profile_url: "https://example.com/freelancers/john-doe".into(),
        }],
        stats: UsageStats {
            profile_views: 150,
            client_invites: 12,
            search_ranking: 8,
        },
    }
}

fn profile_sections() -> Vec<ProfileSection> {
    vec![
        ProfileSection {
            title: "Title".into(),
            content: "Full Stack Developer".into(),
            score: 72,
            improvements: vec![
                "Lead with your strongest niche keyword".into(),
                "Mention a headline specialty, not just a role".into(),
            ],
            tips: vec![
                "Titles under 70 characters rank better in search".into(),
                "Pair a role with an outcome clients care about".into(),
            ],
            visual_guide: Some(VisualGuide {
                image: "/images/guides/title.png".into(),
                highlights: vec![
                    Highlight {
                        x: 18.0,
                        y: 32.0,
                        text: "Add a specialty here".into(),
                        kind: HighlightKind::Improvement,
                    },
                    Highlight {
                        x: 64.0,
                        y: 32.0,
                        text: "Good: role is explicit".into(),
                        kind: HighlightKind::Good,
                    },
                ],
            }),
        },
        ProfileSection {
            title: "Overview".into(),
            content: "Experienced developer building web applications for startups.".into(),
            score: 68,
            improvements: vec![
                "Open with a measurable result from a past project".into(),
                "Break the text into scannable bullet points".into(),
            ],
            tips: vec![
                "The first two lines show in search previews".into(),
                "Name the technologies clients search for".into(),
            ],
            visual_guide: None,
        },
        ProfileSection {
            title: "Portfolio".into(),
            content: "Two projects uploaded, no case-study descriptions.".into(),
            score: 55,
            improvements: vec![
                "Add before/after outcomes to each project".into(),
                "Upload at least four items covering your main skills".into(),
            ],
            tips: vec!["Projects with metrics in the description convert best".into()],
            visual_guide: None,
        },
    ]
}

/// The templated proposal every generation resolves to, regardless of the
/// job description (the input is not incorporated; a fidelity gap carried
/// over from the simulated backend).
pub const PROPOSAL_TEMPLATE: &str = "\
Dear [Client Name],

I noticed your project requirements for [Project Type] and I'm confident I can deliver exceptional results. With [X] years of experience in similar projects, I've successfully completed [relevant achievement].

[Job-specific value proposition based on requirements]

Key highlights of my expertise:
\u{2022} [Relevant skill/experience 1]
\u{2022} [Relevant skill/experience 2]
\u{2022} [Relevant achievement/metric]

I'd love to discuss how I can help you achieve your project goals. Let's schedule a call to discuss the details.

Best regards,
[Your Name]";

/// The fixed suggestion list the SEO optimizer resolves to.
pub fn seo_suggestions() -> Vec<SeoSuggestion> {
    vec![
        SeoSuggestion {
            kind: SuggestionKind::Keyword,
            message: "Add more relevant keywords to increase visibility".into(),
            impact: Impact::High,
            current_value: Some("React, Node.js".into()),
            recommended_value: Some(
                "React.js, Node.js, TypeScript, Full Stack Development, API Development".into(),
            ),
        },
        SeoSuggestion {
            kind: SuggestionKind::Title,
            message: "Optimize your profile title for better search ranking".into(),
            impact: Impact::High,
            current_value: Some("Full Stack Developer".into()),
            recommended_value: Some(
                "Senior Full Stack Developer | React.js & Node.js Expert | API Specialist".into(),
            ),
        },
        SeoSuggestion {
            kind: SuggestionKind::Overview,
            message: "Enhance your overview with more searchable terms".into(),
            impact: Impact::Medium,
            current_value: Some("Experienced developer...".into()),
            recommended_value: Some(
                "Expert Full Stack Developer with 8+ years of experience...".into(),
            ),
        },
    ]
}

/// The static demonstration profile shown in the profile viewer.
pub fn demo_profile() -> ProfileFixture {
    ProfileFixture {
        name: "John Developer".into(),
        title: "Full Stack Developer | React & Node.js Expert".into(),
        hourly_rate: 85,
        total_earnings: 150_000,
        job_success: 98,
        location: "United States".into(),
        overview: "Experienced Full Stack Developer with 8+ years of expertise in building \
scalable web applications. Specialized in React.js, Node.js, and cloud technologies.

Key Achievements:
\u{2022} Delivered 50+ successful projects with 100% client satisfaction
\u{2022} Maintained 98% job success rate across 100+ contracts
\u{2022} Expert in performance optimization and modern web technologies"
            .into(),
        skills: vec![
            "React.js".into(),
            "Node.js".into(),
            "TypeScript".into(),
            "AWS".into(),
            "MongoDB".into(),
            "GraphQL".into(),
            "Next.js".into(),
            "Docker".into(),
        ],
        portfolio: vec![
            PortfolioItem {
                title: "E-commerce Platform".into(),
                description: "Built a full-featured e-commerce platform with React, Node.js, and AWS"
                    .into(),
                image_url: "/images/portfolio/ecommerce.png".into(),
            },
            PortfolioItem {
                title: "Real-time Analytics Dashboard".into(),
                description: "Developed a real-time analytics dashboard using React and WebSocket"
                    .into(),
                image_url: "/images/portfolio/dashboard.png".into(),
            },
        ],
        work_history: vec![
            WorkHistoryEntry {
                title: "Full Stack Development for SaaS Platform".into(),
                rating: 5.0,
                feedback: "John is an exceptional developer. Delivered high-quality work ahead of schedule."
                    .into(),
                earnings: 15_000,
                duration: "3 months".into(),
            },
            WorkHistoryEntry {
                title: "E-commerce Website Development".into(),
                rating: 5.0,
                feedback: "Outstanding work! John exceeded all expectations.".into(),
                earnings: 12_000,
                duration: "2 months".into(),
            },
        ],
        badges: vec![
            "Top Rated Plus".into(),
            "Rising Talent".into(),
            "100% Job Success".into(),
            "Expert Vetted".into(),
        ],
    }
}

/// The three featured freelancers in the showcase strip.
pub fn featured_freelancers() -> Vec<FeaturedFreelancer> {
    vec![
        FeaturedFreelancer {
            initials: "JD".into(),
            name: "John Doe".into(),
            title: "Full Stack Developer".into(),
            success_rate: 100,
            earnings_label: "$500k+".into(),
            hourly_rate: 150,
            skills: vec!["React".into(), "Node.js".into(), "AWS".into()],
            accent: "accent-blue".into(),
        },
        FeaturedFreelancer {
            initials: "AS".into(),
            name: "Alice Smith".into(),
            title: "UI/UX Designer".into(),
            success_rate: 98,
            earnings_label: "$300k+".into(),
            hourly_rate: 120,
            skills: vec!["Figma".into(), "UI Design".into(), "UX Research".into()],
            accent: "accent-green".into(),
        },
        FeaturedFreelancer {
            initials: "RJ".into(),
            name: "Robert Johnson".into(),
            title: "DevOps Engineer".into(),
            success_rate: 99,
            earnings_label: "$400k+".into(),
            hourly_rate: 135,
            skills: vec!["Kubernetes".into(), "Docker".into(), "AWS".into()],
            accent: "accent-purple".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn analysis_fixture_matches_contract_literals() {
        let result = analysis_result();
        assert_eq!(result.score, 85);
        assert_eq!(result.stats.profile_views, 150);
        assert_eq!(result.stats.client_invites, 12);
        assert_eq!(result.stats.search_ranking, 8);
        assert_eq!(result.metrics.visibility, 95);
        assert_eq!(result.metrics.conversion, 75);
        assert_eq!(result.niche, "Full Stack Development");
    }

    #[test]
    fn analysis_fixture_is_fully_populated() {
        let result = analysis_result();
        assert!(!result.overview.is_empty());
        assert!(!result.strengths.is_empty());
        assert!(!result.weaknesses.is_empty());
        assert!(!result.recommendations.is_empty());
        assert!(!result.sections.is_empty());
        assert!(!result.competitors.is_empty());
        assert!(!result.niche_insights.keywords.is_empty());
    }

    #[test]
    fn device_compatibility_fixture_passes_all_three() {
        let devices = analysis_result().device_compatibility;
        assert_eq!(
            devices.devices().map(|(_, ok)| ok),
            [true, true, true],
        );
        assert!(devices.issues.is_empty());
    }

    #[test]
    fn sections_keep_display_order_and_unique_titles() {
        let sections = analysis_result().sections;
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Title", "Overview", "Portfolio"]);
    }

    #[test]
    fn seo_suggestions_are_ordered_by_impact() {
        let suggestions = seo_suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].impact, Impact::High);
        assert_eq!(suggestions[1].impact, Impact::High);
        assert_eq!(suggestions[2].impact, Impact::Medium);
        assert!(suggestions
            .iter()
            .all(|s| s.current_value.is_some() && s.recommended_value.is_some()));
    }

    #[test]
    fn demo_profile_has_display_data() {
        let profile = demo_profile();
        assert_eq!(profile.hourly_rate, 85);
        assert_eq!(profile.job_success, 98);
        assert_eq!(profile.skills.len(), 8);
        assert_eq!(profile.portfolio.len(), 2);
        assert_eq!(profile.work_history.len(), 2);
        assert_eq!(profile.badges.len(), 4);
    }
}
