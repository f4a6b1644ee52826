//! The analysis request/response contract.
//!
//! [`ProfileApi`] is the single seam between the views and whatever answers
//! requests. Today that's [`FixtureApi`] (instant fixtures) wrapped in a
//! latency simulator on the front-end; a real backend client would implement
//! the same trait and slot in without touching view code.

use thiserror::Error;

use crate::fixtures;
use crate::types::{AnalysisResult, ApiResponse, SeoSuggestion};

/// Simulated round-trip for an analysis request, in milliseconds.
pub const ANALYZE_LATENCY_MS: u32 = 1_500;
/// Simulated round-trip for a proposal generation, in milliseconds.
pub const PROPOSAL_LATENCY_MS: u32 = 1_500;
/// Simulated round-trip for an SEO optimization pass, in milliseconds.
pub const OPTIMIZE_LATENCY_MS: u32 = 2_000;

/// Everything a request can fail with.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required input was empty. Checked in app logic, not just by the
    /// input element's `required` marker.
    #[error("{field} must not be empty")]
    EmptyInput {
        /// Name of the offending field, for the banner message
        field: &'static str,
    },
    /// The envelope came back with `success: false`. No fixture path
    /// produces this; it exists for the real backend.
    #[error("{0}")]
    Backend(String),
}

/// Reject empty (or whitespace-only) required inputs before any request
/// leaves the panel. Empty input must never trigger a busy transition.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::EmptyInput { field })
    } else {
        Ok(())
    }
}

impl<T> ApiResponse<T> {
    /// Collapse the wire envelope into a `Result`, mapping the
    /// `success: false` branch to [`ApiError::Backend`].
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(ApiError::Backend(
                self.error
                    .unwrap_or_else(|| "request failed with no reason given".into()),
            )),
        }
    }
}

/// The injectable service boundary shared by the mock and any future real
/// backend.
#[allow(async_fn_in_trait)]
pub trait ProfileApi {
    /// Analyze the profile behind `profile_url`.
    async fn analyze(&self, profile_url: &str) -> Result<AnalysisResult, ApiError>;

    /// Generate an outreach proposal for a job description.
    async fn generate_proposal(&self, job_description: &str) -> Result<String, ApiError>;

    /// Produce SEO suggestions. Takes no input by design.
    async fn optimize(&self) -> Result<Vec<SeoSuggestion>, ApiError>;
}

/// Fixture-backed [`ProfileApi`] that resolves immediately.
///
/// Validation and the response envelope are exercised here so the latency
/// wrapper on the front-end stays a pure timing concern.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureApi;

impl ProfileApi for FixtureApi {
    async fn analyze(&self, profile_url: &str) -> Result<AnalysisResult, ApiError> {
        require_non_empty("profile URL", profile_url)?;
        ApiResponse::ok(fixtures::analysis_result()).into_result()
    }

    async fn generate_proposal(&self, job_description: &str) -> Result<String, ApiError> {
        require_non_empty("job description", job_description)?;
        ApiResponse::ok(fixtures::PROPOSAL_TEMPLATE.to_string()).into_result()
    }

    async fn optimize(&self) -> Result<Vec<SeoSuggestion>, ApiError> {
        ApiResponse::ok(fixtures::seo_suggestions()).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_url_is_rejected_before_any_request() {
        let err = block_on(FixtureApi.analyze("   ")).unwrap_err();
        assert_eq!(
            err,
            ApiError::EmptyInput {
                field: "profile URL"
            }
        );
        assert_eq!(err.to_string(), "profile URL must not be empty");
    }

    #[test]
    fn analyze_resolves_to_the_fixture_payload() {
        let result = block_on(FixtureApi.analyze("https://example.com/freelancers/me")).unwrap();
        assert_eq!(result.score, 85);
        assert_eq!(result.stats.profile_views, 150);
    }

    #[test]
    fn proposal_is_idempotent_for_fixed_input() {
        let first = block_on(FixtureApi.generate_proposal("Need a React dashboard")).unwrap();
        let second = block_on(FixtureApi.generate_proposal("Need a React dashboard")).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Dear [Client Name],"));
    }

    #[test]
    fn empty_job_description_is_rejected() {
        let err = block_on(FixtureApi.generate_proposal("")).unwrap_err();
        assert_eq!(
            err,
            ApiError::EmptyInput {
                field: "job description"
            }
        );
    }

    #[test]
    fn optimize_returns_the_fixed_suggestion_list() {
        let suggestions = block_on(FixtureApi.optimize()).unwrap();
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn failed_envelope_surfaces_its_reason() {
        let response: ApiResponse<()> = ApiResponse::err("profile not found");
        assert_eq!(
            response.into_result(),
            Err(ApiError::Backend("profile not found".into()))
        );
    }

    #[test]
    fn inconsistent_envelope_without_data_is_a_failure() {
        let response: ApiResponse<AnalysisResult> = ApiResponse {
            success: true,
            data: None,
            error: None,
        };
        assert!(response.into_result().is_err());
    }
}
