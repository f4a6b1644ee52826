//! The simulated network boundary.
//!
//! [`SimulatedApi`] is what the panels call: it waits out the contract's
//! fixed latency on the browser event loop, then delegates to the fixture
//! backend. Replacing the simulation with a real client means implementing
//! [`ProfileApi`] over `fetch` and swapping this type out; no view changes.

use giglens_core::api::{
    ApiError, FixtureApi, ProfileApi, ANALYZE_LATENCY_MS, OPTIMIZE_LATENCY_MS, PROPOSAL_LATENCY_MS,
};
use giglens_core::types::{AnalysisResult, SeoSuggestion};
use gloo_timers::future::TimeoutFuture;

/// Fixture backend behind a fixed artificial delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedApi;

impl ProfileApi for SimulatedApi {
    async fn analyze(&self, profile_url: &str) -> Result<AnalysisResult, ApiError> {
        TimeoutFuture::new(ANALYZE_LATENCY_MS).await;
        FixtureApi.analyze(profile_url).await
    }

    async fn generate_proposal(&self, job_description: &str) -> Result<String, ApiError> {
        TimeoutFuture::new(PROPOSAL_LATENCY_MS).await;
        FixtureApi.generate_proposal(job_description).await
    }

    async fn optimize(&self) -> Result<Vec<SeoSuggestion>, ApiError> {
        TimeoutFuture::new(OPTIMIZE_LATENCY_MS).await;
        FixtureApi.optimize().await
    }
}
