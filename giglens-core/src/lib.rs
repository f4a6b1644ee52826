//! # giglens-core
//!
//! Data model and service contract for the GigLens profile-analyzer demo.
//!
//! The front-end is a pure projection of the values defined here: the
//! analyzer, proposal writer and SEO optimizer all resolve to fixture
//! payloads behind one injectable async boundary, [`api::ProfileApi`].
//! Swapping the simulation for a real backend means implementing that trait
//! and nothing else.
//!
//! ## Modules
//!
//! - [`types`] - plain serde records for every displayed entity
//! - [`fixtures`] - the fixed payloads behind every simulated request
//! - [`api`] - the request/response contract and its fixture backend
//! - [`session`] - request-sequence guard and accordion state
//! - [`format`] - display formatting helpers
//! - [`seo`] - static page metadata
//!
//! ## Quick start
//!
//! ```rust
//! use giglens_core::api::{FixtureApi, ProfileApi};
//!
//! let result = futures::executor::block_on(
//!     FixtureApi.analyze("https://example.com/freelancers/me"),
//! )
//! .unwrap();
//! assert_eq!(result.score, 85);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod fixtures;
pub mod format;
pub mod seo;
pub mod session;
pub mod types;
