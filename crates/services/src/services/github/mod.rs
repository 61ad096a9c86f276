//! GitHub profile service
//!
//! Fetches a user's public profile and repository list from the GitHub REST
//! API and exposes the results through an observable presentation state.
//! Consumers trigger a fetch and watch the state settle; they never await
//! response data directly.

pub mod client;
pub mod service;
pub mod transport;
pub mod types;


pub use client::{GITHUB_API_BASE, GithubClient, GithubClientError};
pub use service::ProfileLoader;
pub use transport::{HttpTransport, StubTransport, Transport, TransportError, TransportResponse};
pub use types::*;
