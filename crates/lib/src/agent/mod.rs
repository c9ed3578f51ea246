//! SupportAgent API client.
//!
//! Typed access to the upstream support service: a health probe and the
//! agent query endpoint.

mod client;

pub use client::{AgentReply, HealthInfo, SupportApiClient, SupportApiError};
