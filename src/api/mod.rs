//! Backend API access.
//!
//! Models, the REST client, and the channels that bridge async fetches
//! into the synchronous update loop.

mod channel;
mod client;
mod types;

pub use channel::{DiveDetailChannel, DiveListChannel, StatsChannel};
pub use client::ApiClient;
pub use types::{Dive, DiveDetailResult, DiveListResult, DiveStats, StatsResult};
