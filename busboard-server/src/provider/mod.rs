//! Departure data providers.
//!
//! The real provider polls the OV API; the mock serves scripted data for
//! tests and offline development. Both implement [`DepartureProvider`],
//! which is what the poller is generic over.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{OvApiClient, OvApiConfig};
pub use convert::convert_documents;
pub use error::ProviderError;
pub use mock::MockProvider;
pub use types::{Accessibility, Pass, StopInfo, TimingPointDocument};

use crate::domain::DepartureSet;

/// A source of departure data.
pub trait DepartureProvider: Send + Sync + 'static {
    /// Fetch a full replacement departure set.
    fn fetch(
        &self,
    ) -> impl std::future::Future<Output = Result<DepartureSet, ProviderError>> + Send;
}
