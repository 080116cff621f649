use crate::api::client::FetchError;
use crate::models::Property;
use async_trait::async_trait;

/// Common trait for reservation data sources
/// This allows swapping the live API for a fixture source in tests or
/// adding other booking platforms later
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// Fetch all properties with their reservations attached
    async fn fetch_all(&self) -> Result<Vec<Property>, FetchError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
