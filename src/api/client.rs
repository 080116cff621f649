use crate::api::traits::ReservationSource;
use crate::api::types::Page;
use crate::config::Config;
use crate::models::{Property, Reservation};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const PROPERTIES_PER_PAGE: u32 = 2;
const RESERVATIONS_PER_PAGE: u32 = 10;

/// Reservations are fetched this many days around "now", filtered by check-in date
const WINDOW_DAYS: i64 = 30;

/// Fatal fetch failures. Reservation-page hiccups are not represented here;
/// those degrade to a truncated list instead (see `list_reservations`).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for the Hospitable public API
pub struct HospitableClient {
    client: Client,
    config: Config,
}

impl HospitableClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, config })
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Page<T>, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .json::<Page<T>>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
    }

    /// List every property, walking the paged endpoint in page order.
    ///
    /// The first page carries the total page count, so any failure there (or
    /// on a later page) is fatal for the run.
    pub async fn list_properties(&self) -> Result<Vec<Property>, FetchError> {
        let url = format!("{}/properties", self.config.base_url);

        debug!("fetching properties page 1");
        let first: Page<Property> = self
            .get_page(
                &url,
                &[
                    ("page", "1".to_string()),
                    ("per_page", PROPERTIES_PER_PAGE.to_string()),
                ],
            )
            .await?;

        let last_page = first.meta.last_page;
        let mut properties = first.data;

        for page in 2..=last_page {
            debug!("fetching properties page {page} of {last_page}");
            let next: Page<Property> = self
                .get_page(
                    &url,
                    &[
                        ("page", page.to_string()),
                        ("per_page", PROPERTIES_PER_PAGE.to_string()),
                    ],
                )
                .await?;
            properties.extend(next.data);
        }

        info!(
            "fetched {} properties across {} page(s)",
            properties.len(),
            last_page
        );
        Ok(properties)
    }

    /// List reservations for one property within the check-in window.
    ///
    /// A failed page stops the walk and returns whatever was accumulated, so
    /// one property's API hiccup cannot abort the whole run. Callers get no
    /// signal that the list was truncated beyond the logged warning.
    pub async fn list_reservations(&self, property_id: &str) -> Vec<Reservation> {
        let url = format!("{}/reservations", self.config.base_url);
        let (start_date, end_date) = checkin_window();
        let mut reservations = Vec::new();
        let mut page: u32 = 1;

        loop {
            let query = [
                ("page", page.to_string()),
                ("per_page", RESERVATIONS_PER_PAGE.to_string()),
                ("properties[]", property_id.to_string()),
                ("start_date", start_date.clone()),
                ("end_date", end_date.clone()),
                ("date_query", "checkin".to_string()),
            ];

            match self.get_page::<Reservation>(&url, &query).await {
                Ok(batch) => {
                    reservations.extend(batch.data);
                    if batch.meta.is_last() {
                        break;
                    }
                    page += 1;
                }
                Err(err) => {
                    warn!(
                        "stopping reservation fetch for property {property_id} at page {page}: {err}"
                    );
                    break;
                }
            }
        }

        reservations
    }
}

#[async_trait]
impl ReservationSource for HospitableClient {
    /// Fetch all properties, then attach each property's reservations.
    /// Output order matches the API's property order.
    async fn fetch_all(&self) -> Result<Vec<Property>, FetchError> {
        let mut properties = self.list_properties().await?;

        for property in &mut properties {
            property.reservations = self.list_reservations(&property.id).await;
            debug!(
                "property {} has {} reservation(s) in window",
                property.id,
                property.reservations.len()
            );
        }

        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "Hospitable"
    }
}

/// `[now-30d, now+30d]` as `YYYY-MM-DD` bounds
fn checkin_window() -> (String, String) {
    let now = Utc::now();
    let start = now - chrono::Duration::days(WINDOW_DAYS);
    let end = now + chrono::Duration::days(WINDOW_DAYS);
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}
