//! HTTP/JSON transport for the remote booking service.
//!
//! Thin layer over reqwest: builds endpoint URLs, sends JSON, and maps
//! transport failures and non-success statuses into [`ServiceError`]. No
//! retries, no caching, no timeouts beyond reqwest's defaults.

use std::sync::Arc;

use busking_core::{Booking, BookingId, BookingRequest, BookingService, Bus, ServiceError};
use reqwest::{
    Client, Method, Response, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::{ConfigError, ServiceConfig};

const BUSES: &str = "buses";
const BOOKINGS: &str = "bookings";

/// Remote booking service over HTTP.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpBookingService {
    client: Client,
    config: Arc<ServiceConfig>,
}

impl HttpBookingService {
    /// Build a client for the configured service.
    ///
    /// Every request negotiates JSON (`Accept: application/json`).
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("busking/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, config: Arc::new(config) })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ServiceError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(network_error)?;
        let body = success_body(response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_booking(
        &self,
        method: Method,
        url: Url,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        tracing::debug!(%method, %url, "sending booking");
        let response =
            self.client.request(method, url).json(booking).send().await.map_err(network_error)?;
        let body = success_body(response).await?;

        match serde_json::from_slice::<Booking>(&body) {
            Ok(saved) => Ok(Some(saved)),
            Err(e) => {
                tracing::debug!(error = %e, "booking saved, response body is not a booking");
                Ok(None)
            },
        }
    }
}

impl BookingService for HttpBookingService {
    async fn list_buses(&self) -> Result<Vec<Bus>, ServiceError> {
        self.get_json(self.config.endpoint(&[BUSES])).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        self.get_json(self.config.endpoint(&[BOOKINGS])).await
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking, ServiceError> {
        let id = id.to_string();
        self.get_json(self.config.endpoint(&[BOOKINGS, &id])).await
    }

    async fn create_booking(
        &self,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        self.send_booking(Method::POST, self.config.endpoint(&[BOOKINGS]), booking).await
    }

    async fn update_booking(
        &self,
        id: &BookingId,
        booking: &BookingRequest,
    ) -> Result<Option<Booking>, ServiceError> {
        let id = id.to_string();
        self.send_booking(Method::PUT, self.config.endpoint(&[BOOKINGS, &id]), booking).await
    }
}

/// Read the body of a success response, or report the status.
async fn success_body(response: Response) -> Result<Vec<u8>, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, url = %response.url(), "request rejected");
        return Err(ServiceError::Status { status: status.as_u16() });
    }
    let body = response.bytes().await.map_err(network_error)?;
    Ok(body.to_vec())
}

fn network_error(err: reqwest::Error) -> ServiceError {
    if err.is_decode() {
        ServiceError::Decode(err.to_string())
    } else {
        ServiceError::Network(err.to_string())
    }
}
